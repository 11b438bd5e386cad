use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use log::{debug, info};
use crate::config::structs::storage_config::StorageConfig;
use crate::content::structs::content_id::ContentId;
use crate::pieces::errors::AssemblyError;
use crate::pieces::pieces::reassemble_expected;
use crate::pieces::structs::piece::Piece;
use crate::storage::enums::storage_engine::StorageEngine;
use crate::storage::errors::StorageError;
use crate::storage::structs::piece_store::PieceStore;
use crate::storage::structs::piece_store_filesystem::PieceStoreFilesystem;
use crate::storage::structs::piece_store_memory::PieceStoreMemory;
use crate::storage::traits::piece_backend::PieceBackend;

impl PieceStore {
    pub async fn new(config: &StorageConfig) -> Result<PieceStore, StorageError> {
        match config.engine {
            StorageEngine::filesystem => {
                let store = Self::filesystem(&config.path).await?;
                info!("[STORAGE] Using filesystem piece storage at {}", config.path);
                Ok(store)
            }
            StorageEngine::memory => {
                info!("[STORAGE] Using in-memory piece storage");
                Ok(Self::memory())
            }
        }
    }

    pub async fn filesystem(root: impl Into<PathBuf>) -> Result<PieceStore, StorageError> {
        Ok(PieceStore {
            engine: StorageEngine::filesystem,
            backend: Arc::new(PieceStoreFilesystem::open(root).await?),
        })
    }

    pub fn memory() -> PieceStore {
        PieceStore {
            engine: StorageEngine::memory,
            backend: Arc::new(PieceStoreMemory::new()),
        }
    }

    pub fn engine(&self) -> StorageEngine {
        self.engine
    }

    pub fn backend(&self) -> &dyn PieceBackend {
        self.backend.as_ref()
    }

    pub async fn put(&self, content_id: &ContentId, ordinal: u64, data: &[u8]) -> Result<(), StorageError> {
        self.backend.put_piece(content_id, ordinal, data).await?;
        debug!("[STORAGE] Stored piece {content_id}/{ordinal} ({} bytes)", data.len());
        Ok(())
    }

    pub async fn get(&self, content_id: &ContentId, ordinal: u64) -> Result<Vec<u8>, StorageError> {
        self.backend.get_piece(content_id, ordinal).await
    }

    pub async fn list_ordinals(&self, content_id: &ContentId) -> Result<BTreeSet<u64>, StorageError> {
        self.backend.stored_ordinals(content_id).await
    }

    /// Ordinals of `wanted` that are not persisted yet.
    pub async fn missing_ordinals(&self, content_id: &ContentId, wanted: &BTreeSet<u64>) -> Result<BTreeSet<u64>, StorageError> {
        let stored = self.list_ordinals(content_id).await?;
        Ok(wanted.difference(&stored).copied().collect())
    }

    /// Reads pieces `0..total` and reassembles them into the original bytes.
    pub async fn assemble(&self, content_id: &ContentId, total: u64) -> Result<Vec<u8>, StorageError> {
        let mut pieces = Vec::new();
        for ordinal in 0..total {
            match self.get(content_id, ordinal).await {
                Ok(data) => pieces.push(Piece::new(ordinal, data)),
                Err(StorageError::NotFound { .. }) => return Err(AssemblyError::MissingPiece(ordinal).into()),
                Err(error) => return Err(error),
            }
        }
        Ok(reassemble_expected(pieces, total)?)
    }
}

impl fmt::Debug for PieceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PieceStore").field("engine", &self.engine).finish()
    }
}
