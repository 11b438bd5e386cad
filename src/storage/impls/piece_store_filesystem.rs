use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use uuid::Uuid;
use crate::content::structs::content_id::ContentId;
use crate::storage::errors::StorageError;
use crate::storage::structs::piece_store_filesystem::PieceStoreFilesystem;
use crate::storage::traits::piece_backend::PieceBackend;

pub const PIECE_EXTENSION: &str = ".piece";

impl PieceStoreFilesystem {
    pub async fn open(root: impl Into<PathBuf>) -> Result<PieceStoreFilesystem, StorageError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(PieceStoreFilesystem { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn content_dir(&self, content_id: &ContentId) -> PathBuf {
        self.root.join(content_id.to_string())
    }

    pub fn piece_path(&self, content_id: &ContentId, ordinal: u64) -> PathBuf {
        self.content_dir(content_id).join(format!("{ordinal}{PIECE_EXTENSION}"))
    }

    pub fn parse_piece_name(name: &str) -> Option<u64> {
        name.strip_suffix(PIECE_EXTENSION)?.parse().ok()
    }
}

#[async_trait]
impl PieceBackend for PieceStoreFilesystem {
    async fn put_piece(&self, content_id: &ContentId, ordinal: u64, data: &[u8]) -> Result<(), StorageError> {
        let dir = self.content_dir(content_id);
        tokio::fs::create_dir_all(&dir).await?;

        // Readers only ever see complete pieces.
        let temporary = dir.join(format!(".{ordinal}.{}.tmp", Uuid::new_v4().simple()));
        tokio::fs::write(&temporary, data).await?;
        if let Err(error) = tokio::fs::rename(&temporary, self.piece_path(content_id, ordinal)).await {
            let _ = tokio::fs::remove_file(&temporary).await;
            return Err(error.into());
        }
        Ok(())
    }

    async fn get_piece(&self, content_id: &ContentId, ordinal: u64) -> Result<Vec<u8>, StorageError> {
        match tokio::fs::read(self.piece_path(content_id, ordinal)).await {
            Ok(data) => Ok(data),
            Err(error) if error.kind() == ErrorKind::NotFound => Err(StorageError::NotFound { content_id: *content_id, ordinal }),
            Err(error) => Err(error.into()),
        }
    }

    async fn stored_ordinals(&self, content_id: &ContentId) -> Result<BTreeSet<u64>, StorageError> {
        let mut ordinals = BTreeSet::new();
        let mut entries = match tokio::fs::read_dir(self.content_dir(content_id)).await {
            Ok(entries) => entries,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(ordinals),
            Err(error) => return Err(error.into()),
        };
        while let Some(entry) = entries.next_entry().await? {
            if let Some(ordinal) = entry.file_name().to_str().and_then(Self::parse_piece_name) {
                ordinals.insert(ordinal);
            }
        }
        Ok(ordinals)
    }
}
