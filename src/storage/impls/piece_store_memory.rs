use std::collections::BTreeSet;
use async_trait::async_trait;
use crate::content::structs::content_id::ContentId;
use crate::storage::errors::StorageError;
use crate::storage::structs::piece_store_memory::PieceStoreMemory;
use crate::storage::traits::piece_backend::PieceBackend;

impl PieceStoreMemory {
    pub fn new() -> PieceStoreMemory {
        PieceStoreMemory::default()
    }

    pub fn len(&self) -> usize {
        self.pieces.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.read().is_empty()
    }
}

#[async_trait]
impl PieceBackend for PieceStoreMemory {
    async fn put_piece(&self, content_id: &ContentId, ordinal: u64, data: &[u8]) -> Result<(), StorageError> {
        self.pieces.write().insert((*content_id, ordinal), data.to_vec());
        Ok(())
    }

    async fn get_piece(&self, content_id: &ContentId, ordinal: u64) -> Result<Vec<u8>, StorageError> {
        self.pieces.read()
            .get(&(*content_id, ordinal))
            .cloned()
            .ok_or(StorageError::NotFound { content_id: *content_id, ordinal })
    }

    async fn stored_ordinals(&self, content_id: &ContentId) -> Result<BTreeSet<u64>, StorageError> {
        let lock = self.pieces.read();
        Ok(lock.range((*content_id, 0)..=(*content_id, u64::MAX))
            .map(|((_, ordinal), _)| *ordinal)
            .collect())
    }
}
