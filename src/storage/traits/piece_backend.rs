use std::collections::BTreeSet;
use async_trait::async_trait;
use crate::content::structs::content_id::ContentId;
use crate::storage::errors::StorageError;

#[async_trait]
pub trait PieceBackend: Send + Sync {
    /// Stores a piece, replacing any previous bytes for the same address.
    async fn put_piece(&self, content_id: &ContentId, ordinal: u64, data: &[u8]) -> Result<(), StorageError>;

    async fn get_piece(&self, content_id: &ContentId, ordinal: u64) -> Result<Vec<u8>, StorageError>;

    /// Ordinals actually persisted for `content_id`; empty when nothing is stored.
    async fn stored_ordinals(&self, content_id: &ContentId) -> Result<BTreeSet<u64>, StorageError>;
}
