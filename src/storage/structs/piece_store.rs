use std::sync::Arc;
use crate::storage::enums::storage_engine::StorageEngine;
use crate::storage::traits::piece_backend::PieceBackend;

#[derive(Clone)]
pub struct PieceStore {
    pub(crate) engine: StorageEngine,
    pub(crate) backend: Arc<dyn PieceBackend>,
}
