use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::content::structs::content_id::ContentId;

#[derive(Debug, Clone, Default)]
pub struct PieceStoreMemory {
    pub(crate) pieces: Arc<RwLock<BTreeMap<(ContentId, u64), Vec<u8>>>>,
}
