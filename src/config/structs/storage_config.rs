use serde::{Deserialize, Serialize};
use crate::storage::enums::storage_engine::StorageEngine;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StorageConfig {
    pub engine: StorageEngine,
    pub path: String,
}
