use serde::{Deserialize, Serialize};
use crate::config::structs::node_config::NodeConfig;
use crate::config::structs::storage_config::StorageConfig;
use crate::config::structs::tracker_config::TrackerConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub tracker: TrackerConfig,
    pub storage: StorageConfig,
    pub node: NodeConfig,
}
