use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub bind_address: String,
    /// Connections handled at once; further connections wait in the accept backlog.
    pub max_connections: u64,
    /// Seconds allowed for reading a full request and writing the response.
    pub request_timeout: u64,
    pub max_request_size: u64,
}
