use std::collections::BTreeMap;
use crate::tracker::structs::swarm_entry::SwarmEntry;

impl Default for SwarmEntry {
    fn default() -> Self {
        Self::new()
    }
}

impl SwarmEntry {
    pub fn new() -> SwarmEntry {
        SwarmEntry {
            peers: BTreeMap::new(),
            total_pieces: None,
            updated: std::time::Instant::now(),
        }
    }
}
