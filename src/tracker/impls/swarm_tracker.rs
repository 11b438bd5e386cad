use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use parking_lot::RwLock;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::storage::structs::piece_store::PieceStore;
use crate::tracker::structs::swarm_sharding::SwarmSharding;
use crate::tracker::structs::swarm_tracker::SwarmTracker;

impl SwarmTracker {
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn new(config: Arc<Configuration>, storage: PieceStore) -> SwarmTracker
    {
        SwarmTracker {
            config,
            swarms_sharding: Arc::new(SwarmSharding::new()),
            file_registry: Arc::new(RwLock::new(BTreeMap::new())),
            nodes: Arc::new(RwLock::new(HashSet::new())),
            storage,
            stats: Arc::new(StatsAtomics::new()),
        }
    }

    pub fn storage(&self) -> &PieceStore {
        &self.storage
    }
}

impl std::fmt::Debug for SwarmTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwarmTracker")
            .field("swarms", &self.swarms_sharding.get_swarms_amount())
            .field("files", &self.file_registry.read().len())
            .field("nodes", &self.nodes.read().len())
            .field("storage", &self.storage)
            .finish()
    }
}
