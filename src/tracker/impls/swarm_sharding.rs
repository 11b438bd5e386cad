use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::content::structs::content_id::ContentId;
use crate::tracker::structs::swarm_entry::SwarmEntry;
use crate::tracker::structs::swarm_sharding::SwarmSharding;

impl Default for SwarmSharding {
    fn default() -> Self {
        Self::new()
    }
}

impl SwarmSharding {
    #[tracing::instrument(level = "debug")]
    pub fn new() -> SwarmSharding {
        SwarmSharding {
            shards: std::array::from_fn(|_| Arc::new(RwLock::new(BTreeMap::new()))),
        }
    }

    #[inline]
    pub fn get_shard(&self, shard: u8) -> &Arc<RwLock<BTreeMap<ContentId, SwarmEntry>>> {
        &self.shards[shard as usize]
    }

    #[inline]
    pub fn shard_for(&self, content_id: &ContentId) -> &Arc<RwLock<BTreeMap<ContentId, SwarmEntry>>> {
        self.get_shard(content_id.shard())
    }

    pub fn get_swarms_amount(&self) -> usize {
        self.shards.iter().map(|shard| shard.read().len()).sum()
    }
}
