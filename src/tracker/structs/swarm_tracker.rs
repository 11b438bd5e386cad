use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use parking_lot::RwLock;
use crate::config::structs::configuration::Configuration;
use crate::content::structs::content_id::ContentId;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::storage::structs::piece_store::PieceStore;
use crate::tracker::structs::node_id::NodeId;
use crate::tracker::structs::swarm_sharding::SwarmSharding;

pub struct SwarmTracker {
    pub config: Arc<Configuration>,
    pub(crate) swarms_sharding: Arc<SwarmSharding>,
    pub(crate) file_registry: Arc<RwLock<BTreeMap<String, ContentId>>>,
    pub(crate) nodes: Arc<RwLock<HashSet<NodeId>>>,
    pub(crate) storage: PieceStore,
    pub(crate) stats: Arc<StatsAtomics>,
}
