//! Sharded swarm storage for concurrent access.

use crate::content::structs::content_id::ContentId;
use crate::tracker::structs::swarm_entry::SwarmEntry;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Sharded storage for swarm entries with 256 shards.
///
/// Swarms are assigned to shards by the first byte of their content id
/// (`shard_index = content_id.0[0]`). Content ids are SHA-1 digests, so the
/// distribution across shards is uniform.
///
/// # Thread Safety
///
/// Each shard is wrapped in `Arc<RwLock<...>>` using `parking_lot`:
/// - Multiple readers can access the same shard concurrently
/// - Writers get exclusive access to their shard only
/// - Other shards remain accessible during writes
#[derive(Debug)]
pub struct SwarmSharding {
    pub(crate) shards: [Arc<RwLock<BTreeMap<ContentId, SwarmEntry>>>; 256],
}
