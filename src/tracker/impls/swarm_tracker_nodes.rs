use log::debug;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::node_id::NodeId;
use crate::tracker::structs::swarm_tracker::SwarmTracker;

impl SwarmTracker {
    /// Issues an id no other caller has received or announced in this run.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn generate_node_id(&self) -> NodeId
    {
        let mut lock = self.nodes.write();
        loop {
            let candidate = NodeId::random();
            if lock.insert(candidate.clone()) {
                drop(lock);
                self.update_stats(StatsEvent::Nodes, 1);
                debug!("[NODES] Issued {candidate}");
                return candidate;
            }
        }
    }

    /// Marks an id presented by a client as known, so it is never issued.
    /// Returns `true` when the id was new to the tracker.
    pub fn record_node(&self, node_id: &NodeId) -> bool
    {
        let inserted = self.nodes.write().insert(node_id.clone());
        if inserted {
            self.update_stats(StatsEvent::Nodes, 1);
        }
        inserted
    }

    pub fn is_known_node(&self, node_id: &NodeId) -> bool
    {
        self.nodes.read().contains(node_id)
    }

    pub fn nodes_count(&self) -> usize
    {
        self.nodes.read().len()
    }
}
