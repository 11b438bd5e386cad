use log::debug;
use crate::content::structs::content_id::ContentId;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::swarm_tracker::SwarmTracker;

impl SwarmTracker {
    /// Points `file_name` at `content_id`; the last writer wins.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn bind_name(&self, file_name: &str, content_id: ContentId) -> Option<ContentId>
    {
        let previous = self.file_registry.write().insert(file_name.to_string(), content_id);
        match previous {
            None => {
                self.update_stats(StatsEvent::Files, 1);
            }
            Some(old) if old != content_id => {
                debug!("[FILES] {file_name} now points at {content_id} (was {old})");
            }
            Some(_) => {}
        }
        previous
    }

    pub fn resolve_name(&self, file_name: &str) -> Option<ContentId>
    {
        self.file_registry.read().get(file_name).copied()
    }

    pub fn files_count(&self) -> usize
    {
        self.file_registry.read().len()
    }
}
