use std::fmt;
use std::fmt::Formatter;
use uuid::Uuid;
use crate::tracker::structs::node_id::NodeId;

pub const NODE_ID_PREFIX: &str = "node_";

impl NodeId {
    /// A fresh candidate id. Uniqueness is enforced by the tracker, not here.
    pub fn random() -> NodeId {
        let uuid = Uuid::new_v4().simple().to_string();
        NodeId(format!("{NODE_ID_PREFIX}{}", &uuid[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        NodeId(value)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        NodeId(value.to_string())
    }
}
