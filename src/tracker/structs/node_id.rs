use serde::{Deserialize, Serialize};

/// Opaque node identifier of the form `node_<8 hex chars>`.
///
/// Assigned by the tracker on `register`; unique among the ids the tracker
/// knows about for the lifetime of the process.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
#[serde(transparent)]
pub struct NodeId(pub String);
