//! Identifiers for tree entities

use serde::{Deserialize, Serialize};

/// Index of a node within a decision tree. Node 0 is the root.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NodeId(pub usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}
