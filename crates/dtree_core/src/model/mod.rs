//! Types shared between analyses and the tree evaluator

mod ids;
mod node;
mod utility;

pub use ids::NodeId;
pub use node::{NodeKind, TreeNode, ValueKind};
pub use utility::{RiskAttitude, UtilityFn};
