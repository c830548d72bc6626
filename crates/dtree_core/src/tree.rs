//! Decision tree evaluator interface
//!
//! Analyses in this crate do not build or solve trees themselves. They drive
//! an evaluator through this trait and read back the values it writes onto
//! the nodes.
//!
//! # Exclusive access
//!
//! An analysis calls `evaluate` / `rollback` several times and reads node
//! values immediately after each call, so it needs the tree to itself for the
//! whole run. Analyses therefore take `&mut T`: the borrow checker rules out a
//! second sweep, or any other mutation, on the same tree while one is running.
//! Callers sharing a tree across threads must serialize access themselves
//! (e.g. hold a `Mutex` guard for the full analysis).

use crate::model::{NodeId, RiskAttitude, TreeNode};

/// A decision tree that can be evaluated and rolled back.
pub trait DecisionTree {
    /// Error raised when the tree itself is invalid (bad probabilities,
    /// cycles, missing payoffs, ...)
    type Error: std::error::Error + 'static;

    /// Number of nodes in the tree
    fn node_count(&self) -> usize;

    /// Read access to a node. `NodeId::ROOT` is the root.
    fn node(&self, id: NodeId) -> Option<&TreeNode>;

    /// Forward pass: computes terminal payoffs and expected values.
    fn evaluate(&mut self) -> Result<(), Self::Error>;

    /// Backward induction.
    ///
    /// With `None`, propagates expected values under risk-neutral semantics.
    /// With a risk attitude, also computes the certainty equivalent of every
    /// node under that utility function and tolerance. Repeated calls with the
    /// same input on an unchanged tree produce the same node values.
    fn rollback(&mut self, attitude: Option<RiskAttitude>) -> Result<(), Self::Error>;

    /// The root node, if the tree is not empty
    fn root(&self) -> Option<&TreeNode> {
        self.node(NodeId::ROOT)
    }
}
