//! Tree node view shared with the tree evaluator
//!
//! Nodes are owned by the tree. Analyses only read them: the static
//! attributes (kind, successors, branch tag, name) and the numeric results
//! the evaluator writes in place after each `evaluate` / `rollback`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::NodeId;

/// Kind of a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Decision,
    Chance,
    Terminal,
}

impl NodeKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Decision => "DECISION",
            NodeKind::Chance => "CHANCE",
            NodeKind::Terminal => "TERMINAL",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which numeric result is read off a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Risk-neutral expected value
    ExpectedValue,
    /// Risk-adjusted certainty equivalent
    CertaintyEquivalent,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::ExpectedValue => f.write_str("EV"),
            ValueKind::CertaintyEquivalent => f.write_str("CE"),
        }
    }
}

/// A single node of a decision tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    pub kind: NodeKind,
    /// Child node indices, in branch order
    #[serde(default)]
    pub successors: Vec<NodeId>,
    /// Label of the branch leading into this node (absent on the root)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_branch: Option<String>,
    /// Expected value, set by a risk-neutral rollback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_value: Option<f64>,
    /// Certainty equivalent, set by a rollback under a utility function
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certainty_equivalent: Option<f64>,
}

impl TreeNode {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            successors: Vec::new(),
            tag_branch: None,
            expected_value: None,
            certainty_equivalent: None,
        }
    }

    #[must_use]
    pub fn decision(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Decision)
    }

    #[must_use]
    pub fn chance(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Chance)
    }

    #[must_use]
    pub fn terminal(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Terminal)
    }

    #[must_use]
    pub fn successors(mut self, successors: impl IntoIterator<Item = NodeId>) -> Self {
        self.successors = successors.into_iter().collect();
        self
    }

    #[must_use]
    pub fn tag_branch(mut self, tag: impl Into<String>) -> Self {
        self.tag_branch = Some(tag.into());
        self
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.kind == NodeKind::Terminal
    }

    /// Read the requested numeric result, if the evaluator has produced it
    #[must_use]
    pub fn value(&self, kind: ValueKind) -> Option<f64> {
        match kind {
            ValueKind::ExpectedValue => self.expected_value,
            ValueKind::CertaintyEquivalent => self.certainty_equivalent,
        }
    }
}
