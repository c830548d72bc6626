use std::fmt;

use crate::model::{NodeId, NodeKind, ValueKind};

/// Errors detected while validating a sensitivity analysis request.
///
/// Every variant is raised before the tree is touched, so a failed
/// validation never leaves the tree in a mutated state.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Utility function selector is not one of `exp` / `log`
    UnknownUtilityFn(String),
    /// Risk tolerance is zero, negative, NaN or too large
    InvalidRiskTolerance(f64),
    /// The tree has no root node
    EmptyTree,
    NodeNotFound(NodeId),
    /// Node kind has no sweep strategy (terminal nodes)
    UnsupportedNodeKind { node: NodeId, kind: NodeKind },
    /// Decision sweep target without successors
    NoBranches(NodeId),
    MissingBranchTag { node: NodeId },
    DuplicateBranchTag(String),
    /// A series name collides with the label column
    ReservedColumnName(String),
    Parse(String),
    Io(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownUtilityFn(name) => write!(
                f,
                "unknown utility function '{name}' (expected 'exp' or 'log')"
            ),
            ConfigError::InvalidRiskTolerance(value) => write!(
                f,
                "risk tolerance must be strictly positive and at most 1e17, got {value}"
            ),
            ConfigError::EmptyTree => write!(f, "decision tree has no root node"),
            ConfigError::NodeNotFound(id) => write!(f, "node {} not found", id.0),
            ConfigError::UnsupportedNodeKind { node, kind } => write!(
                f,
                "node {} is a {kind} node; only DECISION and CHANCE nodes can be analyzed",
                node.0
            ),
            ConfigError::NoBranches(id) => write!(f, "node {} has no branches", id.0),
            ConfigError::MissingBranchTag { node } => {
                write!(f, "node {} has no branch tag", node.0)
            }
            ConfigError::DuplicateBranchTag(tag) => {
                write!(f, "branch tag '{tag}' appears more than once")
            }
            ConfigError::ReservedColumnName(name) => {
                write!(f, "series name '{name}' is reserved for the label column")
            }
            ConfigError::Parse(msg) => write!(f, "failed to parse configuration: {msg}"),
            ConfigError::Io(msg) => write!(f, "failed to read configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

/// Errors raised while running a risk-attitude sweep.
///
/// `E` is the tree's own error type. Evaluation failures are carried
/// as-is so callers can inspect them without downcasting.
#[derive(Debug)]
pub enum SensitivityError<E> {
    Config(ConfigError),
    /// `evaluate` or `rollback` failed; the tree keeps its partial state
    Evaluation(E),
    /// A successful tree call left a tracked node without the value to read
    MissingValue { node: NodeId, value: ValueKind },
}

impl<E: fmt::Display> fmt::Display for SensitivityError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensitivityError::Config(e) => write!(f, "{e}"),
            SensitivityError::Evaluation(e) => write!(f, "tree evaluation failed: {e}"),
            SensitivityError::MissingValue { node, value } => {
                write!(f, "node {} has no {value} after rollback", node.0)
            }
        }
    }
}

impl<E> std::error::Error for SensitivityError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SensitivityError::Config(e) => Some(e),
            SensitivityError::Evaluation(e) => Some(e),
            SensitivityError::MissingValue { .. } => None,
        }
    }
}

impl<E> From<ConfigError> for SensitivityError<E> {
    fn from(err: ConfigError) -> Self {
        SensitivityError::Config(err)
    }
}

impl<E> SensitivityError<E> {
    /// Returns the configuration error, if this is one
    #[must_use]
    pub fn as_config(&self) -> Option<&ConfigError> {
        match self {
            SensitivityError::Config(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the tree's evaluation error, if this is one
    #[must_use]
    pub fn as_evaluation(&self) -> Option<&E> {
        match self {
            SensitivityError::Evaluation(e) => Some(e),
            _ => None,
        }
    }
}
