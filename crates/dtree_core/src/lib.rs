//! Decision tree analysis library
//!
//! This crate provides risk attitude sensitivity analysis for decision trees.
//! It drives an external tree evaluator (see [`tree::DecisionTree`]) through a
//! grid of risk aversion coefficients and collects the certainty equivalents
//! of the tracked branches into a table.
//!
//! ```ignore
//! use dtree_core::{RiskAttitudeSensitivity, SensitivityConfig, UtilityFn};
//!
//! let config = SensitivityConfig::new(UtilityFn::Exponential, 75.0);
//! let analysis = RiskAttitudeSensitivity::new(&mut tree, config)?;
//! println!("{}", analysis.table());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod tree;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{ResultTable, RiskAttitudeSensitivity, SweepStrategy};
pub use config::SensitivityConfig;
pub use error::{ConfigError, SensitivityError};
pub use model::{NodeId, NodeKind, RiskAttitude, TreeNode, UtilityFn};
pub use tree::DecisionTree;
