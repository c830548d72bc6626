//! Risk attitude sensitivity analysis.
//!
//! Sweeps the risk aversion coefficient over an 11-point grid, re-solving the
//! tree at each point, and tabulates the resulting certainty equivalents per
//! decision branch (or for a single chance node).
//!
//! ```ignore
//! use dtree_core::analysis::RiskAttitudeSensitivity;
//! use dtree_core::config::SensitivityConfig;
//! use dtree_core::model::UtilityFn;
//!
//! let config = SensitivityConfig::new(UtilityFn::Exponential, 1000.0);
//! let analysis = RiskAttitudeSensitivity::new(&mut tree, config)?;
//!
//! // Branch tag -> certainty equivalents, risk-neutral first
//! let invest = analysis.series("Invest");
//! println!("{analysis}");
//! ```

mod grid;
mod plot;
mod risk_sensitivity;
mod table;

pub use grid::*;
pub use plot::*;
pub use risk_sensitivity::*;
pub use table::*;
