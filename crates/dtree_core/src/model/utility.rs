//! Utility function selection
//!
//! The transforms themselves belong to the tree evaluator. This module only
//! names them and carries the risk attitude handed to `rollback`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Utility function used to turn payoffs into utilities during rollback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UtilityFn {
    /// `U(x) = 1 - exp(-x / R)`
    #[serde(rename = "exp", alias = "exponential")]
    Exponential,
    /// `U(x) = ln(x + R)`
    #[serde(rename = "log", alias = "logarithmic")]
    Logarithmic,
}

impl UtilityFn {
    /// Short selector name
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            UtilityFn::Exponential => "exp",
            UtilityFn::Logarithmic => "log",
        }
    }
}

impl fmt::Display for UtilityFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UtilityFn {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exp" | "exponential" => Ok(UtilityFn::Exponential),
            "log" | "logarithmic" => Ok(UtilityFn::Logarithmic),
            _ => Err(ConfigError::UnknownUtilityFn(s.to_string())),
        }
    }
}

/// Risk attitude applied by a non-neutral rollback
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAttitude {
    pub utility_fn: UtilityFn,
    pub risk_tolerance: f64,
}

impl RiskAttitude {
    #[must_use]
    pub fn new(utility_fn: UtilityFn, risk_tolerance: f64) -> Self {
        Self {
            utility_fn,
            risk_tolerance,
        }
    }
}
