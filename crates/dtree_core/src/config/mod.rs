//! Risk sensitivity configuration
//!
//! `SensitivityConfig` holds everything a risk-attitude sweep needs apart from
//! the tree itself. It can be built in code or read from YAML:
//!
//! ```yaml
//! utility_fn: exp
//! risk_tolerance: 1000.0
//! target: 0        # optional, defaults to the root
//! ```
//!
//! Deserialized configurations are always validated.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{NodeId, UtilityFn};

/// Settings for a risk-attitude sensitivity sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SensitivityConfigData")]
pub struct SensitivityConfig {
    /// Utility function applied at every non-neutral grid point
    pub utility_fn: UtilityFn,
    /// Most risk-averse tolerance swept; the grid runs from risk-neutral
    /// (aversion 0) to an aversion of `1 / risk_tolerance`
    pub risk_tolerance: f64,
    /// Node whose values are tracked
    pub target: NodeId,
}

/// Raw on-disk shape, checked before it becomes a `SensitivityConfig`
#[derive(Debug, Clone, Deserialize)]
struct SensitivityConfigData {
    utility_fn: String,
    risk_tolerance: f64,
    #[serde(default)]
    target: NodeId,
}

impl TryFrom<SensitivityConfigData> for SensitivityConfig {
    type Error = ConfigError;

    fn try_from(data: SensitivityConfigData) -> Result<Self, Self::Error> {
        let config = SensitivityConfig {
            utility_fn: data.utility_fn.parse()?,
            risk_tolerance: data.risk_tolerance,
            target: data.target,
        };
        config.validate()?;
        Ok(config)
    }
}

impl SensitivityConfig {
    /// Create a configuration targeting the root node
    #[must_use]
    pub fn new(utility_fn: UtilityFn, risk_tolerance: f64) -> Self {
        Self {
            utility_fn,
            risk_tolerance,
            target: NodeId::ROOT,
        }
    }

    /// Track a node other than the root
    #[must_use]
    pub fn with_target(mut self, target: NodeId) -> Self {
        self.target = target;
        self
    }

    /// Check the values that do not depend on the tree
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_risk_tolerance(self.risk_tolerance)
    }

    /// Parse and validate a YAML configuration
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let data: SensitivityConfigData =
            serde_saphyr::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::try_from(data)
    }

    /// Read a YAML configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(
            path = %path.display(),
            utility_fn = %config.utility_fn,
            risk_tolerance = config.risk_tolerance,
            "loaded sensitivity config"
        );
        Ok(config)
    }
}

/// Largest accepted risk tolerance. The first non-neutral grid point sits at
/// ten times the tolerance, and its label must fit in an `i64`.
pub const MAX_RISK_TOLERANCE: f64 = 1e17;

/// A risk tolerance is usable when it is strictly positive, no larger than
/// [`MAX_RISK_TOLERANCE`], and its reciprocal (the largest risk aversion
/// swept) is finite.
pub fn validate_risk_tolerance(risk_tolerance: f64) -> Result<(), ConfigError> {
    if risk_tolerance > 0.0
        && risk_tolerance <= MAX_RISK_TOLERANCE
        && (1.0 / risk_tolerance).is_finite()
    {
        Ok(())
    } else {
        Err(ConfigError::InvalidRiskTolerance(risk_tolerance))
    }
}
