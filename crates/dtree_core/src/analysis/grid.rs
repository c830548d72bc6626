//! Risk aversion grid and the risk tolerance labels drawn from it.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::config::validate_risk_tolerance;
use crate::error::ConfigError;

/// Number of points in every risk aversion grid
pub const GRID_POINTS: usize = 11;

/// Evenly spaced risk aversion coefficients from 0 (risk-neutral) to
/// `1 / risk_tolerance`.
///
/// The first point is exactly 0 and the last is exactly `1 / risk_tolerance`;
/// points in between are `i * step`, so the sequence never decreases.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAversionGrid {
    aversions: Vec<f64>,
}

impl RiskAversionGrid {
    /// Build the grid for a risk tolerance
    pub fn new(risk_tolerance: f64) -> Result<Self, ConfigError> {
        validate_risk_tolerance(risk_tolerance)?;

        let max_aversion = 1.0 / risk_tolerance;
        let step = max_aversion / (GRID_POINTS - 1) as f64;
        let mut aversions: Vec<f64> = (0..GRID_POINTS).map(|i| step * i as f64).collect();
        aversions[GRID_POINTS - 1] = max_aversion;

        Ok(Self { aversions })
    }

    /// Risk aversion coefficients in sweep order
    #[must_use]
    pub fn aversions(&self) -> &[f64] {
        &self.aversions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.aversions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aversions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.aversions.iter().copied()
    }

    /// Largest aversion in the grid (`1 / risk_tolerance`)
    #[must_use]
    pub fn max_aversion(&self) -> f64 {
        self.aversions.last().copied().unwrap_or(0.0)
    }

    /// Risk tolerance at a grid point; `None` at the risk-neutral point or
    /// past the end of the grid
    #[must_use]
    pub fn risk_tolerance_at(&self, index: usize) -> Option<f64> {
        self.aversions
            .get(index)
            .filter(|&&aversion| aversion != 0.0)
            .map(|aversion| 1.0 / aversion)
    }

    /// One display label per grid point
    #[must_use]
    pub fn labels(&self) -> Vec<RiskToleranceLabel> {
        self.iter().map(RiskToleranceLabel::from_aversion).collect()
    }
}

/// Display label for a grid point: `Infinity` at zero aversion, otherwise the
/// reciprocal of the aversion rounded to an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskToleranceLabel {
    Infinity,
    Finite(i64),
}

impl RiskToleranceLabel {
    /// Label for a risk aversion coefficient. Halves round to even.
    #[must_use]
    pub fn from_aversion(aversion: f64) -> Self {
        if aversion == 0.0 {
            RiskToleranceLabel::Infinity
        } else {
            RiskToleranceLabel::Finite((1.0 / aversion).round_ties_even() as i64)
        }
    }

    #[must_use]
    pub fn is_infinite(&self) -> bool {
        matches!(self, RiskToleranceLabel::Infinity)
    }

    /// The rounded tolerance, if finite
    #[must_use]
    pub fn value(&self) -> Option<i64> {
        match self {
            RiskToleranceLabel::Infinity => None,
            RiskToleranceLabel::Finite(value) => Some(*value),
        }
    }
}

impl fmt::Display for RiskToleranceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskToleranceLabel::Infinity => f.pad("Infinity"),
            RiskToleranceLabel::Finite(value) => f.pad(&value.to_string()),
        }
    }
}

impl Serialize for RiskToleranceLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RiskToleranceLabel::Infinity => serializer.serialize_str("Infinity"),
            RiskToleranceLabel::Finite(value) => serializer.serialize_i64(*value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_endpoints() {
        for risk_tolerance in [0.5, 1.0, 75.0, 1000.0, 3.7e6] {
            let grid = RiskAversionGrid::new(risk_tolerance).unwrap();
            assert_eq!(grid.len(), GRID_POINTS);
            assert_eq!(grid.aversions()[0], 0.0);
            assert_eq!(grid.max_aversion(), 1.0 / risk_tolerance);
            assert!(
                grid.aversions().windows(2).all(|w| w[0] <= w[1]),
                "grid must be non-decreasing for r={risk_tolerance}"
            );
        }
    }

    #[test]
    fn test_grid_linear_spacing() {
        let grid = RiskAversionGrid::new(1000.0).unwrap();
        for (i, aversion) in grid.iter().enumerate() {
            assert!((aversion - i as f64 * 1e-4).abs() < 1e-15);
        }
    }

    #[test]
    fn test_grid_rejects_invalid_tolerance() {
        for risk_tolerance in [0.0, -0.0, -10.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(
                    RiskAversionGrid::new(risk_tolerance),
                    Err(ConfigError::InvalidRiskTolerance(_))
                ),
                "r={risk_tolerance} should be rejected"
            );
        }
        // Reciprocal overflows to infinity
        assert!(RiskAversionGrid::new(f64::MIN_POSITIVE / 4.0).is_err());
    }

    #[test]
    fn test_largest_tolerance_labels_fit() {
        use crate::config::MAX_RISK_TOLERANCE;

        let grid = RiskAversionGrid::new(MAX_RISK_TOLERANCE).unwrap();
        let labels = grid.labels();
        let first = labels[1].value().unwrap();
        assert!(first < i64::MAX, "label saturated");
        assert!((first as f64 - 10.0 * MAX_RISK_TOLERANCE).abs() / (10.0 * MAX_RISK_TOLERANCE) < 1e-12);

        assert!(matches!(
            RiskAversionGrid::new(MAX_RISK_TOLERANCE * 1.5),
            Err(ConfigError::InvalidRiskTolerance(_))
        ));
        assert!(RiskAversionGrid::new(1.0e308).is_err());
    }

    #[test]
    fn test_only_first_label_is_infinite() {
        let labels = RiskAversionGrid::new(75.0).unwrap().labels();
        assert!(labels[0].is_infinite());
        assert_eq!(labels[0].value(), None);
        assert!(labels[1..].iter().all(|label| !label.is_infinite()));
    }

    #[test]
    fn test_labels_for_tolerance_1000() {
        let grid = RiskAversionGrid::new(1000.0).unwrap();
        let labels = grid.labels();
        assert_eq!(labels[0], RiskToleranceLabel::Infinity);
        assert_eq!(labels[1], RiskToleranceLabel::Finite(10_000));
        assert_eq!(labels[2], RiskToleranceLabel::Finite(5_000));
        assert_eq!(labels[10], RiskToleranceLabel::Finite(1_000));
    }

    #[test]
    fn test_labels_for_tolerance_75() {
        let grid = RiskAversionGrid::new(75.0).unwrap();
        let labels: Vec<String> = grid.labels().iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            vec![
                "Infinity", "750", "375", "250", "187", "150", "125", "107", "94", "83", "75"
            ]
        );
    }

    #[test]
    fn test_label_rounds_half_to_even() {
        assert_eq!(
            RiskToleranceLabel::from_aversion(1.0 / 2.5),
            RiskToleranceLabel::Finite(2)
        );
        assert_eq!(
            RiskToleranceLabel::from_aversion(1.0 / 3.5),
            RiskToleranceLabel::Finite(4)
        );
    }

    #[test]
    fn test_risk_tolerance_at() {
        let grid = RiskAversionGrid::new(200.0).unwrap();
        assert_eq!(grid.risk_tolerance_at(0), None);
        assert_eq!(grid.risk_tolerance_at(10), Some(200.0));
        assert_eq!(grid.risk_tolerance_at(11), None);
    }
}
