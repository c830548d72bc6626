//! Risk attitude sensitivity sweep.
//!
//! Re-solves a decision tree at each point of a risk aversion grid and
//! collects the resulting values into a comparison table:
//!
//! - **Decision strategy** (root is a DECISION node): one series per successor
//!   of the target node, keyed by the successor's branch tag.
//! - **Chance strategy** (root is a CHANCE node): a single series for the
//!   target node itself, keyed by its name.
//!
//! At zero aversion the tree is evaluated and rolled back risk-neutrally and
//! expected values are read. Everywhere else the tree is rolled back under the
//! configured utility function with `risk_tolerance = 1 / aversion` and
//! certainty equivalents are read. The chance strategy re-runs the forward
//! evaluation before every such rollback; the decision strategy does not.
//!
//! After the last grid point the tree is rolled back risk-neutrally once more,
//! leaving it as a plain `rollback(None)` would. That final step only runs on
//! success: if any tree call fails the error is returned at once and the tree
//! keeps whatever state the failing call produced.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::SensitivityConfig;
use crate::error::{ConfigError, SensitivityError};
use crate::model::{NodeId, NodeKind, RiskAttitude, UtilityFn, ValueKind};
use crate::tree::DecisionTree;

use super::{
    LineFormat, PlotAxes, PlotCanvas, RISK_TOLERANCE_COLUMN, ResultTable, RiskAversionGrid,
    RiskToleranceLabel,
};

/// Result shape of a sweep, fixed by the kind of the root node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SweepStrategy {
    /// One series per branch of the target node
    Decision,
    /// One series for the target node itself
    Chance,
}

impl SweepStrategy {
    fn for_root(kind: NodeKind) -> Result<Self, ConfigError> {
        match kind {
            NodeKind::Decision => Ok(SweepStrategy::Decision),
            NodeKind::Chance => Ok(SweepStrategy::Chance),
            NodeKind::Terminal => Err(ConfigError::UnsupportedNodeKind {
                node: NodeId::ROOT,
                kind,
            }),
        }
    }

    /// Whether the forward evaluation is repeated before each
    /// risk-adjusted rollback
    #[must_use]
    pub fn reevaluates(&self) -> bool {
        matches!(self, SweepStrategy::Chance)
    }
}

/// Nodes to read at each grid point and the series they feed
struct SweepPlan {
    strategy: SweepStrategy,
    nodes: Vec<NodeId>,
    series_names: Vec<String>,
}

impl SweepPlan {
    /// Resolve and check everything the sweep needs before the tree is touched
    fn prepare<T: DecisionTree>(tree: &T, target: NodeId) -> Result<Self, ConfigError> {
        let root = tree.root().ok_or(ConfigError::EmptyTree)?;
        let strategy = SweepStrategy::for_root(root.kind)?;

        let target_node = tree.node(target).ok_or(ConfigError::NodeNotFound(target))?;
        if target_node.is_terminal() {
            return Err(ConfigError::UnsupportedNodeKind {
                node: target,
                kind: target_node.kind,
            });
        }

        let (nodes, series_names) = match strategy {
            SweepStrategy::Decision => {
                if target_node.successors.is_empty() {
                    return Err(ConfigError::NoBranches(target));
                }
                let mut seen = FxHashSet::default();
                let mut names = Vec::with_capacity(target_node.successors.len());
                for &successor in &target_node.successors {
                    let node = tree
                        .node(successor)
                        .ok_or(ConfigError::NodeNotFound(successor))?;
                    let tag = node
                        .tag_branch
                        .clone()
                        .ok_or(ConfigError::MissingBranchTag { node: successor })?;
                    if !seen.insert(tag.clone()) {
                        return Err(ConfigError::DuplicateBranchTag(tag));
                    }
                    names.push(tag);
                }
                (target_node.successors.clone(), names)
            }
            SweepStrategy::Chance => (vec![target], vec![target_node.name.clone()]),
        };

        if let Some(name) = series_names.iter().find(|n| *n == RISK_TOLERANCE_COLUMN) {
            return Err(ConfigError::ReservedColumnName(name.clone()));
        }

        Ok(Self {
            strategy,
            nodes,
            series_names,
        })
    }

    /// Run the tree at every grid point and collect one value per node
    fn run<T: DecisionTree>(
        &self,
        tree: &mut T,
        grid: &RiskAversionGrid,
        utility_fn: UtilityFn,
    ) -> Result<Vec<Vec<f64>>, SensitivityError<T::Error>> {
        let mut series: Vec<Vec<f64>> = vec![Vec::with_capacity(grid.len()); self.nodes.len()];

        for aversion in grid.iter() {
            let value_kind = if aversion == 0.0 {
                tree.evaluate().map_err(SensitivityError::Evaluation)?;
                tree.rollback(None).map_err(SensitivityError::Evaluation)?;
                ValueKind::ExpectedValue
            } else {
                if self.strategy.reevaluates() {
                    tree.evaluate().map_err(SensitivityError::Evaluation)?;
                }
                let attitude = RiskAttitude::new(utility_fn, 1.0 / aversion);
                tree.rollback(Some(attitude))
                    .map_err(SensitivityError::Evaluation)?;
                ValueKind::CertaintyEquivalent
            };

            for (values, &id) in series.iter_mut().zip(&self.nodes) {
                let value = tree
                    .node(id)
                    .and_then(|node| node.value(value_kind))
                    .ok_or(SensitivityError::MissingValue {
                        node: id,
                        value: value_kind,
                    })?;
                values.push(value);
            }

            tracing::debug!(
                aversion,
                label = %RiskToleranceLabel::from_aversion(aversion),
                value = %value_kind,
                "risk sensitivity grid point"
            );
        }

        Ok(series)
    }
}

/// Certainty equivalents of a decision tree across a range of risk attitudes.
///
/// Built once by [`RiskAttitudeSensitivity::new`]; read-only afterwards.
#[derive(Debug, Clone)]
pub struct RiskAttitudeSensitivity {
    config: SensitivityConfig,
    strategy: SweepStrategy,
    grid: RiskAversionGrid,
    labels: Vec<RiskToleranceLabel>,
    table: ResultTable,
}

impl RiskAttitudeSensitivity {
    /// Run the sweep.
    ///
    /// All configuration checks happen before the first tree call, so a
    /// `SensitivityError::Config` guarantees the tree was not touched.
    pub fn new<T: DecisionTree>(
        tree: &mut T,
        config: SensitivityConfig,
    ) -> Result<Self, SensitivityError<T::Error>> {
        config.validate()?;
        let plan = SweepPlan::prepare(&*tree, config.target)?;
        let grid = RiskAversionGrid::new(config.risk_tolerance)?;
        let labels = grid.labels();

        tracing::debug!(
            strategy = ?plan.strategy,
            nodes = tree.node_count(),
            target = config.target.0,
            utility_fn = %config.utility_fn,
            risk_tolerance = config.risk_tolerance,
            "starting risk sensitivity sweep"
        );

        let series = plan.run(tree, &grid, config.utility_fn)?;

        // Leave the tree risk-neutral
        tree.rollback(None).map_err(SensitivityError::Evaluation)?;

        tracing::info!(
            strategy = ?plan.strategy,
            target = config.target.0,
            series = plan.series_names.len(),
            points = grid.len(),
            "risk sensitivity sweep complete"
        );

        let table = ResultTable::new(
            plan.series_names.into_iter().zip(series).collect(),
            labels.clone(),
        );

        Ok(Self {
            config,
            strategy: plan.strategy,
            grid,
            labels,
            table,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SensitivityConfig {
        &self.config
    }

    #[must_use]
    pub fn strategy(&self) -> SweepStrategy {
        self.strategy
    }

    #[must_use]
    pub fn target(&self) -> NodeId {
        self.config.target
    }

    #[must_use]
    pub fn utility_fn(&self) -> UtilityFn {
        self.config.utility_fn
    }

    #[must_use]
    pub fn risk_tolerance(&self) -> f64 {
        self.config.risk_tolerance
    }

    #[must_use]
    pub fn grid(&self) -> &RiskAversionGrid {
        &self.grid
    }

    #[must_use]
    pub fn labels(&self) -> &[RiskToleranceLabel] {
        &self.labels
    }

    #[must_use]
    pub fn table(&self) -> &ResultTable {
        &self.table
    }

    /// Series names in table order (branch tags, or the target's name)
    pub fn series_names(&self) -> impl Iterator<Item = &str> {
        self.table.series().map(|(name, _)| name)
    }

    /// Values of one series, in grid order
    #[must_use]
    pub fn series(&self, name: &str) -> Option<&[f64]> {
        self.table.values(name)
    }

    /// Describe the results to a canvas: one line per series against the
    /// aversion grid, ticks labelled with the risk tolerances.
    pub fn plot<C: PlotCanvas + ?Sized>(&self, canvas: &mut C) {
        let xs = self.grid.aversions();
        for (i, (name, values)) in self.table.series().enumerate() {
            let format = match self.strategy {
                SweepStrategy::Decision => Some(LineFormat::cycle(i)),
                SweepStrategy::Chance => None,
            };
            canvas.line(xs, values, name, format);
        }

        canvas.finish(&PlotAxes {
            x_ticks: xs.to_vec(),
            x_tick_labels: self.labels.iter().map(ToString::to_string).collect(),
            x_label: "Risk tolerance",
            y_label: "Expected values",
            legend: true,
            grid: true,
        });
    }
}

impl fmt::Display for RiskAttitudeSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.table, f)
    }
}
