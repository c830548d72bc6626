//! Column-oriented result table for a risk sensitivity sweep.
//!
//! One numeric column per tracked series followed by the `Risk Tolerance`
//! label column. Rows follow grid order (increasing risk aversion).

use std::fmt;

use rustc_hash::FxHashMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::RiskToleranceLabel;

/// Name of the label column appended to every table
pub const RISK_TOLERANCE_COLUMN: &str = "Risk Tolerance";

/// Values held by a column
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColumnData {
    Values(Vec<f64>),
    Labels(Vec<RiskToleranceLabel>),
}

impl ColumnData {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Values(values) => values.len(),
            ColumnData::Labels(labels) => labels.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cell(&self, row: usize) -> Option<Cell> {
        match self {
            ColumnData::Values(values) => values.get(row).copied().map(Cell::Value),
            ColumnData::Labels(labels) => labels.get(row).copied().map(Cell::Label),
        }
    }
}

/// A named column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

/// A single table cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    Value(f64),
    Label(RiskToleranceLabel),
}

impl Cell {
    #[must_use]
    pub fn as_value(&self) -> Option<f64> {
        match self {
            Cell::Value(value) => Some(*value),
            Cell::Label(_) => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Value(value) => write!(f, "{value:.6}"),
            Cell::Label(label) => write!(f, "{label}"),
        }
    }
}

/// Read-only sweep results addressable by column name and row index
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    columns: Vec<Column>,
    index: FxHashMap<String, usize>,
    num_rows: usize,
}

impl ResultTable {
    /// Assemble a table from ordered series and the grid labels.
    ///
    /// Callers guarantee that every series has one value per label and that
    /// no series is named `Risk Tolerance`.
    pub(crate) fn new(series: Vec<(String, Vec<f64>)>, labels: Vec<RiskToleranceLabel>) -> Self {
        let num_rows = labels.len();
        debug_assert!(series.iter().all(|(_, values)| values.len() == num_rows));

        let mut columns: Vec<Column> = series
            .into_iter()
            .map(|(name, values)| Column {
                name,
                data: ColumnData::Values(values),
            })
            .collect();
        columns.push(Column {
            name: RISK_TOLERANCE_COLUMN.to_string(),
            data: ColumnData::Labels(labels),
        });

        let index = columns
            .iter()
            .enumerate()
            .map(|(i, column)| (column.name.clone(), i))
            .collect();

        Self {
            columns,
            index,
            num_rows,
        }
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.index.get(name).map(|&i| &self.columns[i])
    }

    /// Numeric values of a series column
    #[must_use]
    pub fn values(&self, name: &str) -> Option<&[f64]> {
        match &self.column(name)?.data {
            ColumnData::Values(values) => Some(values),
            ColumnData::Labels(_) => None,
        }
    }

    /// The `Risk Tolerance` label column
    #[must_use]
    pub fn labels(&self) -> &[RiskToleranceLabel] {
        match self.columns.last().map(|column| &column.data) {
            Some(ColumnData::Labels(labels)) => labels,
            _ => &[],
        }
    }

    /// Numeric series columns, in table order, without the label column
    pub fn series(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns.iter().filter_map(|column| match &column.data {
            ColumnData::Values(values) => Some((column.name.as_str(), values.as_slice())),
            ColumnData::Labels(_) => None,
        })
    }

    #[must_use]
    pub fn cell(&self, name: &str, row: usize) -> Option<Cell> {
        self.column(name)?.data.cell(row)
    }

    /// All cells of a row, in column order
    #[must_use]
    pub fn row(&self, row: usize) -> Option<Vec<Cell>> {
        if row >= self.num_rows {
            return None;
        }
        self.columns
            .iter()
            .map(|column| column.data.cell(row))
            .collect()
    }
}

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|column| {
                (0..self.num_rows)
                    .filter_map(|row| column.data.cell(row))
                    .map(|cell| cell.to_string())
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&cells)
            .map(|(column, values)| {
                values
                    .iter()
                    .map(String::len)
                    .chain(std::iter::once(column.name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let index_width = self.num_rows.saturating_sub(1).to_string().len();

        write!(f, "{:index_width$}", "")?;
        for (column, width) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>width$}", column.name)?;
        }
        writeln!(f)?;

        for row in 0..self.num_rows {
            write!(f, "{row:<index_width$}")?;
            for (values, width) in cells.iter().zip(&widths) {
                let value = values.get(row).map(String::as_str).unwrap_or("");
                write!(f, "  {value:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Serializes as `{column name: [values...]}` in column order
impl Serialize for ResultTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in &self.columns {
            map.serialize_entry(&column.name, &column.data)?;
        }
        map.end()
    }
}
