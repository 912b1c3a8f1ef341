//! Plain labeled numeric tables, the boundary to rendering collaborators.
//!
//! The core hands these to whatever presentation layer the caller prefers:
//! a console printer via [`std::fmt::Display`], a serializer via serde, or a
//! plotting layer reading the raw matrix. Nothing here draws or writes.

use std::fmt;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{PcaError, Result};

/// Column labels for the retained axes: `PC1`, `PC2`, ...
pub(crate) fn axis_labels(n_components: usize) -> Vec<String> {
    (1..=n_components).map(|axis| format!("PC{}", axis)).collect()
}

/// A numeric matrix with row and column labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledTable {
    row_labels: Vec<String>,
    column_labels: Vec<String>,
    values: Array2<f64>,
}

impl LabeledTable {
    /// # Errors
    ///
    /// [`PcaError::ShapeMismatch`] if the labels do not match the matrix
    /// dimensions.
    pub fn new(
        row_labels: Vec<String>,
        column_labels: Vec<String>,
        values: Array2<f64>,
    ) -> Result<Self> {
        if row_labels.len() != values.nrows() || column_labels.len() != values.ncols() {
            return Err(PcaError::ShapeMismatch(format!(
                "{} row labels and {} column labels for a {} x {} table",
                row_labels.len(),
                column_labels.len(),
                values.nrows(),
                values.ncols()
            )));
        }
        Ok(Self {
            row_labels,
            column_labels,
            values,
        })
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Value by labels, for spot checks and callers that index by name.
    pub fn get(&self, row_label: &str, column_label: &str) -> Option<f64> {
        let row = self.row_labels.iter().position(|l| l == row_label)?;
        let column = self.column_labels.iter().position(|l| l == column_label)?;
        Some(self.values[[row, column]])
    }
}

impl fmt::Display for LabeledTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .row_labels
            .iter()
            .map(|l| l.len())
            .max()
            .unwrap_or(0)
            .max(8);

        write!(f, "{:<label_width$}", "")?;
        for column in &self.column_labels {
            write!(f, " {:>12}", column)?;
        }
        writeln!(f)?;

        for (label, row) in self.row_labels.iter().zip(self.values.rows()) {
            write!(f, "{:<label_width$}", label)?;
            for value in row.iter() {
                write!(f, " {:>12.4}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The six output tables of one analysis run.
///
/// `axes` has one row per retained axis with its eigenvalue, explained
/// variance (percent) and cumulative explained variance (percent); the other
/// tables are variables x axes or observations x axes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PcaReport {
    pub axes: LabeledTable,
    pub loadings: LabeledTable,
    pub scores: LabeledTable,
    pub variable_contributions: LabeledTable,
    pub individual_contributions: LabeledTable,
}
