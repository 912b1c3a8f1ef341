//! Labeled input table for the pipeline.

use ndarray::{Array2, ArrayView2};

use crate::error::{PcaError, Result};

/// An ordered set of labeled observations over a fixed list of named
/// numeric variables.
///
/// Every observation holds a value for every variable; the variable order is
/// identical across observations. Categorical metadata the analysis ignores
/// (origin, fuel type, ...) is expected to be stripped by the data source
/// before construction; the dataset is entirely numeric.
#[derive(Debug, Clone)]
pub struct Dataset {
    labels: Vec<String>,
    variables: Vec<String>,
    values: Array2<f64>,
}

impl Dataset {
    /// Builds a dataset from observation labels, variable names and the
    /// value matrix, shape (n_observations, n_variables).
    ///
    /// # Errors
    ///
    /// Returns [`PcaError::ShapeMismatch`] if the label count or variable
    /// count disagrees with the matrix dimensions, and
    /// [`PcaError::Configuration`] if any value is non-finite (numeric
    /// coercion is the data source's job; a NaN here means it failed).
    pub fn new(labels: Vec<String>, variables: Vec<String>, values: Array2<f64>) -> Result<Self> {
        let (n_observations, n_variables) = values.dim();
        if labels.len() != n_observations {
            return Err(PcaError::ShapeMismatch(format!(
                "{} observation labels for a {} x {} value matrix",
                labels.len(),
                n_observations,
                n_variables
            )));
        }
        if variables.len() != n_variables {
            return Err(PcaError::ShapeMismatch(format!(
                "{} variable names for a {} x {} value matrix",
                variables.len(),
                n_observations,
                n_variables
            )));
        }
        if let Some(((row, col), _)) = values.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(PcaError::Configuration(format!(
                "non-finite value for observation '{}', variable '{}'",
                labels[row], variables[col]
            )));
        }
        Ok(Self {
            labels,
            variables,
            values,
        })
    }

    pub fn n_observations(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_variables(&self) -> usize {
        self.values.ncols()
    }

    /// Observation labels, in row order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Variable names, in column order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// The raw value matrix, shape (n_observations, n_variables).
    pub fn values(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }
}
