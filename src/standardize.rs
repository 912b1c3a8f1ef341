//! Column-wise standardization (zero mean, unit sample variance).

use ndarray::{Array1, Array2, ArrayView2, Axis};

use crate::error::{PcaError, Result};

/// Threshold below which a standard deviation is treated as zero.
const ZERO_VARIANCE_THRESHOLD: f64 = 1e-12;

/// Per-column centering and scaling, with the fit statistics retained so the
/// same transform can be applied to further data.
///
/// Standard deviations use the sample convention (ddof = 1), matching the
/// (n - 1) denominator of the downstream covariance, so the covariance of
/// the standardized matrix is exactly the correlation matrix of the input.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
}

impl StandardScaler {
    /// Learns per-column mean and standard deviation.
    ///
    /// A constant column would make the downstream division undefined; it is
    /// rejected here, naming the variable, rather than passed through
    /// unscaled or silently mapped to zero.
    ///
    /// # Errors
    ///
    /// [`PcaError::Configuration`] for fewer than 2 observations or zero
    /// variables, [`PcaError::DegenerateInput`] for a zero-variance column.
    pub fn fit(matrix: ArrayView2<'_, f64>, variables: &[String]) -> Result<Self> {
        let (n_observations, n_variables) = matrix.dim();
        if n_variables == 0 {
            return Err(PcaError::Configuration(
                "standardization needs at least one variable".to_string(),
            ));
        }
        if variables.len() != n_variables {
            return Err(PcaError::ShapeMismatch(format!(
                "{} variable names for {} columns",
                variables.len(),
                n_variables
            )));
        }
        if n_observations < 2 {
            return Err(PcaError::Configuration(format!(
                "standardization needs at least 2 observations, got {}",
                n_observations
            )));
        }

        let mean = matrix
            .mean_axis(Axis(0))
            .ok_or_else(|| PcaError::Configuration("empty value matrix".to_string()))?;
        let scale = matrix.map_axis(Axis(0), |column| column.std(1.0));

        if let Some((index, _)) = scale
            .iter()
            .enumerate()
            .find(|(_, s)| s.abs() < ZERO_VARIANCE_THRESHOLD)
        {
            return Err(PcaError::DegenerateInput(format!(
                "variable '{}' is constant (zero variance); drop it before analysis",
                variables[index]
            )));
        }

        Ok(Self { mean, scale })
    }

    /// Applies the learned transform: `(x - mean) / std` per column.
    ///
    /// # Errors
    ///
    /// [`PcaError::ShapeMismatch`] if the column count differs from the
    /// fitted one.
    pub fn transform(&self, matrix: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        if matrix.ncols() != self.mean.len() {
            return Err(PcaError::ShapeMismatch(format!(
                "scaler fitted on {} variables, asked to transform {}",
                self.mean.len(),
                matrix.ncols()
            )));
        }
        let mut standardized = matrix.to_owned();
        standardized -= &self.mean;
        standardized /= &self.scale;
        Ok(standardized)
    }

    /// Fits and transforms in one call, the single-batch path of the
    /// pipeline.
    pub fn fit_transform(
        matrix: ArrayView2<'_, f64>,
        variables: &[String],
    ) -> Result<(Self, Array2<f64>)> {
        let scaler = Self::fit(matrix, variables)?;
        let standardized = scaler.transform(matrix)?;
        Ok((scaler, standardized))
    }

    /// Per-column means learned at fit time.
    pub fn mean(&self) -> &Array1<f64> {
        &self.mean
    }

    /// Per-column sample standard deviations learned at fit time.
    pub fn scale(&self) -> &Array1<f64> {
        &self.scale
    }
}
