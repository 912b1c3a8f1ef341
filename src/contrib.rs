//! Percentage contributions of variables and observations to each axis.
//!
//! Both calculations are the same square-and-normalize: the share of an
//! axis's squared mass held by one row, expressed as a percentage. Columns
//! therefore sum to 100 per axis.

use ndarray::{Array2, ArrayView2};

use crate::error::{PcaError, Result};

/// Contribution of each variable to each axis, from the loadings matrix.
///
/// `100 * loadings[i][j]^2 / Σ_i loadings[i][j]^2`.
///
/// # Errors
///
/// [`PcaError::DegenerateInput`] if an axis has all-zero loadings, which
/// would make the normalization undefined.
pub fn variable_contributions(loadings: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
    squared_share(loadings, "loadings")
}

/// Contribution of each observation to each axis, from the scores matrix.
///
/// `100 * scores[o][j]^2 / Σ_o scores[o][j]^2`.
///
/// # Errors
///
/// [`PcaError::DegenerateInput`] if an axis has all-zero scores.
pub fn individual_contributions(scores: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
    squared_share(scores, "scores")
}

fn squared_share(matrix: ArrayView2<'_, f64>, what: &str) -> Result<Array2<f64>> {
    let squared = matrix.mapv(|v| v * v);
    let mut shares = Array2::<f64>::zeros(matrix.dim());
    for (axis, column) in squared.columns().into_iter().enumerate() {
        let mass: f64 = column.sum();
        if mass <= 0.0 {
            return Err(PcaError::DegenerateInput(format!(
                "axis PC{} has all-zero {}; contributions are undefined",
                axis + 1,
                what
            )));
        }
        for (row, &value) in column.iter().enumerate() {
            shares[[row, axis]] = 100.0 * value / mass;
        }
    }
    Ok(shares)
}
