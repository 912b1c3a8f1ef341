//! Variable loadings: eigenvectors rescaled into variable/axis correlations.

use ndarray::Array2;

use crate::decompose::Decomposition;

/// Rescales each retained eigenvector by `sqrt(eigenvalue)`.
///
/// For standardized input, entry (i, j) is the correlation between original
/// variable i and principal axis j, so every value lies in [-1, 1] up to
/// floating-point noise. Shape (n_variables, k).
pub fn correlation_loadings(decomposition: &Decomposition) -> Array2<f64> {
    let mut loadings = decomposition.eigenvectors().to_owned();
    for (axis, mut column) in loadings.columns_mut().into_iter().enumerate() {
        let spread = decomposition.eigenvalues()[axis].sqrt();
        column.mapv_inplace(|v| v * spread);
    }
    loadings
}
