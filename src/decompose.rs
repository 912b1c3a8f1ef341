//! Symmetric eigendecomposition of the standardized covariance and
//! projection onto the retained axes.

use log::debug;
use ndarray::{Array1, Array2, ArrayView2};
use ndarray_linalg::{Eigh, UPLO};

use crate::error::{PcaError, Result};

/// A retained eigenvalue below this fraction of the total variance marks a
/// rank-deficient axis. Round-off puts such an eigenvalue anywhere within
/// solver precision of zero, on either side, so an exact comparison cannot
/// detect it.
const DEGENERATE_EIGENVALUE_RATIO: f64 = 1e-12;

/// Principal axes of a standardized matrix.
///
/// Eigenvalues are strictly positive and descending; eigenvectors are unit
/// length, mutually orthogonal, and sign-fixed so the entry of largest
/// absolute value in each component is positive. Equal eigenvalues keep the
/// ascending index order the eigensolver returned them in. Both conventions
/// exist so repeated runs are bit-identical.
#[derive(Debug, Clone)]
pub struct Decomposition {
    eigenvalues: Array1<f64>,
    eigenvectors: Array2<f64>,
    scores: Array2<f64>,
    explained_variance_ratio: Array1<f64>,
    total_variance: f64,
}

impl Decomposition {
    /// Decomposes the covariance of an already standardized matrix and
    /// retains `n_components` axes.
    ///
    /// The covariance uses the (n - 1) denominator; on standardized input it
    /// is the correlation matrix. The explained-variance ratios are taken
    /// against the sum of ALL eigenvalues, not just the retained ones, so
    /// they answer "how much of the total variance does this axis carry".
    ///
    /// # Errors
    ///
    /// [`PcaError::Configuration`] when `n_components` is zero or exceeds
    /// the variable count, or when there are fewer than 2 observations.
    /// [`PcaError::DegenerateInput`] when a retained axis carries (within
    /// solver precision) no variance, so its loadings and contributions
    /// would be round-off noise.
    pub fn compute(standardized: ArrayView2<'_, f64>, n_components: usize) -> Result<Self> {
        let (n_observations, n_variables) = standardized.dim();
        if n_observations < 2 {
            return Err(PcaError::Configuration(format!(
                "eigendecomposition needs at least 2 observations, got {}",
                n_observations
            )));
        }
        if n_components == 0 || n_components > n_variables {
            return Err(PcaError::Configuration(format!(
                "cannot retain {} components from {} variables",
                n_components, n_variables
            )));
        }

        let mut covariance = standardized.t().dot(&standardized);
        covariance /= (n_observations - 1) as f64;

        let (raw_eigenvalues, raw_eigenvectors) = covariance.eigh(UPLO::Upper)?;

        // Round-off can push a zero eigenvalue slightly negative.
        let clamped = raw_eigenvalues.mapv(|v| v.max(0.0));
        let total_variance = clamped.sum();
        if total_variance <= 0.0 {
            return Err(PcaError::DegenerateInput(
                "covariance matrix has zero total variance".to_string(),
            ));
        }

        // Descending eigenvalue; ties keep the solver's ascending index order.
        let mut order: Vec<usize> = (0..n_variables).collect();
        order.sort_by(|&a, &b| {
            clamped[b]
                .partial_cmp(&clamped[a])
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.cmp(&b))
        });

        let degenerate_floor = total_variance * DEGENERATE_EIGENVALUE_RATIO;
        let mut eigenvalues = Array1::<f64>::zeros(n_components);
        let mut eigenvectors = Array2::<f64>::zeros((n_variables, n_components));
        for (slot, &index) in order.iter().take(n_components).enumerate() {
            if clamped[index] < degenerate_floor {
                return Err(PcaError::DegenerateInput(format!(
                    "axis PC{} carries no variance (eigenvalue {:.3e}); retain fewer components",
                    slot + 1,
                    clamped[index]
                )));
            }
            eigenvalues[slot] = clamped[index];
            let mut axis = raw_eigenvectors.column(index).to_owned();
            let norm = axis.dot(&axis).sqrt();
            if norm > 1e-12 {
                axis.mapv_inplace(|x| x / norm);
            } else {
                axis.fill(0.0);
            }
            fix_sign(&mut axis);
            eigenvectors.column_mut(slot).assign(&axis);
        }

        let scores = standardized.dot(&eigenvectors);
        let explained_variance_ratio = eigenvalues.mapv(|v| v / total_variance);

        debug!(
            "decomposed {} x {} standardized matrix: retained {} of {} axes, \
             leading eigenvalue {:.6}",
            n_observations, n_variables, n_components, n_variables, eigenvalues[0]
        );

        Ok(Self {
            eigenvalues,
            eigenvectors,
            scores,
            explained_variance_ratio,
            total_variance,
        })
    }

    pub fn n_components(&self) -> usize {
        self.eigenvalues.len()
    }

    /// Retained eigenvalues, descending. Shape (k).
    pub fn eigenvalues(&self) -> &Array1<f64> {
        &self.eigenvalues
    }

    /// Retained unit eigenvectors as columns. Shape (n_variables, k).
    pub fn eigenvectors(&self) -> &Array2<f64> {
        &self.eigenvectors
    }

    /// Projection of each standardized observation onto each retained axis.
    /// Shape (n_observations, k).
    pub fn scores(&self) -> &Array2<f64> {
        &self.scores
    }

    /// Fraction of total variance carried by each retained axis. Shape (k).
    pub fn explained_variance_ratio(&self) -> &Array1<f64> {
        &self.explained_variance_ratio
    }

    /// Sum of all eigenvalues of the full spectrum, retained or not.
    pub fn total_variance(&self) -> f64 {
        self.total_variance
    }
}

/// Forces the entry of largest absolute value positive; ties go to the
/// lowest index reaching the maximum.
fn fix_sign(axis: &mut Array1<f64>) {
    let mut lead = 0usize;
    for (index, value) in axis.iter().enumerate() {
        if value.abs() > axis[lead].abs() {
            lead = index;
        }
    }
    if axis[lead] < 0.0 {
        axis.mapv_inplace(|x| -x);
    }
}
