//! One-shot orchestration: standardize, decompose, load, attribute.

use log::{debug, info};
use ndarray::{stack, Array1, Array2, Axis};

use crate::contrib::{individual_contributions, variable_contributions};
use crate::dataset::Dataset;
use crate::decompose::Decomposition;
use crate::error::{PcaError, Result};
use crate::loadings::correlation_loadings;
use crate::report::{axis_labels, LabeledTable, PcaReport};
use crate::standardize::StandardScaler;

/// Analysis configuration. Explicit rather than ambient: the dataset, the
/// variable list and the component count all travel as arguments.
#[derive(Debug, Clone)]
pub struct PcaConfig {
    /// Number of principal axes to retain.
    pub n_components: usize,
}

impl Default for PcaConfig {
    fn default() -> Self {
        Self { n_components: 2 }
    }
}

/// Everything one run produces. All fields are pure functions of the input
/// dataset; nothing is cached across runs or mutated after construction.
#[derive(Debug, Clone)]
pub struct PcaResults {
    observation_labels: Vec<String>,
    variable_names: Vec<String>,
    scaler: StandardScaler,
    eigenvalues: Array1<f64>,
    explained_variance_ratio: Array1<f64>,
    cumulative_variance_ratio: Array1<f64>,
    eigenvectors: Array2<f64>,
    scores: Array2<f64>,
    loadings: Array2<f64>,
    variable_contributions: Array2<f64>,
    individual_contributions: Array2<f64>,
}

/// Runs the full pipeline over a dataset.
///
/// Stages run in strict order (standardization, eigendecomposition,
/// loadings, contributions) with a dimension check at every boundary, and
/// the whole run fails on the first error.
///
/// # Errors
///
/// Any [`PcaError`]; see the stage functions for which variant each stage
/// raises.
pub fn analyze(dataset: &Dataset, config: &PcaConfig) -> Result<PcaResults> {
    let n_observations = dataset.n_observations();
    let n_variables = dataset.n_variables();
    info!(
        "analyzing {} observations x {} variables, retaining {} axes",
        n_observations, n_variables, config.n_components
    );

    let (scaler, standardized) =
        StandardScaler::fit_transform(dataset.values(), dataset.variables())?;
    check_shape(
        "standardizer",
        standardized.dim(),
        (n_observations, n_variables),
    )?;

    let decomposition = Decomposition::compute(standardized.view(), config.n_components)?;
    check_shape(
        "decomposer scores",
        decomposition.scores().dim(),
        (n_observations, config.n_components),
    )?;
    check_shape(
        "decomposer eigenvectors",
        decomposition.eigenvectors().dim(),
        (n_variables, config.n_components),
    )?;

    let loadings = correlation_loadings(&decomposition);
    check_shape(
        "loadings calculator",
        loadings.dim(),
        (n_variables, config.n_components),
    )?;

    let variable_contributions = variable_contributions(loadings.view())?;
    let individual_contributions = individual_contributions(decomposition.scores().view())?;
    check_shape(
        "contribution analyzer (variables)",
        variable_contributions.dim(),
        (n_variables, config.n_components),
    )?;
    check_shape(
        "contribution analyzer (individuals)",
        individual_contributions.dim(),
        (n_observations, config.n_components),
    )?;

    let explained_variance_ratio = decomposition.explained_variance_ratio().clone();
    let mut cumulative_variance_ratio = explained_variance_ratio.clone();
    let mut running = 0.0;
    for value in cumulative_variance_ratio.iter_mut() {
        running += *value;
        *value = running;
    }
    debug!(
        "retained axes explain {:.2}% of total variance",
        running * 100.0
    );

    Ok(PcaResults {
        observation_labels: dataset.labels().to_vec(),
        variable_names: dataset.variables().to_vec(),
        scaler,
        eigenvalues: decomposition.eigenvalues().clone(),
        explained_variance_ratio,
        cumulative_variance_ratio,
        eigenvectors: decomposition.eigenvectors().clone(),
        scores: decomposition.scores().clone(),
        loadings,
        variable_contributions,
        individual_contributions,
    })
}

fn check_shape(stage: &str, actual: (usize, usize), expected: (usize, usize)) -> Result<()> {
    if actual != expected {
        return Err(PcaError::ShapeMismatch(format!(
            "{} produced a {} x {} matrix, expected {} x {}",
            stage, actual.0, actual.1, expected.0, expected.1
        )));
    }
    Ok(())
}

impl PcaResults {
    pub fn n_components(&self) -> usize {
        self.eigenvalues.len()
    }

    pub fn observation_labels(&self) -> &[String] {
        &self.observation_labels
    }

    pub fn variable_names(&self) -> &[String] {
        &self.variable_names
    }

    /// The fitted standardizer (per-variable mean and standard deviation).
    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    /// Retained eigenvalues, descending. Shape (k).
    pub fn eigenvalues(&self) -> &Array1<f64> {
        &self.eigenvalues
    }

    /// Fraction of total variance per retained axis, against the full
    /// spectrum. Shape (k).
    pub fn explained_variance_ratio(&self) -> &Array1<f64> {
        &self.explained_variance_ratio
    }

    /// Running sum of the explained-variance ratios. Shape (k).
    pub fn cumulative_variance_ratio(&self) -> &Array1<f64> {
        &self.cumulative_variance_ratio
    }

    /// Retained unit eigenvectors as columns. Shape (n_variables, k).
    pub fn eigenvectors(&self) -> &Array2<f64> {
        &self.eigenvectors
    }

    /// Observation coordinates on the retained axes. Shape (n_observations, k).
    pub fn scores(&self) -> &Array2<f64> {
        &self.scores
    }

    /// Variable/axis correlations. Shape (n_variables, k).
    pub fn loadings(&self) -> &Array2<f64> {
        &self.loadings
    }

    /// Percentage contribution of each variable to each axis; columns sum
    /// to 100. Shape (n_variables, k).
    pub fn variable_contributions(&self) -> &Array2<f64> {
        &self.variable_contributions
    }

    /// Percentage contribution of each observation to each axis; columns
    /// sum to 100. Shape (n_observations, k).
    pub fn individual_contributions(&self) -> &Array2<f64> {
        &self.individual_contributions
    }

    /// Packages the results as labeled tables for the rendering layer.
    pub fn report(&self) -> PcaReport {
        let axes = axis_labels(self.n_components());
        let percent = self.explained_variance_ratio.mapv(|v| v * 100.0);
        let cumulative_percent = self.cumulative_variance_ratio.mapv(|v| v * 100.0);
        let axis_summary = stack(
            Axis(1),
            &[
                self.eigenvalues.view(),
                percent.view(),
                cumulative_percent.view(),
            ],
        )
        .expect("axis summary columns share one length");

        // Labels come from the matrices these tables wrap, so the shape
        // checks cannot fail here.
        let table = |rows: Vec<String>, columns: Vec<String>, values: Array2<f64>| {
            LabeledTable::new(rows, columns, values).expect("labels match table dimensions")
        };

        PcaReport {
            axes: table(
                axes.clone(),
                vec![
                    "Eigenvalue".to_string(),
                    "Explained_%".to_string(),
                    "Cumulative_%".to_string(),
                ],
                axis_summary,
            ),
            loadings: table(
                self.variable_names.clone(),
                axes.clone(),
                self.loadings.clone(),
            ),
            scores: table(
                self.observation_labels.clone(),
                axes.clone(),
                self.scores.clone(),
            ),
            variable_contributions: table(
                self.variable_names.clone(),
                axes.clone(),
                self.variable_contributions.clone(),
            ),
            individual_contributions: table(
                self.observation_labels.clone(),
                axes,
                self.individual_contributions.clone(),
            ),
        }
    }
}
