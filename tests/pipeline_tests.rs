use approx::assert_abs_diff_eq;
use interpretable_pca::{analyze, Dataset, PcaConfig, PcaError};
use ndarray::{array, Array2, Axis};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn random_dataset(n_observations: usize, n_variables: usize, seed: u64) -> Dataset {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values = Array2::from_shape_fn((n_observations, n_variables), |_| {
        rng.gen_range(-10.0..10.0)
    });
    Dataset::new(
        (0..n_observations).map(|i| format!("obs{}", i)).collect(),
        (0..n_variables).map(|i| format!("var{}", i)).collect(),
        values,
    )
    .unwrap()
}

/// Two perfectly correlated variables and two in-sample-orthogonal ones.
/// The correlation matrix has eigenvalues 2, 1, 1, 0.
fn correlated_pair_dataset() -> Dataset {
    let base = [1.0, -1.0, 1.0, -1.0, 1.0, -1.0];
    let independent_a = [1.0, 1.0, -1.0, -1.0, 0.0, 0.0];
    let independent_b = [1.0, 1.0, 1.0, 1.0, -2.0, -2.0];
    let mut values = Array2::zeros((6, 4));
    for row in 0..6 {
        values[[row, 0]] = base[row];
        values[[row, 1]] = 2.0 * base[row];
        values[[row, 2]] = independent_a[row];
        values[[row, 3]] = independent_b[row];
    }
    Dataset::new(
        (0..6).map(|i| format!("obs{}", i)).collect(),
        ["x1", "x2", "x3", "x4"].iter().map(|s| s.to_string()).collect(),
        values,
    )
    .unwrap()
}

#[test]
fn eigenvectors_are_orthonormal_across_full_spectrum() {
    let dataset = random_dataset(40, 7, 17);
    let results = analyze(&dataset, &PcaConfig { n_components: 7 }).unwrap();
    let vectors = results.eigenvectors();

    for i in 0..7 {
        for j in 0..7 {
            let dot = vectors.column(i).dot(&vectors.column(j));
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(dot, expected, epsilon = 1e-9);
        }
    }
}

#[test]
fn full_spectrum_variance_ratios_sum_to_one() {
    let dataset = random_dataset(30, 6, 5);
    let results = analyze(&dataset, &PcaConfig { n_components: 6 }).unwrap();
    assert_abs_diff_eq!(results.explained_variance_ratio().sum(), 1.0, epsilon = 1e-9);
}

#[test]
fn contribution_columns_sum_to_one_hundred() {
    let dataset = random_dataset(25, 5, 23);
    let results = analyze(&dataset, &PcaConfig::default()).unwrap();

    for column in results.variable_contributions().axis_iter(Axis(1)) {
        assert_abs_diff_eq!(column.sum(), 100.0, epsilon = 1e-6);
    }
    for column in results.individual_contributions().axis_iter(Axis(1)) {
        assert_abs_diff_eq!(column.sum(), 100.0, epsilon = 1e-6);
    }
}

#[test]
fn loadings_stay_within_correlation_bounds() {
    let dataset = random_dataset(50, 8, 31);
    let results = analyze(&dataset, &PcaConfig { n_components: 8 }).unwrap();
    for value in results.loadings().iter() {
        assert!(
            value.abs() <= 1.0 + 1e-9,
            "loading {} outside correlation bounds",
            value
        );
    }
}

#[test]
fn identical_input_yields_identical_output() {
    let dataset = random_dataset(20, 5, 77);
    let first = analyze(&dataset, &PcaConfig::default()).unwrap();
    let second = analyze(&dataset, &PcaConfig::default()).unwrap();

    assert_eq!(first.eigenvalues(), second.eigenvalues());
    assert_eq!(first.eigenvectors(), second.eigenvectors());
    assert_eq!(first.scores(), second.scores());
    assert_eq!(first.loadings(), second.loadings());
}

#[test]
fn correlated_pair_dominates_the_first_axis() {
    let results = analyze(&correlated_pair_dataset(), &PcaConfig::default()).unwrap();

    // The correlated pair contributes variance 2 of a total of 4.
    assert_abs_diff_eq!(results.eigenvalues()[0], 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(results.explained_variance_ratio()[0], 0.5, epsilon = 1e-9);
    assert!(results.explained_variance_ratio()[0] > results.explained_variance_ratio()[1]);

    // Both pair members correlate with the first axis at 1 and split its
    // construction evenly; the orthogonal variables sit it out.
    let loadings = results.loadings();
    assert_abs_diff_eq!(loadings[[0, 0]], 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(loadings[[1, 0]], 1.0, epsilon = 1e-9);
    let contributions = results.variable_contributions();
    assert_abs_diff_eq!(contributions[[0, 0]], 50.0, epsilon = 1e-6);
    assert_abs_diff_eq!(contributions[[1, 0]], 50.0, epsilon = 1e-6);
    assert_abs_diff_eq!(contributions[[2, 0]], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(contributions[[3, 0]], 0.0, epsilon = 1e-6);
}

#[test]
fn constant_column_raises_degenerate_input() {
    let dataset = Dataset::new(
        (0..4).map(|i| format!("obs{}", i)).collect(),
        ["moving", "frozen"].iter().map(|s| s.to_string()).collect(),
        array![[1.0, 3.0], [2.0, 3.0], [4.0, 3.0], [8.0, 3.0]],
    )
    .unwrap();

    let err = analyze(&dataset, &PcaConfig { n_components: 2 }).unwrap_err();
    assert!(matches!(err, PcaError::DegenerateInput(_)));
    assert!(err.to_string().contains("'frozen'"));
}

#[test]
fn requesting_more_components_than_variables_is_a_configuration_error() {
    let dataset = random_dataset(10, 2, 13);
    let err = analyze(&dataset, &PcaConfig { n_components: 3 }).unwrap_err();
    assert!(matches!(err, PcaError::Configuration(_)));
}

#[test]
fn zero_variance_axis_raises_degenerate_input() {
    // Retaining all four axes of the correlated-pair dataset includes the
    // eigenvalue-0 axis. The decomposer rejects it by a relative threshold,
    // whichever side of zero the solver's round-off puts the eigenvalue on.
    let err = analyze(&correlated_pair_dataset(), &PcaConfig { n_components: 4 }).unwrap_err();
    assert!(matches!(err, PcaError::DegenerateInput(_)));
    assert!(err.to_string().contains("PC4"));
}

#[test]
fn report_round_trips_labels_and_values() {
    let dataset = random_dataset(8, 3, 2);
    let results = analyze(&dataset, &PcaConfig::default()).unwrap();
    let report = results.report();

    assert_eq!(report.scores.row_labels().len(), 8);
    assert_eq!(report.loadings.column_labels(), &["PC1", "PC2"]);
    let from_table = report.scores.get("obs3", "PC2").unwrap();
    assert_eq!(from_table, results.scores()[[3, 1]]);

    // Eigenvalue table carries percentages consistent with the ratios.
    let explained = report.axes.get("PC1", "Explained_%").unwrap();
    assert_abs_diff_eq!(
        explained,
        results.explained_variance_ratio()[0] * 100.0,
        epsilon = 1e-12
    );
}
