use float_cmp::{approx_eq, F64Margin};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::algorithms::SubsetSelection;
use crate::metrics::hyper_volume;

/// Get the random number generator. If no seed is provided, the default seed is used.
///
/// # Arguments
///
/// * `seed`: The optional seed number.
///
/// returns: `ChaCha8Rng`
pub(crate) fn get_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        None => ChaCha8Rng::from_seed(Default::default()),
        Some(s) => ChaCha8Rng::seed_from_u64(s),
    }
}

/// Generate uniformly distributed points in the unit hyper-cube. Many of these points are
/// dominated by the others.
///
/// # Arguments
///
/// * `number_of_points`: The number of points to generate.
/// * `dimensions`: The number of coordinates of each point.
/// * `seed`: The seed of the random number generator.
///
/// returns: `Vec<Vec<f64>>`
pub(crate) fn random_points(number_of_points: usize, dimensions: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = get_rng(Some(seed));
    (0..number_of_points)
        .map(|_| (0..dimensions).map(|_| rng.gen::<f64>()).collect())
        .collect()
}

/// Generate mutually non-dominated points lying on the unit sphere in the positive orthant.
///
/// # Arguments
///
/// * `number_of_points`: The number of points to generate.
/// * `dimensions`: The number of coordinates of each point.
/// * `seed`: The seed of the random number generator.
///
/// returns: `Vec<Vec<f64>>`
pub(crate) fn random_front(number_of_points: usize, dimensions: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = get_rng(Some(seed));
    (0..number_of_points)
        .map(|_| {
            let v: Vec<f64> = (0..dimensions).map(|_| rng.gen_range(0.01..1.0)).collect();
            let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
            v.iter().map(|x| x / norm).collect()
        })
        .collect()
}

/// Compare two arrays of f64
pub(crate) fn assert_approx_array_eq(calculated_values: &[f64], expected_values: &[f64]) {
    assert_eq!(calculated_values.len(), expected_values.len());
    let margins = F64Margin {
        epsilon: 1e-9,
        ulps: 4,
    };
    for (i, (calculated, expected)) in calculated_values.iter().zip(expected_values).enumerate() {
        if !approx_eq!(f64, *calculated, *expected, margins) {
            panic!(
                r#"assertion failed on item #{i:?}
                    actual: `{calculated:?}`,
                    expected: `{expected:?}`"#,
            )
        }
    }
}

/// Check that each contribution recorded in a greedy selection matches the hyper-volume the
/// point adds to the points selected before it. The expected values are calculated with the
/// exact WFG hyper-volume.
///
/// # Arguments
///
/// * `points`: The points the subset was selected from.
/// * `reference_point`: The reference point.
/// * `selection`: The selection to check.
///
/// returns: `()`
pub(crate) fn assert_greedy_contributions(
    points: &[Vec<f64>],
    reference_point: &[f64],
    selection: &SubsetSelection,
) {
    let mut subset: Vec<Vec<f64>> = vec![];
    let mut previous_hv = 0.0;
    let mut expected = vec![];
    for id in selection.selected.iter() {
        subset.push(points[*id].clone());
        let hv = hyper_volume(&subset, reference_point).unwrap();
        expected.push(hv - previous_hv);
        previous_hv = hv;
    }
    assert_approx_array_eq(&selection.contributions, &expected);
}
