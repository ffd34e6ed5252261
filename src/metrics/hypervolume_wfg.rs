use std::cmp::Ordering;

use crate::core::HssError;
use crate::metrics::hypervolume::{check_args, filter_points};
use crate::metrics::hypervolume_2d::sweep_2d;

/// The dominance relationship between two points.
#[derive(Debug, PartialEq)]
enum Dominance {
    /// The first point weakly dominates the second one.
    First,
    /// The second point dominates the first one.
    Second,
    /// The points are mutually non-dominated.
    None,
}

/// This struct implements the algorithm by While et al. (2012) to calculate the exact
/// hyper-volume of a set of points, where all objectives are minimised.
///
/// > Lyndon While, Lucas Bradstreet, and Luigi Barone. A Fast Way of Calculating Exact
/// > Hypervolumes. IEEE Transactions on Evolutionary Computation 16(1), 2012.
///
/// The points are sorted in descending order of the last objective and the hyper-volume is
/// the sum of the exclusive hyper-volumes of each point with respect to the points that follow
/// it. The exclusive hyper-volume of a point is its inclusive hyper-volume minus the
/// hyper-volume of the following points limited by the point. The recursion stops at two
/// objectives where the front is swept.
#[derive(Debug)]
pub struct HyperVolumeWfg {
    /// The points strictly dominating the reference point.
    points: Vec<Vec<f64>>,
    /// The reference point.
    reference_point: Vec<f64>,
}

impl HyperVolumeWfg {
    /// Initialise the `HyperVolumeWfg` structure to calculate the hyper-volume.
    ///
    /// # Arguments
    ///
    /// * `points`: The objective values. Each item is a point which contains a vector with size
    ///    equal to the number of objectives.
    /// * `reference_point`: The reference point.
    ///
    /// returns: `Result<HyperVolumeWfg, HssError>`
    pub fn new(points: &[Vec<f64>], reference_point: &[f64]) -> Result<Self, HssError> {
        let metric_name = "Hyper-volume While et al. (2012)".to_string();
        check_args(points, reference_point).map_err(|e| HssError::Metric(metric_name, e))?;

        Ok(Self {
            points: filter_points(points, reference_point),
            reference_point: reference_point.to_vec(),
        })
    }

    /// Calculate the hyper-volume.
    ///
    /// returns: `f64`
    pub fn compute(&self) -> f64 {
        self.volume(non_dominated(self.points.clone()))
    }

    /// Calculate the hyper-volume of a front.
    ///
    /// # Arguments
    ///
    /// * `front`: The points. These must be mutually non-dominated.
    ///
    /// returns: `f64`
    fn volume(&self, mut front: Vec<Vec<f64>>) -> f64 {
        if front.is_empty() {
            return 0.0;
        }
        let obj_count = self.reference_point.len();
        if obj_count == 2 {
            return sweep_2d(&front, &self.reference_point);
        }

        front.sort_by(|a, b| b[obj_count - 1].total_cmp(&a[obj_count - 1]));

        (0..front.len())
            .map(|idx| self.exclusive_hv(&front, idx))
            .sum()
    }

    /// Calculate the exclusive hyper-volume of the point at index `idx` in the `front`
    /// relative to the points after it.
    ///
    /// # Arguments
    ///
    /// * `front`: The front being processed.
    /// * `idx`: The point index.
    ///
    /// returns: `f64`
    fn exclusive_hv(&self, front: &[Vec<f64>], idx: usize) -> f64 {
        let mut volume = self.inclusive_hv(&front[idx]);
        if idx + 1 < front.len() {
            volume -= self.volume(limit_set(front, idx));
        }
        volume
    }

    /// Calculate the inclusive hyper-volume of a point (the volume of the box between the
    /// point and the reference point).
    ///
    /// # Arguments
    ///
    /// * `point`: The point.
    ///
    /// returns: `f64`
    fn inclusive_hv(&self, point: &[f64]) -> f64 {
        point
            .iter()
            .zip(&self.reference_point)
            .map(|(x, r)| r - x)
            .product()
    }
}

/// Limit the points after the one at index `idx` by taking the worse coordinate between each
/// point and the point at `idx`. Dominated points are removed from the limited set.
///
/// # Arguments
///
/// * `front`: The front.
/// * `idx`: The index of the limiting point.
///
/// returns: `Vec<Vec<f64>>`
fn limit_set(front: &[Vec<f64>], idx: usize) -> Vec<Vec<f64>> {
    let p = &front[idx];
    let limited = front[idx + 1..]
        .iter()
        .map(|q| q.iter().zip(p).map(|(a, b)| a.max(*b)).collect())
        .collect();
    non_dominated(limited)
}

/// Remove the points weakly dominated by another point. Only one copy of duplicated points is
/// kept.
///
/// # Arguments
///
/// * `points`: The points.
///
/// returns: `Vec<Vec<f64>>`
fn non_dominated(points: Vec<Vec<f64>>) -> Vec<Vec<f64>> {
    let mut front: Vec<Vec<f64>> = Vec::with_capacity(points.len());
    for p in points {
        if front.iter().any(|q| compare(q, &p) == Dominance::First) {
            continue;
        }
        front.retain(|q| compare(&p, q) != Dominance::First);
        front.push(p);
    }
    front
}

/// Check the dominance relationship between two points.
///
/// # Arguments
///
/// * `p1`: The first point.
/// * `p2`: The second point.
///
/// returns: `Dominance`
fn compare(p1: &[f64], p2: &[f64]) -> Dominance {
    let mut first_better = false;
    let mut second_better = false;
    for (a, b) in p1.iter().zip(p2) {
        match a.total_cmp(b) {
            Ordering::Less => first_better = true,
            Ordering::Greater => second_better = true,
            Ordering::Equal => {}
        }
    }
    match (first_better, second_better) {
        (_, false) => Dominance::First,
        (false, true) => Dominance::Second,
        (true, true) => Dominance::None,
    }
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use crate::metrics::hypervolume_wfg::{compare, non_dominated, Dominance, HyperVolumeWfg};

    #[test]
    fn test() {
        let ref_point = vec![10.0; 3];
        let data = vec![
            vec![0.500999867734, 0.501000000033, 0.500999987997],
            vec![9.84167759049e-09, 2.36154644108e-09, 0.499999987997],
            vec![0.499999867734, 1.32416636196e-07, 3.33066907488e-16],
            vec![2.52520317534e-18, 2.01754168497e-08, 0.499999979974],
            vec![3.06183729901e-12, 0.500000000033, 0.0],
        ];
        let hv = HyperVolumeWfg::new(&data, &ref_point).unwrap();

        assert_approx_eq!(f64, hv.compute(), 999.874999, epsilon = 0.0001);
    }

    #[test]
    /// Test with 4 objectives on boxes whose volume is easy to calculate.
    fn test_4_objectives() {
        let ref_point = vec![2.0; 4];
        let data = vec![vec![0.0, 1.0, 1.0, 1.0], vec![1.0, 0.0, 1.0, 1.0]];
        // 2 + 2 - overlap of 1
        let hv = HyperVolumeWfg::new(&data, &ref_point).unwrap();
        assert_approx_eq!(f64, hv.compute(), 3.0, ulps = 2);
    }

    #[test]
    fn test_dominance() {
        assert_eq!(compare(&[1.0, 2.0], &[1.0, 3.0]), Dominance::First);
        assert_eq!(compare(&[1.0, 2.0], &[1.0, 2.0]), Dominance::First);
        assert_eq!(compare(&[2.0, 2.0], &[1.0, 2.0]), Dominance::Second);
        assert_eq!(compare(&[0.0, 2.0], &[1.0, 1.0]), Dominance::None);

        let front = non_dominated(vec![
            vec![1.0, 1.0],
            vec![2.0, 2.0],
            vec![1.0, 1.0],
            vec![0.0, 3.0],
        ]);
        assert_eq!(front, vec![vec![1.0, 1.0], vec![0.0, 3.0]]);
    }
}
