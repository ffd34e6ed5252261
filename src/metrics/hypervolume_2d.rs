use crate::core::HssError;
use crate::metrics::hypervolume::{check_args, filter_points};

/// Calculate the hyper-volume for a two-objective problem by summing the areas of the
/// rectangles between the Pareto front and the chosen `reference_point`.
#[derive(Debug)]
pub struct HyperVolume2D {
    /// The points strictly dominating the reference point.
    objective_values: Vec<Vec<f64>>,
    /// The reference point.
    reference_point: Vec<f64>,
}

impl HyperVolume2D {
    /// Calculate the hyper-volume for a two-objective problem where both objectives are
    /// minimised.
    ///
    /// **IMPLEMENTATION NOTES**:
    /// 1) Points that do not strictly dominate the reference point are excluded.
    /// 2) Dominated points are allowed; they are skipped while sweeping the front.
    /// 3) If there are no points left, a zero hyper-volume is returned.
    ///
    /// # Arguments
    ///
    /// * `points`: The points to use in the calculation.
    /// * `reference_point`: The reference or anti-optimal point to use in the calculation.
    ///
    /// returns: `Result<HyperVolume2D, HssError>`
    pub fn new(points: &[Vec<f64>], reference_point: &[f64]) -> Result<Self, HssError> {
        let metric_name = "2D Hyper-volume".to_string();
        check_args(points, reference_point).map_err(|e| HssError::Metric(metric_name.clone(), e))?;

        if reference_point.len() != 2 {
            return Err(HssError::Metric(
                metric_name,
                "This can only be used on a 2-objective problem.".to_string(),
            ));
        }

        Ok(Self {
            objective_values: filter_points(points, reference_point),
            reference_point: reference_point.to_vec(),
        })
    }

    /// Calculate the hyper-volume.
    ///
    /// return: `f64`
    pub fn compute(&self) -> f64 {
        sweep_2d(&self.objective_values, &self.reference_point)
    }
}

/// Sweep the points in ascending order of the first objective and add the rectangle each
/// point dominates below the lowest second objective found so far.
///
/// # Arguments
///
/// * `points`: The points. Only the first two coordinates are used and each point must strictly
///   dominate the reference point.
/// * `reference_point`: The reference point.
///
/// returns: `f64`
pub(crate) fn sweep_2d(points: &[Vec<f64>], reference_point: &[f64]) -> f64 {
    let mut sorted: Vec<(f64, f64)> = points.iter().map(|p| (p[0], p[1])).collect();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let mut y_min = reference_point[1];
    let mut area = 0.0;
    for (x, y) in sorted {
        if y < y_min {
            area += (reference_point[0] - x) * (y_min - y);
            y_min = y;
        }
    }
    area
}

#[cfg(test)]
/// Test the hyper-volume calculation in 2D. Expected value was manually calculated.
mod test {
    use crate::metrics::hypervolume_2d::HyperVolume2D;

    #[test]
    /// All non-dominated points
    fn test_non_dominated_points() {
        let ref_point = [10.0, 10.0];
        let points = vec![vec![1.0, 2.0], vec![0.5, 4.0], vec![0.0, 6.0]];

        let hv = HyperVolume2D::new(&points, &ref_point);
        assert_eq!(hv.unwrap().compute(), 77.0);
    }

    #[test]
    /// One point is dominated
    fn test_dominated_points() {
        let ref_point = [10.0, 10.0];
        let points = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![0.0, 6.0]];

        let hv = HyperVolume2D::new(&points, &ref_point);
        assert_eq!(hv.unwrap().compute(), 76.0);
    }

    #[test]
    /// Two points are dominated - this returns the area of the rectangle between the reference
    /// point and the minimum
    fn test_two_dominated_points() {
        let ref_point = [10.0, 10.0];
        let points = vec![vec![-1.0, 2.0], vec![0.5, 4.0], vec![0.0, 6.0]];

        let hv = HyperVolume2D::new(&points, &ref_point);
        assert_eq!(hv.unwrap().compute(), 88.0);
    }

    #[test]
    /// Duplicated points and points on the reference point boundary
    fn test_duplicates_and_boundary() {
        let ref_point = [10.0, 10.0];
        let points = vec![
            vec![1.0, 2.0],
            vec![1.0, 2.0],
            vec![10.0, 0.0],
            vec![0.0, 10.0],
        ];

        let hv = HyperVolume2D::new(&points, &ref_point);
        assert_eq!(hv.unwrap().compute(), 72.0);

        let hv = HyperVolume2D::new(&[], &ref_point);
        assert_eq!(hv.unwrap().compute(), 0.0);
    }

    #[test]
    /// Errors on wrong sizes
    fn test_errors() {
        let err = HyperVolume2D::new(&[vec![1.0, 2.0, 3.0]], &[10.0, 10.0])
            .unwrap_err()
            .to_string();
        assert!(err.contains("The number of coordinates of point #0 (3)"), "{}", err);

        let err = HyperVolume2D::new(&[vec![1.0, 2.0, 3.0]], &[10.0, 10.0, 10.0])
            .unwrap_err()
            .to_string();
        assert!(err.contains("can only be used on a 2-objective problem"), "{}", err);

        let err = HyperVolume2D::new(&[vec![1.0, f64::NAN]], &[10.0, 10.0])
            .unwrap_err()
            .to_string();
        assert!(err.contains("NaN detected in point #0"), "{}", err);
    }
}
