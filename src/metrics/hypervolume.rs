use log::debug;

use crate::core::HssError;
use crate::metrics::{HyperVolume2D, HyperVolumeWfg};
use crate::utils::{vector_max, vector_min};

/// Check the input arguments of the hyper-volume functions.
///
/// # Arguments
///
/// * `points`: The points to use in the calculation.
/// * `reference_point`: The reference or anti-optimal point to use in the calculation.
///
/// returns: `Result<(), String>`
pub(crate) fn check_args(points: &[Vec<f64>], reference_point: &[f64]) -> Result<(), String> {
    if reference_point.len() < 2 {
        return Err(
            "The metric can only be calculated on problems with 2 or more objectives".to_string(),
        );
    }
    if reference_point.iter().any(|v| !v.is_finite()) {
        return Err("The reference point must only contain finite values".to_string());
    }

    for (idx, point) in points.iter().enumerate() {
        if point.len() != reference_point.len() {
            return Err(format!(
                "The number of coordinates of point #{} ({}) must match the number of coordinates of the reference point ({})",
                idx, point.len(), reference_point.len()
            ));
        }
        if point.iter().any(|value| value.is_nan()) {
            return Err(format!("NaN detected in point #{}", idx));
        }
    }

    Ok(())
}

/// Keep only the points that strictly dominate the reference point. The other points do not
/// contribute to the hyper-volume.
///
/// # Arguments
///
/// * `points`: The points.
/// * `reference_point`: The reference point.
///
/// returns: `Vec<Vec<f64>>`
pub(crate) fn filter_points(points: &[Vec<f64>], reference_point: &[f64]) -> Vec<Vec<f64>> {
    let filtered: Vec<Vec<f64>> = points
        .iter()
        .filter(|p| p.iter().zip(reference_point).all(|(v, r)| v < r))
        .cloned()
        .collect();
    if filtered.len() != points.len() {
        debug!(
            "{} points were excluded because they do not strictly dominate the reference point",
            points.len() - filtered.len()
        );
    }
    filtered
}

/// Calculate the exact hyper-volume of a set of points where all objectives are minimised.
/// Depending on the number of objectives `d`, a different method is used:
///
/// - with `2` objectives: by summing the areas of the rectangles between each point of the
///   front and the reference point ([`HyperVolume2D`]).
/// - with `3` or more objectives: by using the algorithm proposed by [While et al. (2012)](http://dx.doi.org/10.1109/TEVC.2010.2077298)
///   in [`HyperVolumeWfg`].
///
/// Points that do not strictly dominate the reference point are ignored.
///
/// # Arguments
///
/// * `points`: The points. Each item contains the `d` objective values of a point.
/// * `reference_point`: The reference or anti-optimal point to use in the calculation. If you
///   are not sure about the point to use you could pick the worst value of each objective using
///   [`estimate_reference_point`].
///
/// returns: `Result<f64, HssError>`
pub fn hyper_volume(points: &[Vec<f64>], reference_point: &[f64]) -> Result<f64, HssError> {
    let hv = match reference_point.len() {
        2 => HyperVolume2D::new(points, reference_point)?.compute(),
        _ => HyperVolumeWfg::new(points, reference_point)?.compute(),
    };
    Ok(hv)
}

/// Calculates a reference point by taking the maximum of each objective from the points, so
/// that the point will be weakly dominated by all other points. An optional offset for each
/// objective can be added to enforce strict dominance.
///
/// # Arguments
///
/// * `points`: The points to use in the calculation.
/// * `offset`: The offset for each objective to add to the calculated reference point. This must
///   have a size equal to the number of objectives.
///
/// returns: `Result<Vec<f64>, HssError>` The reference point. This returns an error if there are
/// no points or the size of the offset does not match the number of objectives.
pub fn estimate_reference_point(
    points: &[Vec<f64>],
    offset: Option<Vec<f64>>,
) -> Result<Vec<f64>, HssError> {
    let metric_name = "reference_point".to_string();
    let mut ref_point = DataRange::from_points(points)
        .map_err(|e| HssError::Metric(metric_name.clone(), e.to_string()))?
        .maximum;

    // add offset
    if let Some(offset) = offset {
        if offset.len() != ref_point.len() {
            return Err(HssError::Metric(
                metric_name,
                format!(
                    "The offset size ({}) must match the number of objectives ({})",
                    offset.len(),
                    ref_point.len()
                ),
            ));
        }
        for (coordinate, o) in ref_point.iter_mut().zip(offset) {
            *coordinate += o;
        }
    }

    Ok(ref_point)
}

/// The coordinate-wise maximum and minimum of a set of points.
#[derive(Debug, Clone, PartialEq)]
pub struct DataRange {
    /// The maximum value of each objective.
    pub maximum: Vec<f64>,
    /// The minimum value of each objective.
    pub minimum: Vec<f64>,
}

impl DataRange {
    /// Calculate the range of the objectives.
    ///
    /// # Arguments
    ///
    /// * `points`: The points. All the points must have the same number of objectives.
    ///
    /// returns: `Result<DataRange, HssError>`
    pub fn from_points(points: &[Vec<f64>]) -> Result<Self, HssError> {
        let dimensions = points.first().ok_or(HssError::NoPoints)?.len();

        let mut maximum = Vec::with_capacity(dimensions);
        let mut minimum = Vec::with_capacity(dimensions);
        for axis in 0..dimensions {
            let values = points
                .iter()
                .enumerate()
                .map(|(idx, p)| {
                    p.get(axis).copied().ok_or(HssError::WrongDimension(
                        "point".to_string(),
                        idx,
                        p.len(),
                        dimensions,
                    ))
                })
                .collect::<Result<Vec<f64>, HssError>>()?;
            maximum.push(vector_max(&values)?);
            minimum.push(vector_min(&values)?);
        }

        Ok(Self { maximum, minimum })
    }

    /// Extend the range with the one of another set of points.
    ///
    /// # Arguments
    ///
    /// * `other`: The other range.
    ///
    /// returns: `Result<DataRange, HssError>`
    pub fn merge(&self, other: &DataRange) -> Result<DataRange, HssError> {
        if self.maximum.len() != other.maximum.len() {
            return Err(HssError::WrongDimension(
                "data range".to_string(),
                1,
                other.maximum.len(),
                self.maximum.len(),
            ));
        }
        Ok(DataRange {
            maximum: self
                .maximum
                .iter()
                .zip(&other.maximum)
                .map(|(a, b)| a.max(*b))
                .collect(),
            minimum: self
                .minimum
                .iter()
                .zip(&other.minimum)
                .map(|(a, b)| a.min(*b))
                .collect(),
        })
    }
}
