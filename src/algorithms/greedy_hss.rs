use log::{debug, warn};

use crate::algorithms::contribution::ContributionUpdate;
use crate::algorithms::hss_2d::Contribution2D;
use crate::algorithms::hss_3d::Contribution3D;
use crate::algorithms::SubsetSelection;
use crate::core::list::PointList;
use crate::core::HssError;

/// Greedy hyper-volume subset selection (gHSS) in two and three dimensions, where all
/// objectives are minimised.
///
/// The points are selected one at a time. Each time, the unselected point with the largest
/// marginal hyper-volume contribution to the points already selected is picked. The
/// contributions of the remaining points are then updated incrementally instead of being
/// calculated from scratch: in 2D by subtracting the rectangle each point now shares with the
/// new point, in 3D by sweeping the points along each objective as described in:
///
/// > A. P. Guerreiro, C. M. Fonseca, and L. Paquete, "Greedy hypervolume subset selection in
/// > low dimensions", Evolutionary Computation, vol. 24, pp. 521-544, 2016.
///
/// Points that do not strictly dominate the reference point cannot contribute to the
/// hyper-volume. They are only selected when no other point is left. Ties between contributions
/// are broken by the smallest index in the input array.
///
/// # Example
/// ```
/// use greedy_hss::algorithms::GreedyHSS;
///
/// let points = vec![vec![1.0, 4.0], vec![2.0, 2.0], vec![3.0, 1.0]];
/// let selector = GreedyHSS::new(&points, &[5.0, 5.0]).unwrap();
/// let selection = selector.select(2).unwrap();
///
/// assert_eq!(selection.selected, vec![1, 2]);
/// assert_eq!(selection.contributions, vec![9.0, 2.0]);
/// assert_eq!(selection.hyper_volume, 11.0);
/// ```
#[derive(Debug)]
pub struct GreedyHSS {
    /// The points to select from.
    points: Vec<Vec<f64>>,
    /// The reference point.
    reference_point: Vec<f64>,
}

impl GreedyHSS {
    /// Initialise the subset selection. This returns an error if there are no points, the
    /// number of objectives is not 2 or 3, the points and the reference point have a different
    /// number of coordinates or any coordinate is not finite.
    ///
    /// # Arguments
    ///
    /// * `points`: The points. Each item is a point which contains a vector with size equal to
    ///    the number of objectives.
    /// * `reference_point`: The reference point. This should be strictly dominated by all the
    ///    points; points that do not dominate it are kept but never contribute.
    ///
    /// returns: `Result<GreedyHSS, HssError>`
    pub fn new(points: &[Vec<f64>], reference_point: &[f64]) -> Result<Self, HssError> {
        let dimensions = points.first().ok_or(HssError::NoPoints)?.len();
        if !(2..=3).contains(&dimensions) {
            return Err(HssError::UnsupportedDimension(dimensions));
        }

        if reference_point.len() != dimensions {
            return Err(HssError::WrongDimension(
                "reference point".to_string(),
                0,
                reference_point.len(),
                dimensions,
            ));
        }
        if reference_point.iter().any(|v| !v.is_finite()) {
            return Err(HssError::NonFiniteValue("reference point".to_string(), 0));
        }

        for (idx, point) in points.iter().enumerate() {
            if point.len() != dimensions {
                return Err(HssError::WrongDimension(
                    "point".to_string(),
                    idx,
                    point.len(),
                    dimensions,
                ));
            }
            if point.iter().any(|v| !v.is_finite()) {
                return Err(HssError::NonFiniteValue("point".to_string(), idx));
            }
        }

        let outside = points
            .iter()
            .filter(|p| p.iter().zip(reference_point).any(|(v, r)| v >= r))
            .count();
        if outside > 0 {
            warn!(
                "{} out of {} points do not strictly dominate the reference point {:?}",
                outside,
                points.len(),
                reference_point
            );
        }

        Ok(Self {
            points: points.to_vec(),
            reference_point: reference_point.to_vec(),
        })
    }

    /// The number of objectives.
    ///
    /// returns: `usize`
    pub fn dimensions(&self) -> usize {
        self.reference_point.len()
    }

    /// The number of points to select from.
    ///
    /// returns: `usize`
    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    /// The reference point.
    ///
    /// returns: `&[f64]`
    pub fn reference_point(&self) -> &[f64] {
        &self.reference_point
    }

    /// Greedily select a subset of points.
    ///
    /// When no point strictly dominates the reference point, the hyper-volume is zero and the
    /// first `subset_size` points are returned in their original order, each with a zero
    /// contribution.
    ///
    /// # Arguments
    ///
    /// * `subset_size`: The number of points to select. This must be between `1` and the number
    ///    of points.
    ///
    /// returns: `Result<SubsetSelection, HssError>`
    pub fn select(&self, subset_size: usize) -> Result<SubsetSelection, HssError> {
        let n = self.number_of_points();
        if subset_size == 0 || subset_size > n {
            return Err(HssError::InvalidSubsetSize(subset_size, n));
        }

        let mut list = PointList::new(&self.points, &self.reference_point)?;
        let marked = list.mark_invalid_points();
        debug!(
            "{} out of {} points cannot contribute with reference point {:?}",
            marked, n, self.reference_point
        );
        if marked == n {
            warn!("No point strictly dominates the reference point. The hyper-volume is zero");
            return Ok(SubsetSelection {
                hyper_volume: 0.0,
                contributions: vec![0.0; subset_size],
                selected: (0..subset_size).collect(),
            });
        }

        let engine: Box<dyn ContributionUpdate> = match self.dimensions() {
            2 => Box::new(Contribution2D),
            _ => Box::new(Contribution3D),
        };
        debug!(
            "Selecting {} out of {} points with the {} engine",
            subset_size,
            n,
            engine.name()
        );
        engine.initialise(&mut list);

        let mut selected_nodes = Vec::with_capacity(subset_size);
        for step in 0..subset_size {
            let Some(node) = list.maximum_contributor() else {
                break;
            };

            // the contributions are not needed after the last selection
            if step + 1 < subset_size {
                if list.points[node].is_dominated() {
                    list.points[node].contribution = 0.0;
                } else {
                    engine.update(&mut list, node);
                }
            }

            let point = &mut list.points[node];
            point.select();
            debug!(
                "Selected point #{} with contribution {} at step {}",
                point.id,
                point.contribution,
                step + 1
            );
            selected_nodes.push(node);
        }

        let mut hyper_volume = 0.0;
        let mut contributions = Vec::with_capacity(subset_size);
        let mut selected = Vec::with_capacity(subset_size);
        for node in selected_nodes {
            let point = &list.points[node];
            hyper_volume += point.contribution;
            contributions.push(point.contribution);
            selected.push(point.id);
        }

        if hyper_volume <= 0.0 {
            warn!("The hyper-volume of the selected subset is not positive ({hyper_volume})");
        }
        Ok(SubsetSelection {
            hyper_volume,
            contributions,
            selected,
        })
    }
}

/// Greedily select `subset_size` points maximising the hyper-volume with respect to the
/// `reference_point`. See [`GreedyHSS`] for the details.
///
/// # Arguments
///
/// * `points`: The points. Each point must have 2 or 3 objectives.
/// * `reference_point`: The reference point.
/// * `subset_size`: The number of points to select.
///
/// returns: `Result<SubsetSelection, HssError>`
pub fn greedy_hss(
    points: &[Vec<f64>],
    reference_point: &[f64],
    subset_size: usize,
) -> Result<SubsetSelection, HssError> {
    GreedyHSS::new(points, reference_point)?.select(subset_size)
}
