use log::debug;

use crate::core::point::Point;
use crate::core::HssError;
use crate::utils::{argsort, Sort};

/// Index of the sentinel placed before the first point of each sorted list.
pub(crate) const HEAD: usize = 0;

/// The coordinate given to sentinels that must be smaller than any point coordinate. The most
/// negative finite value is used in place of minus infinity so that the products computed with
/// the sentinels never result in `NaN`.
pub(crate) const MINUS_INF: f64 = f64::MIN;

/// Arena with the points and the circular doubly-linked lists keeping them sorted by each
/// coordinate. Each list starts at [`HEAD`] and ends at the tail sentinel ([`PointList::tail`]);
/// the tail links back to the head. The permanent links are never changed after setup, only
/// the sentinel coordinates are reset by the algorithms.
#[derive(Debug)]
pub(crate) struct PointList {
    /// The nodes. The first and last items are the sentinels, the node at index `i + 1` is the
    /// point at index `i` in the caller's array.
    pub(crate) points: Vec<Point>,
    /// The number of objectives (2 or 3).
    pub(crate) dimensions: usize,
    /// The reference point. The third coordinate is unused for 2D problems.
    pub(crate) reference_point: [f64; 3],
}

impl PointList {
    /// Set up the sorted lists for all the points.
    ///
    /// # Arguments
    ///
    /// * `objective_values`: The points. Each point must have 2 or 3 coordinates, matching the
    ///   size of the `reference_point`.
    /// * `reference_point`: The reference point.
    ///
    /// returns: `Result<PointList, HssError>`. This returns an error only if memory cannot be
    /// allocated.
    pub(crate) fn new(
        objective_values: &[Vec<f64>],
        reference_point: &[f64],
    ) -> Result<Self, HssError> {
        let dimensions = reference_point.len();
        let total = objective_values.len() + 2;

        let mut points: Vec<Point> = Vec::new();
        points
            .try_reserve_exact(total)
            .map_err(|e| HssError::Allocation(format!("{total} points ({e})")))?;

        points.push(Point::sentinel());
        for (id, values) in objective_values.iter().enumerate() {
            let mut x = [0.0; 3];
            x[..dimensions].copy_from_slice(&values[..dimensions]);
            points.push(Point::new(x, id));
        }
        points.push(Point::sentinel());
        let tail = total - 1;

        for axis in (0..dimensions).rev() {
            let coordinates: Vec<f64> = objective_values.iter().map(|v| v[axis]).collect();

            let mut previous = HEAD;
            for id in argsort(&coordinates, Sort::Ascending) {
                let node = id + 1;
                points[previous].next[axis] = node;
                points[node].prev[axis] = previous;
                previous = node;
            }
            points[previous].next[axis] = tail;
            points[tail].prev[axis] = previous;
            points[tail].next[axis] = HEAD;
            points[HEAD].prev[axis] = tail;
        }

        let mut ref_point = [0.0; 3];
        ref_point[..dimensions].copy_from_slice(reference_point);
        debug!(
            "Created sorted lists for {} points with {} objectives",
            total - 2,
            dimensions
        );

        Ok(Self {
            points,
            dimensions,
            reference_point: ref_point,
        })
    }

    /// The index of the sentinel placed after the last point of each sorted list.
    ///
    /// returns: `usize`
    pub(crate) fn tail(&self) -> usize {
        self.points.len() - 1
    }

    /// The number of points, excluding the sentinels.
    ///
    /// returns: `usize`
    pub(crate) fn len(&self) -> usize {
        self.points.len() - 2
    }

    /// Get a coordinate of a node.
    ///
    /// # Arguments
    ///
    /// * `node`: The node index.
    /// * `axis`: The coordinate index.
    ///
    /// returns: `f64`
    #[inline]
    pub(crate) fn x(&self, node: usize, axis: usize) -> f64 {
        self.points[node].x[axis]
    }

    /// Mark the points that do not strictly dominate the reference point, i.e. the points with
    /// at least one coordinate equal to or larger than the reference point's coordinate. These
    /// points cannot contribute to the hyper-volume. Each list is walked from its end and
    /// stops at the first point inside the reference box.
    ///
    /// returns: `usize`. The number of marked points.
    pub(crate) fn mark_invalid_points(&mut self) -> usize {
        let tail = self.tail();
        let mut marked = 0;

        for axis in 0..self.dimensions {
            let mut p = self.points[tail].prev[axis];
            while p != HEAD && self.x(p, axis) >= self.reference_point[axis] {
                if !self.points[p].is_dominated() {
                    self.points[p].mark_dominated();
                    marked += 1;
                }
                p = self.points[p].prev[axis];
            }
        }

        debug!("{} points do not strictly dominate the reference point", marked);
        marked
    }

    /// Find the unselected point with the largest contribution. Ties are broken by the smallest
    /// index in the caller's array and points able to contribute always come before dominated
    /// points. As this visits all the points, the `updated` flag is also reset for the next
    /// update round.
    ///
    /// returns: `Option<usize>`. The node index or `None` if all points were already selected.
    pub(crate) fn maximum_contributor(&mut self) -> Option<usize> {
        let mut best: Option<usize> = None;
        let stop = self.tail();
        let mut p = self.points[HEAD].next[0];

        while p != stop {
            self.points[p].updated = false;
            let point = &self.points[p];
            if !point.is_in() {
                let is_better = best.map_or(true, |b| {
                    let current = &self.points[b];
                    match (point.is_dominated(), current.is_dominated()) {
                        (false, true) => true,
                        (true, false) => false,
                        _ => {
                            (point.contribution > current.contribution)
                                || (point.contribution == current.contribution
                                    && point.id < current.id)
                        }
                    }
                });
                if is_better {
                    best = Some(p);
                }
            }
            p = self.points[p].next[0];
        }
        best
    }
}

#[cfg(test)]
mod test {
    use crate::core::list::{PointList, HEAD};
    use crate::core::point::PointState;

    /// Collect the point ids in the order given by the links of `axis`.
    fn ids_along(list: &PointList, axis: usize) -> Vec<usize> {
        let mut ids = vec![];
        let mut p = list.points[HEAD].next[axis];
        while p != list.tail() {
            ids.push(list.points[p].id);
            p = list.points[p].next[axis];
        }
        ids
    }

    #[test]
    /// The lists must be sorted in ascending order and be circular.
    fn test_sorted_lists() {
        let points = vec![
            vec![3.0, 1.0, 2.0],
            vec![1.0, 3.0, 1.0],
            vec![2.0, 2.0, 3.0],
        ];
        let list = PointList::new(&points, &[4.0, 4.0, 4.0]).unwrap();

        assert_eq!(list.len(), 3);
        assert_eq!(ids_along(&list, 0), vec![1, 2, 0]);
        assert_eq!(ids_along(&list, 1), vec![0, 2, 1]);
        assert_eq!(ids_along(&list, 2), vec![1, 0, 2]);

        for axis in 0..3 {
            let tail = list.tail();
            assert_eq!(list.points[tail].next[axis], HEAD);
            assert_eq!(list.points[HEAD].prev[axis], tail);

            // backward links mirror the forward ones
            let mut p = list.points[HEAD].next[axis];
            while p != tail {
                let next = list.points[p].next[axis];
                assert_eq!(list.points[next].prev[axis], p);
                p = next;
            }
        }
    }

    #[test]
    /// Points on or beyond the reference point are marked only once.
    fn test_mark_invalid_points() {
        let points = vec![
            vec![1.0, 1.0],
            vec![5.0, 1.0],
            vec![6.0, 7.0],
            vec![2.0, 5.0],
            vec![4.9, 4.9],
        ];
        let mut list = PointList::new(&points, &[5.0, 5.0]).unwrap();

        assert_eq!(list.mark_invalid_points(), 3);
        let dominated: Vec<usize> = list
            .points
            .iter()
            .filter(|p| p.state == PointState::Dominated)
            .map(|p| p.id)
            .collect();
        assert_eq!(dominated.len(), 3);
        for id in [1, 2, 3] {
            assert!(dominated.contains(&id));
        }
    }

    #[test]
    /// The largest contribution wins; ties are broken by the smallest id.
    fn test_maximum_contributor() {
        let points = vec![
            vec![3.0, 1.0],
            vec![1.0, 3.0],
            vec![2.0, 2.0],
            vec![5.0, 0.0],
        ];
        let mut list = PointList::new(&points, &[5.0, 5.0]).unwrap();
        list.mark_invalid_points();

        for (node, c) in [(1, 4.0), (2, 8.0), (3, 8.0)] {
            list.points[node].contribution = c;
            list.points[node].updated = true;
        }
        let best = list.maximum_contributor().unwrap();
        assert_eq!(list.points[best].id, 1);
        assert!(list.points.iter().all(|p| !p.updated));

        list.points[best].select();
        let best = list.maximum_contributor().unwrap();
        assert_eq!(list.points[best].id, 2);
        list.points[best].select();

        // a candidate with no contribution still comes before the dominated point
        list.points[1].contribution = 0.0;
        let best = list.maximum_contributor().unwrap();
        assert_eq!(list.points[best].id, 0);
        list.points[best].select();

        let best = list.maximum_contributor().unwrap();
        assert_eq!(list.points[best].id, 3);
        list.points[best].select();
        assert!(list.maximum_contributor().is_none());
    }
}
