/// The selection state of a point. A point starts as a [`PointState::Candidate`] and can either
/// be selected or found to be unable to add any hyper-volume. A dominated point may still be
/// selected once every other candidate contributes nothing; it then keeps a zero contribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PointState {
    /// Not selected yet. Its contribution may still be positive.
    Candidate,
    /// Not selected and unable to contribute (it weakly dominates the reference point on some
    /// coordinate or it is dominated by another point).
    Dominated,
    /// Part of the selected subset.
    Selected {
        /// Whether the point was dominated when it was selected.
        dominated: bool,
    },
    /// A boundary node of the sorted lists.
    Sentinel,
}

/// A node of the arena storing the points. Neighbour relations are indexes into the arena.
#[derive(Clone, Debug)]
pub(crate) struct Point {
    /// The objective values. Only the first `d` values are used for 2D problems.
    pub(crate) x: [f64; 3],
    /// The index of the point in the caller's array.
    pub(crate) id: usize,
    pub(crate) state: PointState,
    /// Whether the contribution of an unselected point was already updated in the current
    /// selection round.
    pub(crate) updated: bool,
    /// Links of the temporary list of selected points delimiting the area dominated by a point
    /// (the skyline). `[0]` moves right and below, `[1]` moves up and left.
    pub(crate) skyline: [usize; 2],
    /// Forward links of the two temporary worklists of unselected points to update.
    pub(crate) worklist_next: [usize; 2],
    /// Backward links of the two temporary worklists of unselected points to update.
    pub(crate) worklist_prev: [usize; 2],
    /// Permanent links to the next point sorted by each coordinate.
    pub(crate) next: [usize; 3],
    /// Permanent links to the previous point sorted by each coordinate.
    pub(crate) prev: [usize; 3],
    /// Area of the 2D projection dominated by the point at the sweep coordinate `last_slice`.
    pub(crate) area: f64,
    /// The marginal hyper-volume contribution.
    pub(crate) contribution: f64,
    /// The contribution saved before a multi-step update.
    pub(crate) old_contribution: f64,
    /// Value of the sweep coordinate up to which `contribution` has been integrated.
    pub(crate) last_slice: f64,
    /// The unselected point this one replaced as the leader of a dominance chain during a sweep.
    pub(crate) replaced: usize,
}

impl Point {
    /// Create a new candidate point.
    ///
    /// # Arguments
    ///
    /// * `x`: The objective values.
    /// * `id`: The index of the point in the input array.
    ///
    /// returns: `Point`
    pub(crate) fn new(x: [f64; 3], id: usize) -> Self {
        Self {
            x,
            id,
            state: PointState::Candidate,
            updated: false,
            skyline: [0; 2],
            worklist_next: [0; 2],
            worklist_prev: [0; 2],
            next: [0; 3],
            prev: [0; 3],
            area: 0.0,
            contribution: 0.0,
            old_contribution: 0.0,
            last_slice: 0.0,
            replaced: 0,
        }
    }

    /// Create a boundary node.
    ///
    /// returns: `Point`
    pub(crate) fn sentinel() -> Self {
        Self {
            state: PointState::Sentinel,
            ..Self::new([-1.0; 3], usize::MAX)
        }
    }

    /// Whether the point belongs to the set of selected points. Sentinels behave as selected
    /// points so that walks along the lists of selected points always stop at the boundaries.
    ///
    /// returns: `bool`
    pub(crate) fn is_in(&self) -> bool {
        matches!(self.state, PointState::Selected { .. } | PointState::Sentinel)
    }

    /// Whether the point cannot add any hyper-volume.
    ///
    /// returns: `bool`
    pub(crate) fn is_dominated(&self) -> bool {
        matches!(
            self.state,
            PointState::Dominated | PointState::Selected { dominated: true }
        )
    }

    /// Flag a candidate as dominated. Its contribution and base area are reset.
    pub(crate) fn mark_dominated(&mut self) {
        debug_assert!(
            matches!(self.state, PointState::Candidate | PointState::Dominated),
            "only unselected points can be dominated"
        );
        self.state = PointState::Dominated;
        self.contribution = 0.0;
        self.old_contribution = 0.0;
        self.area = 0.0;
    }

    /// Add the point to the selected subset.
    pub(crate) fn select(&mut self) {
        self.state = match self.state {
            PointState::Candidate => PointState::Selected { dominated: false },
            PointState::Dominated => PointState::Selected { dominated: true },
            other => {
                debug_assert!(false, "the point is already selected ({:?})", other);
                other
            }
        };
    }

    /// Integrate the volume dominated by the point up to the sweep coordinate `z`.
    ///
    /// # Arguments
    ///
    /// * `z`: The new sweep coordinate.
    pub(crate) fn update_volume(&mut self, z: f64) {
        self.contribution += self.area * (z - self.last_slice);
        self.last_slice = z;
    }
}

#[cfg(test)]
mod test {
    use crate::core::point::{Point, PointState};

    #[test]
    /// Test the legal state transitions.
    fn test_transitions() {
        let mut p = Point::new([1.0, 2.0, 0.0], 3);
        assert!(!p.is_in());
        assert!(!p.is_dominated());

        p.select();
        assert_eq!(p.state, PointState::Selected { dominated: false });
        assert!(p.is_in());
        assert!(!p.is_dominated());

        let mut p = Point::new([1.0, 2.0, 0.0], 4);
        p.contribution = 3.0;
        p.mark_dominated();
        assert_eq!(p.contribution, 0.0);
        assert!(p.is_dominated());
        p.select();
        assert_eq!(p.state, PointState::Selected { dominated: true });
        assert!(p.is_in());
        assert!(p.is_dominated());
    }

    #[test]
    /// Sentinels behave as selected, non-dominated points.
    fn test_sentinel() {
        let s = Point::sentinel();
        assert!(s.is_in());
        assert!(!s.is_dominated());
    }

    #[test]
    fn test_update_volume() {
        let mut p = Point::new([1.0, 1.0, 1.0], 0);
        p.area = 2.0;
        p.last_slice = 1.0;
        p.update_volume(4.0);
        assert_eq!(p.contribution, 6.0);
        assert_eq!(p.last_slice, 4.0);
    }
}
