use crate::algorithms::contribution::ContributionUpdate;
use crate::core::list::{PointList, HEAD, MINUS_INF};

/// Incremental update of the contributions for two objectives.
///
/// The non-dominated points are linked in a staircase sorted by the first objective (the
/// skyline). The skyline never changes after initialisation because selecting a point does not
/// make any other point dominated: the contribution of a point only shrinks by the rectangle it
/// shares with the newly selected point and the closest selected points on either side.
pub(crate) struct Contribution2D;

impl ContributionUpdate for Contribution2D {
    /// Set up the skyline and assign to each non-dominated point the area of the rectangle
    /// between the point and the reference point.
    ///
    /// The head sentinel is placed at `(-inf, r1)` and the tail at `(r0, -inf)`. When two points
    /// share the first coordinate, the one with the larger second coordinate is removed from the
    /// skyline.
    fn initialise(&self, list: &mut PointList) {
        let tail = list.tail();
        let r = list.reference_point;
        let points = &mut list.points;

        points[HEAD].x[0] = MINUS_INF;
        points[HEAD].x[1] = r[1];
        points[tail].x[0] = r[0];
        points[tail].x[1] = MINUS_INF;

        let mut q = HEAD;
        let mut p = points[HEAD].next[0];
        while p != tail {
            let [px, py, _] = points[p].x;
            if px == points[q].x[0] && points[q].x[1] >= py {
                // q is dominated and p takes its place
                points[q].mark_dominated();
                let above = points[q].skyline[1];
                points[above].skyline[0] = p;
                points[p].skyline[1] = above;
                points[p].contribution = (r[0] - px) * (r[1] - py);
                q = p;
            } else if py >= points[q].x[1] || points[p].is_dominated() {
                points[p].mark_dominated();
            } else {
                points[p].contribution = (r[0] - px) * (r[1] - py);
                points[q].skyline[0] = p;
                points[p].skyline[1] = q;
                q = p;
            }
            p = points[p].next[0];
        }
        points[q].skyline[0] = tail;
        points[tail].skyline[1] = q;
    }

    /// Subtract from the unselected skyline points between the new point and its closest
    /// selected neighbours the area they now share with the new point.
    fn update(&self, list: &mut PointList, selected: usize) {
        let points = &mut list.points;
        let [mx, my, _] = points[selected].x;

        let mut up_in = points[selected].skyline[1];
        while !points[up_in].is_in() {
            up_in = points[up_in].skyline[1];
        }
        let mut right_in = points[selected].skyline[0];
        while !points[right_in].is_in() {
            right_in = points[right_in].skyline[0];
        }
        let up_y = points[up_in].x[1];
        let right_x = points[right_in].x[0];

        // points below and to the right
        let mut p = points[selected].skyline[0];
        while p != right_in {
            points[p].contribution -= (right_x - points[p].x[0]) * (up_y - my);
            p = points[p].skyline[0];
        }

        // points above and to the left
        let mut p = points[selected].skyline[1];
        while p != up_in {
            points[p].contribution -= (right_x - mx) * (up_y - points[p].x[1]);
            p = points[p].skyline[1];
        }
    }

    fn name(&self) -> &str {
        "2D"
    }
}

#[cfg(test)]
mod test {
    use crate::algorithms::contribution::ContributionUpdate;
    use crate::algorithms::hss_2d::Contribution2D;
    use crate::core::list::{PointList, HEAD};

    /// Collect the ids of the points on the skyline.
    fn skyline_ids(list: &PointList) -> Vec<usize> {
        let mut ids = vec![];
        let mut p = list.points[HEAD].skyline[0];
        while p != list.tail() {
            ids.push(list.points[p].id);
            p = list.points[p].skyline[0];
        }
        ids
    }

    #[test]
    /// Dominated points and points sharing a coordinate are excluded from the skyline.
    fn test_initialise() {
        let points = vec![
            vec![1.0, 4.0],
            vec![2.0, 2.0],
            vec![3.0, 1.0],
            vec![2.0, 3.0],
            vec![4.0, 2.0],
            vec![3.0, 0.5],
        ];
        let mut list = PointList::new(&points, &[5.0, 5.0]).unwrap();
        list.mark_invalid_points();
        Contribution2D.initialise(&mut list);

        assert_eq!(skyline_ids(&list), vec![0, 1, 5]);
        let contributions: Vec<f64> = list.points[1..=points.len()]
            .iter()
            .map(|p| p.contribution)
            .collect();
        assert_eq!(contributions, vec![4.0, 9.0, 0.0, 0.0, 0.0, 9.0]);
        for node in [3, 4, 5] {
            assert!(list.points[node].is_dominated());
        }
    }

    #[test]
    /// The contributions shrink by the area shared with the selected point.
    fn test_update() {
        let points = vec![vec![1.0, 4.0], vec![2.0, 2.0], vec![3.0, 1.0]];
        let mut list = PointList::new(&points, &[5.0, 5.0]).unwrap();
        list.mark_invalid_points();
        Contribution2D.initialise(&mut list);

        let best = list.maximum_contributor().unwrap();
        assert_eq!(list.points[best].id, 1);
        Contribution2D.update(&mut list, best);
        list.points[best].select();

        assert_eq!(list.points[1].contribution, 1.0);
        assert_eq!(list.points[3].contribution, 2.0);

        let best = list.maximum_contributor().unwrap();
        assert_eq!(list.points[best].id, 2);
        Contribution2D.update(&mut list, best);
        list.points[best].select();

        // only the square between (1, 4) and the selected (2, 2) is left
        assert_eq!(list.points[1].contribution, 1.0);
    }
}
