use crate::algorithms::contribution::ContributionUpdate;
use crate::core::list::{PointList, HEAD, MINUS_INF};
use crate::core::point::Point;

/// Incremental update of the contributions for three objectives as proposed by
///
/// > A. P. Guerreiro, C. M. Fonseca, and L. Paquete, "Greedy hypervolume subset selection in
/// > low dimensions", Evolutionary Computation, vol. 24, pp. 521-544, 2016.
///
/// After a point `p` is selected, the volume each unselected point shares with `p` is removed
/// from its contribution. This is done in three sweeps, one for each objective used as the
/// third (`z`) coordinate. Each sweep only updates the points whose region dominated above `p`
/// in `z` is partially covered by `p`:
///
/// 1. the selected points delimiting the 2D projection of the region dominated by `p` at
///    `z = p.z` are collected (the floor);
/// 2. the area of the projection exclusively dominated by `p` is calculated;
/// 3. the unselected points whose base area is reduced by `p` are linked in two worklists and
///    their base area is initialised;
/// 4. the selected points above `p` in `z` are swept to cut the area of `p` and of the points in
///    the worklists, while the volume is integrated slice by slice.
pub(crate) struct Contribution3D;

impl ContributionUpdate for Contribution3D {
    /// The contribution of each point is the volume of the box between the point and the
    /// reference point.
    fn initialise(&self, list: &mut PointList) {
        let tail = list.tail();
        let r = list.reference_point;

        let mut p = list.points[HEAD].next[0];
        while p != tail {
            let point = &mut list.points[p];
            point.contribution = if point.is_dominated() {
                0.0
            } else {
                (r[0] - point.x[0]) * (r[1] - point.x[1]) * (r[2] - point.x[2])
            };
            p = point.next[0];
        }
    }

    /// The sweeps use the objectives in order `(x, y, z)`, `(z, x, y)` and `(y, z, x)`.
    fn update(&self, list: &mut PointList, selected: usize) {
        let r = list.reference_point;
        for zi in [2, 1, 0] {
            update_out(&mut list.points, &r, selected, zi);
        }
    }

    fn name(&self) -> &str {
        "3D"
    }
}

/// Find the first node in the sorted list of `axis` with the same coordinate as `p`. If no other
/// node shares the coordinate, the node after `p` is returned.
///
/// # Arguments
///
/// * `points`: The nodes.
/// * `p`: The reference node.
/// * `axis`: The list to walk.
///
/// returns: `usize`
fn first_with_same_coordinate(points: &[Point], p: usize, axis: usize) -> usize {
    let value = points[p].x[axis];
    if points[points[p].prev[axis]].x[axis] != value {
        return points[p].next[axis];
    }
    let mut q = p;
    while points[q].x[axis] == value {
        q = points[q].prev[axis];
    }
    points[q].next[axis]
}

/// Collect the selected points delimiting the area dominated by `p` in the `(xi, yi)`
/// projection at `z = p.z`. The delimiters are linked with the `skyline` links in ascending
/// order of `yi`: `p.skyline[0]` is the delimiter on the right of `p` and `p.skyline[1]` the
/// delimiter above `p`. The head and tail sentinels act as the delimiters at the reference
/// point.
///
/// # Arguments
///
/// * `points`: The nodes.
/// * `reference_point`: The reference point.
/// * `p`: The node being selected.
/// * `xi`: The index of the first coordinate.
/// * `yi`: The index of the second coordinate.
/// * `zi`: The index of the sweep coordinate.
fn create_floor(
    points: &mut [Point],
    reference_point: &[f64; 3],
    p: usize,
    xi: usize,
    yi: usize,
    zi: usize,
) {
    let tail = points.len() - 1;
    points[HEAD].x[xi] = reference_point[xi];
    points[HEAD].x[yi] = MINUS_INF;
    points[HEAD].x[zi] = MINUS_INF;
    points[tail].x[xi] = MINUS_INF;
    points[tail].x[yi] = reference_point[yi];
    points[tail].x[zi] = MINUS_INF;

    let p_x = points[p].x;

    // the closest point on the right of p not above it
    let mut right_below = HEAD;
    let mut q = points[HEAD].next[yi];
    while points[q].x[yi] <= p_x[yi] {
        let q_x = points[q].x;
        if points[q].is_in()
            && q_x[zi] <= p_x[zi]
            && q_x[xi] <= points[right_below].x[xi]
            && q_x[xi] > p_x[xi]
        {
            right_below = q;
        }
        q = points[q].next[yi];
    }
    points[p].skyline[0] = right_below;

    let mut last = right_below;
    let mut q = points[p].next[yi];
    loop {
        let q_x = points[q].x;
        let is_in = points[q].is_in();
        if is_in && q_x[xi] <= p_x[xi] && q_x[zi] <= p_x[zi] {
            break;
        }
        if is_in && q_x[zi] <= p_x[zi] && q_x[xi] < points[last].x[xi] && q_x[xi] > p_x[xi] {
            if q_x[yi] == points[last].x[yi] {
                last = points[last].skyline[0];
            }
            points[q].skyline[0] = last;
            points[last].skyline[1] = q;
            last = q;
        }
        q = points[q].next[yi];
    }

    points[q].skyline[0] = last;
    points[last].skyline[1] = q;
    points[p].skyline[1] = q;
}

/// Calculate the area exclusively dominated by `p` in the `(xi, yi)` projection by summing the
/// horizontal bars between consecutive delimiters.
///
/// # Arguments
///
/// * `points`: The nodes.
/// * `p`: The node being selected.
/// * `xi`: The index of the first coordinate.
/// * `yi`: The index of the second coordinate.
///
/// returns: `f64`
fn compute_area(points: &[Point], p: usize, xi: usize, yi: usize) -> f64 {
    let p_x = points[p].x;
    let mut q = points[p].skyline[0];
    let mut q_next = points[q].skyline[1];
    let mut area = (points[q].x[xi] - p_x[xi]) * (points[q_next].x[yi] - p_x[yi]);

    q = q_next;
    while q != points[p].skyline[1] {
        q_next = points[q].skyline[1];
        area += (points[q].x[xi] - p_x[xi]) * (points[q_next].x[yi] - points[q].x[yi]);
        q = q_next;
    }
    area
}

/// Append a node to a worklist.
///
/// # Arguments
///
/// * `points`: The nodes.
/// * `last`: The current last node of the worklist.
/// * `node`: The node to append.
/// * `list`: The worklist index.
fn append_to_worklist(points: &mut [Point], last: usize, node: usize, list: usize) {
    points[last].worklist_next[list] = node;
    points[node].worklist_prev[list] = last;
}

/// Remove a node from a worklist. The links of the removed node are left untouched.
///
/// # Arguments
///
/// * `points`: The nodes.
/// * `node`: The node to remove.
/// * `list`: The worklist index.
fn remove_from_worklist(points: &mut [Point], node: usize, list: usize) {
    let prev = points[node].worklist_prev[list];
    let next = points[node].worklist_next[list];
    points[prev].worklist_next[list] = next;
    points[next].worklist_prev[list] = prev;
}

/// Whether the point at `q_x` is not dominated by the delimiter `delimiter` in the `(xi, yi)`
/// projection.
fn escapes(points: &[Point], delimiter: usize, q_x: &[f64; 3], xi: usize, yi: usize) -> bool {
    points[delimiter].x[xi] > q_x[xi] || points[delimiter].x[yi] > q_x[yi]
}

/// Build the worklists of the unselected points whose contribution is reduced by `p` and
/// initialise their base area at `z = p.z`. Worklist `1` is sorted by `yi` and runs from the
/// head to the tail sentinel; worklist `0` is sorted by `xi` and runs from the tail to the head
/// sentinel. Unselected points dominated by `p` are flagged as dominated.
///
/// # Arguments
///
/// * `points`: The nodes.
/// * `p`: The node being selected.
/// * `xi`: The index of the first coordinate.
/// * `yi`: The index of the second coordinate.
/// * `zi`: The index of the sweep coordinate.
fn create_and_initialise_bases(points: &mut [Point], p: usize, xi: usize, yi: usize, zi: usize) {
    let tail = points.len() - 1;
    let p_x = points[p].x;
    let p_area = points[p].area;

    // first part of the base areas, visiting the points above p
    let stop = points[p].skyline[1];
    let mut q = first_with_same_coordinate(points, p, yi);
    let mut delimiter = points[p].skyline[0];
    let mut area = 0.0;
    let mut out = HEAD;
    points[p].worklist_next[0] = HEAD;

    while q != stop {
        if q != p {
            let q_x = points[q].x;
            if points[q].is_dominated() {
                points[q].updated = true;
            } else if !points[q].is_in() {
                if !points[q].updated {
                    let upper = points[delimiter].skyline[1];
                    if p_x[xi] <= q_x[xi] && p_x[yi] <= q_x[yi] && p_x[zi] <= q_x[zi] {
                        points[q].mark_dominated();
                        points[q].updated = true;
                    } else if p_x[xi] <= q_x[xi]
                        && p_x[yi] <= q_x[yi]
                        && escapes(points, delimiter, &q_x, xi, yi)
                        && escapes(points, upper, &q_x, xi, yi)
                    {
                        let delimiter_x = points[delimiter].x[xi];
                        let point = &mut points[q];
                        point.old_contribution = point.contribution;
                        point.contribution = 0.0;
                        point.area =
                            p_area - (delimiter_x - q_x[xi]) * (q_x[yi] - p_x[yi]) - area;
                        point.last_slice = p_x[zi];
                        append_to_worklist(points, out, q, 1);
                        out = q;
                    }
                }
            } else if q == points[delimiter].skyline[1] {
                area += (points[delimiter].x[xi] - q_x[xi]) * (q_x[yi] - p_x[yi]);
                delimiter = q;
            }
        }
        q = points[q].next[yi];
    }
    append_to_worklist(points, out, tail, 1);
    points[p].worklist_next[1] = tail;
    out = tail;

    // second part of the base areas, visiting the points on the right of p
    let stop = points[p].skyline[0];
    let mut q = first_with_same_coordinate(points, p, xi);
    let mut delimiter = points[p].skyline[1];
    let mut area = 0.0;

    while q != stop {
        if q != p {
            let q_x = points[q].x;
            if points[q].is_dominated() {
                points[q].updated = true;
            } else if !points[q].is_in() {
                let lower = points[delimiter].skyline[0];
                if !points[q].updated
                    && p_x[xi] <= q_x[xi]
                    && p_x[yi] <= q_x[yi]
                    && escapes(points, delimiter, &q_x, xi, yi)
                    && escapes(points, lower, &q_x, xi, yi)
                {
                    let delimiter_y = points[delimiter].x[yi];
                    points[q].area -= (q_x[xi] - p_x[xi]) * (delimiter_y - p_x[yi]) + area;
                    append_to_worklist(points, out, q, 0);
                    out = q;
                }
            } else if q == points[delimiter].skyline[0] {
                area += (q_x[xi] - p_x[xi]) * (points[delimiter].x[yi] - q_x[yi]);
                delimiter = q;
            }
        }
        q = points[q].next[xi];
    }
    append_to_worklist(points, out, HEAD, 0);
}

/// Remove from the area of `p` the part dominated by the selected point `cutter`, which is
/// above `p` in the sweep coordinate. The delimiters of `p` covered by `cutter` are replaced by
/// `cutter`. The volume and the area of the worklist points whose area is cut are updated at
/// `z = cutter.z`; the points left without any area are finalised and removed from the
/// worklists.
///
/// # Arguments
///
/// * `points`: The nodes.
/// * `p`: The node being selected.
/// * `cutter`: The selected node cutting the area of `p`.
/// * `xi`: The index of the first coordinate.
/// * `yi`: The index of the second coordinate.
/// * `zi`: The index of the sweep coordinate.
/// * `xic`: `0` to visit the delimiters in ascending order of `xi`, `1` for `yi`.
///
/// returns: `f64`. The area removed from `p`.
fn cut_off_partial(
    points: &mut [Point],
    p: usize,
    cutter: usize,
    xi: usize,
    yi: usize,
    zi: usize,
    xic: usize,
) -> f64 {
    let yic = 1 - xic;
    let cutter_x = points[cutter].x;
    let p_xi = points[p].x[xi];
    let mut area = 0.0;

    let mut delimiter = points[p].skyline[yic];
    while cutter_x[yi] <= points[delimiter].x[yi] {
        delimiter = points[delimiter].skyline[xic];
    }
    let upper_left = delimiter;

    let mut out = points[p].worklist_next[yic];
    while points[out].x[xi] < points[delimiter].x[xi] {
        out = points[out].worklist_next[xic];
    }
    out = points[out].worklist_prev[xic];

    let stop = points[p].skyline[yic];
    while delimiter != stop {
        let next_delimiter = points[delimiter].skyline[yic];
        let out_xi = points[out].x[xi];
        if points[next_delimiter].x[xi] > out_xi || out_xi < p_xi {
            delimiter = next_delimiter;
            let bound = points[points[delimiter].skyline[xic]].x[xi];
            area += (bound - points[delimiter].x[xi].max(p_xi))
                * (points[delimiter].x[yi] - cutter_x[yi]);
        } else {
            points[out].update_volume(cutter_x[zi]);

            if points[out].x[yi] >= cutter_x[yi] {
                // no area left above the cutter
                let point = &mut points[out];
                point.area = 0.0;
                point.contribution = point.old_contribution - point.contribution;
                point.updated = true;
                remove_from_worklist(points, out, xic);
                remove_from_worklist(points, out, yic);
            } else {
                let cut = area
                    + (points[delimiter].x[xi] - out_xi)
                        * (points[next_delimiter].x[yi] - cutter_x[yi]);
                points[out].area -= cut;
            }
            out = points[out].worklist_prev[xic];
        }
    }

    points[p].skyline[yic] = cutter;
    points[cutter].skyline[xic] = upper_left;
    points[upper_left].skyline[yic] = cutter;

    points[p].area -= area;
    area
}

/// Sweep the points above `p` along the coordinate `zi` and update the contributions of the
/// unselected points sharing volume with `p`.
///
/// Two kinds of unselected points are updated:
/// - the points dominated by `p` in the projection but not in `zi`. They form a chain where
///   each point replaces the previous one as the point whose region is bounded by `p`. The
///   volume integrated by each point is given back to the chain when the sweep ends.
/// - the points in the worklists, whose base area is cut by `p` and by the selected points met
///   during the sweep.
///
/// # Arguments
///
/// * `points`: The nodes.
/// * `reference_point`: The reference point.
/// * `p`: The node being selected.
/// * `zi`: The index of the sweep coordinate.
fn update_out(points: &mut [Point], reference_point: &[f64; 3], p: usize, zi: usize) {
    let xi = (zi + 1) % 3;
    let yi = 3 - (zi + xi);
    let tail = points.len() - 1;

    create_floor(points, reference_point, p, xi, yi, zi);
    points[p].area = compute_area(points, p, xi, yi);
    create_and_initialise_bases(points, p, xi, yi, zi);

    points[tail].x[zi] = reference_point[zi];
    let p_x = points[p].x;
    let mut dominator = HEAD;

    let mut q = points[p].next[zi];
    while q != tail {
        let q_x = points[q].x;
        if points[q].is_in() {
            if q_x[xi] <= p_x[xi] && q_x[yi] <= p_x[yi] {
                // p does not contribute above q
                break;
            } else if q_x[xi] <= p_x[xi]
                && q_x[yi] > p_x[yi]
                && q_x[yi] < points[points[p].skyline[1]].x[yi]
            {
                // q is on the left of p
                points[dominator].update_volume(q_x[zi]);
                let cut = cut_off_partial(points, p, q, xi, yi, zi, 0);
                points[dominator].area -= cut;
            } else if q_x[xi] > p_x[xi]
                && q_x[yi] <= p_x[yi]
                && q_x[xi] < points[points[p].skyline[0]].x[xi]
            {
                // q is below p
                points[dominator].update_volume(q_x[zi]);
                let cut = cut_off_partial(points, p, q, yi, xi, zi, 1);
                points[dominator].area -= cut;
            }
        } else if !points[q].is_dominated()
            && !points[q].updated
            && q_x[xi] <= p_x[xi]
            && q_x[yi] <= p_x[yi]
        {
            let area = points[p].area;
            let point = &mut points[q];
            point.old_contribution = point.contribution;
            point.contribution = 0.0;
            point.replaced = dominator;
            point.area = area;
            point.last_slice = q_x[zi];
            points[dominator].update_volume(q_x[zi]);
            dominator = q;
        }
        q = points[q].next[zi];
    }

    // give back the volume integrated along the chain
    let z = points[q].x[zi];
    points[dominator].update_volume(z);
    let mut volume = 0.0;
    while dominator != HEAD {
        let point = &mut points[dominator];
        volume += point.contribution;
        point.contribution = point.old_contribution - volume;
        point.updated = true;
        dominator = point.replaced;
    }

    // finalise the points left in the worklist
    let end = points[p].worklist_next[1];
    let mut q = points[points[p].worklist_next[0]].worklist_next[1];
    while q != end {
        let point = &mut points[q];
        point.update_volume(z);
        point.contribution = point.old_contribution - point.contribution;
        point.updated = true;
        q = point.worklist_next[1];
    }
}
