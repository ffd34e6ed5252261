use crate::core::list::PointList;

/// The trait to implement the calculation of the marginal hyper-volume contributions of the
/// unselected points. The contributions are calculated once and then updated incrementally
/// every time a new point joins the selected subset.
pub(crate) trait ContributionUpdate {
    /// Calculate the contribution of each point when no point is selected yet. Points that cannot
    /// contribute are flagged as dominated.
    ///
    /// # Arguments
    ///
    /// * `list`: The sorted lists with the points.
    fn initialise(&self, list: &mut PointList);

    /// Update the contributions of the unselected points after `selected` is chosen. This must
    /// be called before the point is flagged as selected.
    ///
    /// # Arguments
    ///
    /// * `list`: The sorted lists with the points.
    /// * `selected`: The node index of the point being selected.
    fn update(&self, list: &mut PointList, selected: usize);

    /// The name of the engine.
    ///
    /// return: `&str`
    fn name(&self) -> &str;
}
