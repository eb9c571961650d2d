use super::hull_section::{Boundary, HullSection};
///
/// Prismatic section of the full beam, used amidships and at the stern.
pub(super) struct RectSection {
    end: f64,
    half_width: f64,
}
//
//
impl RectSection {
    ///
    /// Creates a new instance.
    /// - end - forward-most `y` of the section
    /// - half_width - half of the hull beam
    pub(super) fn new(end: f64, half_width: f64) -> Self {
        Self { end, half_width }
    }
}
//
//
impl HullSection for RectSection {
    //
    //
    fn end(&self) -> f64 {
        self.end
    }
    //
    //
    fn contains(&self, x: f64, _: f64) -> bool {
        x.abs() <= self.half_width
    }
    //
    //
    fn boundary(&self, _: f64) -> Option<Boundary> {
        Some(Boundary::symmetric(self.half_width))
    }
}
