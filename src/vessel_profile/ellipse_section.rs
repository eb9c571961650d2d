#[cfg(test)]
#[path = "../tests/vessel_profile/ellipse_section_test.rs"]
mod tests;
//
use super::hull_section::{Boundary, HullSection};
///
/// Forward section approximating the bow taper by an ellipse.
///
/// The ellipse spans the whole band longitudinally:
/// the major semi-axis is half of the band length,
/// the minor semi-axis is the half beam of the hull.
pub(super) struct EllipseSection {
    end: f64,
    half_width: f64,
    ///
    /// Longitudinal semi-axis.
    major: f64,
    ///
    /// `y` of the ellipse center.
    center: f64,
}
//
//
impl EllipseSection {
    ///
    /// Creates a new instance.
    /// - start - aft-most `y` of the section (exclusive)
    /// - end - forward-most `y` of the section
    /// - half_width - half of the hull beam
    pub(super) fn new(start: f64, end: f64, half_width: f64) -> Self {
        let major = (end - start) / 2.0;
        Self {
            end,
            half_width,
            major,
            center: start + major,
        }
    }
}
//
//
impl HullSection for EllipseSection {
    //
    //
    fn end(&self) -> f64 {
        self.end
    }
    //
    //
    fn contains(&self, x: f64, y: f64) -> bool {
        let adjusted_y = y - self.center;
        (x * x) / (self.half_width * self.half_width)
            + (adjusted_y * adjusted_y) / (self.major * self.major)
            <= 1.0
    }
    ///
    /// Floating point may push `y` fractionally past the major semi-axis,
    /// such a position has no extent.
    fn boundary(&self, y: f64) -> Option<Boundary> {
        let adjusted_y = y - self.center;
        let term = 1.0 - (adjusted_y * adjusted_y) / (self.major * self.major);
        if term < 0.0 {
            return None;
        }
        Some(Boundary::symmetric(self.half_width * term.sqrt()))
    }
}
