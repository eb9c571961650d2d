//!
//! Defines a trait, which considered to be implemented
//! for all concrete sections, used by [super::VesselProfile].
//!
//! The trait provides an interface to
//! - get the longitudinal band the section governs,
//! - test whether a horizontal position lies within the section shape,
//! - get the transverse extent of the section at a longitudinal position.
//
///
/// Transverse extent of the hull at some longitudinal position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    ///
    /// Port side edge, negative or zero.
    pub left: f64,
    ///
    /// Starboard side edge, positive or zero.
    pub right: f64,
}
//
//
impl Boundary {
    ///
    /// Creates a boundary symmetric about the centerline.
    pub fn symmetric(half_width: f64) -> Self {
        Self {
            left: -half_width,
            right: half_width,
        }
    }
}
///
/// A common trait for longitudinal sections of the hull silhouette.
pub trait HullSection {
    ///
    /// Forward-most `y` of the band governed by the section, inclusive.
    ///
    /// The aft edge is the `end` of the previous section (exclusive),
    /// or the stern end of the hull for the first one (inclusive).
    fn end(&self) -> f64;
    ///
    /// Returns `true` if `(x, y)` lies within the section shape, skin included.
    ///
    /// Caller is responsible for `y` being within the band of the section.
    fn contains(&self, x: f64, y: f64) -> bool;
    ///
    /// Returns the transverse extent of the section at `y`.
    ///
    /// `None` means `y` is numerically past the shape.
    fn boundary(&self, y: f64) -> Option<Boundary>;
}
