//!
//! Each [HullSection] of the [VesselProfile] is pointed by [SectionKind].
//!
//! It implements all required traits to be used as type of [IndexMap] key.
//! In addition, comparing to standard enums, this one can also be iterated over its variants
//! (in stern to bow order).
//!
//! [HullSection]: super::hull_section::HullSection
//! [VesselProfile]: super::VesselProfile
//! [IndexMap]: indexmap::IndexMap
//
use strum_macros::EnumIter;
///
/// Longitudinal sections of the hull, ordered stern to bow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum SectionKind {
    ///
    /// Rectangular, `[stern_end, middle_start]`.
    Stern,
    ///
    /// Rectangular, `(middle_start, middle_end]`.
    Middle,
    ///
    /// Elliptical, `(middle_end, bow_end]`.
    Forward,
}
///
/// Where a longitudinal coordinate lies against the hull.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Longitudinal {
    ///
    /// Aft of the stern end.
    BeyondStern,
    ///
    /// Within the band of the section.
    Within(SectionKind),
    ///
    /// Ahead of the bow end.
    BeyondBow,
}
