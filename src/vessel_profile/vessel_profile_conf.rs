///
/// Length of the stern section, measured from the stern end.
pub const STERN_SECTION_LENGTH: f64 = 40.0;
///
/// Share of the hull length taken by the forward (elliptical) section.
pub const FORWARD_SECTION_RATIO: f64 = 13.0 / 30.0;
///
/// [super::VesselProfile] configuration.
///
/// It can be used to wrap configuration getting from an external source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VesselProfileConf {
    ///
    /// Overall length, along `y`.
    pub length: f64,
    ///
    /// Overall beam, along `x`.
    pub width: f64,
    ///
    /// See [STERN_SECTION_LENGTH].
    pub stern_length: f64,
    ///
    /// See [FORWARD_SECTION_RATIO].
    pub forward_ratio: f64,
}
//
//
impl VesselProfileConf {
    ///
    /// Creates configuration of the given dimensions with default section shape.
    pub fn new(length: f64, width: f64) -> Self {
        Self {
            length,
            width,
            stern_length: STERN_SECTION_LENGTH,
            forward_ratio: FORWARD_SECTION_RATIO,
        }
    }
}
