///
/// Points with `z` below are classified as [Zone::BelowDeck].
///
/// [Zone::BelowDeck]: super::zone::Zone::BelowDeck
pub const DEPTH_THRESHOLD: f64 = -15.0;
///
/// Share of the local hull half-width forming the safe corridor at the bow.
pub const CORRIDOR_FACTOR: f64 = 0.5;
///
/// [super::ZoneClassifier] configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneClassifierConf {
    ///
    /// See [DEPTH_THRESHOLD].
    pub depth_threshold: f64,
    ///
    /// See [CORRIDOR_FACTOR].
    pub corridor_factor: f64,
}
//
//
impl Default for ZoneClassifierConf {
    fn default() -> Self {
        Self {
            depth_threshold: DEPTH_THRESHOLD,
            corridor_factor: CORRIDOR_FACTOR,
        }
    }
}
