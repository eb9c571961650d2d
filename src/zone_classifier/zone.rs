//!
//! Verdict of the [ZoneClassifier] and its text representation.
//!
//! Like any other enum of the crate used as a key, [Zone] can be iterated over its variants,
//! so the text table is checked to cover every verdict.
//!
//! [ZoneClassifier]: super::ZoneClassifier
//
#[cfg(test)]
#[path = "../tests/zone_classifier/zone_test.rs"]
mod tests;
//
use strum_macros::EnumIter;
///
/// Where the located point is, against the hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Zone {
    ///
    /// Within the hull silhouette, above the depth threshold.
    Inside,
    ///
    /// Below the depth threshold, wherever horizontally.
    BelowDeck,
    SternPort,
    SternStarboard,
    ///
    /// Aft of the hull, within its beam.
    SternCenter,
    MiddlePort,
    MiddleStarboard,
    ForwardPort,
    ForwardStarboard,
    ///
    /// Outside the bow skin, but within the safe corridor.
    ForwardCenter,
    ///
    /// Past the forward extent of the hull.
    ForwardmostPoint,
    ///
    /// Outside the hull, but no zone applies.
    NoAlert,
}
//
//
impl Zone {
    ///
    /// Returns the text to be displayed for the verdict.
    pub fn message(&self) -> &'static str {
        match self {
            Zone::Inside => "Inside the hull, no alert",
            Zone::BelowDeck => "Person Overboard at extreme depth",
            Zone::SternPort => "Person Overboard at Port side stern",
            Zone::SternStarboard => "Person Overboard at Starboard side stern",
            Zone::SternCenter => "Person Overboard at stern centerline",
            Zone::MiddlePort => "Person Overboard at Port side middle",
            Zone::MiddleStarboard => "Person Overboard at Starboard side middle",
            Zone::ForwardPort => "Person Overboard at Port side forward",
            Zone::ForwardStarboard => "Person Overboard at Starboard side forward",
            Zone::ForwardCenter => "Person Overboard at forward centerline",
            Zone::ForwardmostPoint => "Person Overboard at forwardmost point",
            Zone::NoAlert => "No alert",
        }
    }
    ///
    /// Returns `true` if the verdict has to be raised as an alert.
    pub fn is_alert(&self) -> bool {
        !matches!(self, Zone::Inside | Zone::NoAlert)
    }
}
//
//
impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
