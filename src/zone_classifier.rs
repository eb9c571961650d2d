//!
//! Decides where the located point is against the hull.
//!
//! The decision is a single pass over the rules below, the first match wins:
//! 1. below the depth threshold - [Zone::BelowDeck],
//! 2. within the hull silhouette - [Zone::Inside],
//! 3. outside the hull - the zone of the longitudinal band the point falls into.
//
#[cfg(test)]
#[path = "tests/zone_classifier_test.rs"]
mod tests;
//
pub mod zone;
pub mod zone_classifier_conf;
//
use crate::{
    point::Point,
    vessel_profile::{
        section_kind::{Longitudinal, SectionKind},
        VesselProfile,
    },
};
use sal_sync::services::entity::dbg_id::DbgId;
use zone::Zone;
use zone_classifier_conf::{ZoneClassifierConf, CORRIDOR_FACTOR};
///
/// Classifies ship-local points against the [VesselProfile].
///
/// Holds no state between calls.
pub struct ZoneClassifier<'a> {
    dbgid: DbgId,
    profile: &'a VesselProfile,
    conf: ZoneClassifierConf,
}
//
//
impl<'a> ZoneClassifier<'a> {
    ///
    /// Creates a new instance.
    pub fn new(parent: &DbgId, profile: &'a VesselProfile, conf: ZoneClassifierConf) -> Self {
        Self {
            dbgid: DbgId::with_parent(parent, "ZoneClassifier"),
            profile,
            conf,
        }
    }
    ///
    /// Returns the zone of the `point`.
    ///
    /// Total over all finite coordinates, never fails.
    pub fn classify(&self, point: Point) -> Zone {
        let Point { x, y, z } = point;
        if z < self.conf.depth_threshold {
            return Zone::BelowDeck;
        }
        if self.profile.is_inside(x, y) {
            return Zone::Inside;
        }
        let half_width = self.profile.half_width();
        match self.profile.locate(y) {
            Longitudinal::Within(SectionKind::Stern) => {
                if x < -half_width {
                    Zone::SternPort
                } else if x > half_width {
                    Zone::SternStarboard
                } else {
                    Zone::SternCenter
                }
            }
            Longitudinal::Within(SectionKind::Middle) => {
                if x < -half_width {
                    Zone::MiddlePort
                } else if x > half_width {
                    Zone::MiddleStarboard
                } else {
                    log::warn!(
                        "{}.classify | Point {:?} is outside the hull, but within its beam",
                        self.dbgid,
                        point
                    );
                    Zone::NoAlert
                }
            }
            Longitudinal::Within(SectionKind::Forward) | Longitudinal::BeyondBow => {
                match self.profile.boundary_at(y) {
                    None => Zone::ForwardmostPoint,
                    Some(boundary) => {
                        if x < boundary.left * self.conf.corridor_factor {
                            Zone::ForwardPort
                        } else if x > boundary.right * self.conf.corridor_factor {
                            Zone::ForwardStarboard
                        } else {
                            Zone::ForwardCenter
                        }
                    }
                }
            }
            Longitudinal::BeyondStern => {
                log::debug!(
                    "{}.classify | Point {:?} is aft of the stern end",
                    self.dbgid,
                    point
                );
                Zone::NoAlert
            }
        }
    }
}
///
/// Returns the zone of the `point` against the `profile`,
/// using the default corridor factor.
///
/// Builds a [ZoneClassifier] on each call, for many points
/// create one with [ZoneClassifier::new] and reuse it.
///
/// # Examples
/// ```
/// use mob_locator::{classify, Point, VesselProfile, VesselProfileConf, Zone};
/// use sal_sync::services::entity::dbg_id::DbgId;
/// //
/// let dbgid = DbgId("doc".to_owned());
/// let profile = VesselProfile::new(&dbgid, VesselProfileConf::new(300.0, 50.0)).unwrap();
/// assert_eq!(classify(&profile, Point::new(30.0, 0.0, 0.0), -15.0), Zone::MiddleStarboard);
/// assert_eq!(classify(&profile, Point::new(0.0, 0.0, -20.0), -15.0), Zone::BelowDeck);
/// ```
pub fn classify(profile: &VesselProfile, point: Point, depth_threshold: f64) -> Zone {
    let dbgid = DbgId("classify".to_owned());
    ZoneClassifier::new(
        &dbgid,
        profile,
        ZoneClassifierConf {
            depth_threshold,
            corridor_factor: CORRIDOR_FACTOR,
        },
    )
    .classify(point)
}
