//!
//! Person overboard locator.
//!
//! Classifies a ship-local coordinate as inside the hull silhouette,
//! or as one of the named exterior zones (e. g. port side stern, starboard side forward).
//!
//! - [VesselProfile] - hull silhouette built of stern, middle and forward sections
//! - [ZoneClassifier] - ordered decision over the depth, the hull test and the section bands
//! - [Zone] - the verdict and its display text
//
pub mod error;
pub mod point;
pub mod vessel_profile;
pub mod zone_classifier;
//
pub use error::ProfileError;
pub use point::Point;
pub use vessel_profile::{
    hull_section::{Boundary, HullSection},
    section_kind::{Longitudinal, SectionKind},
    vessel_profile_conf::VesselProfileConf,
    VesselProfile,
};
pub use zone_classifier::{
    classify,
    zone::Zone,
    zone_classifier_conf::ZoneClassifierConf,
    ZoneClassifier,
};
