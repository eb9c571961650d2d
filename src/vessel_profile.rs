//!
//! The representation of the vessel in terms of its hull silhouette
//! in the horizontal plane.
//!
//! - Derives longitudinal section boundaries from overall dimensions
//!
//! - Provides a number of queries:
//!     - Hull test, whether a horizontal position lies within the silhouette
//!     - Boundary query, the transverse extent of the hull at some `y`
//
#[cfg(test)]
#[path = "tests/vessel_profile_test.rs"]
mod tests;
//
mod ellipse_section;
pub mod hull_section;
mod rect_section;
pub mod section_kind;
pub mod vessel_profile_conf;
//
use crate::error::ProfileError;
use ellipse_section::EllipseSection;
use hull_section::{Boundary, HullSection};
use indexmap::IndexMap;
use rect_section::RectSection;
use sal_sync::services::entity::dbg_id::DbgId;
use section_kind::{Longitudinal, SectionKind};
use strum::IntoEnumIterator;
use vessel_profile_conf::VesselProfileConf;
//
type Section = Box<dyn HullSection + Send + Sync>;
///
/// Hull silhouette as a sequence of longitudinally ordered sections:
///
/// ```text
///  stern_end   middle_start          middle_end                bow_end
///      |  Stern  |       Middle          |        Forward         |
///      +---------+-----------------------+-----..........         |
///      |  rect   |         rect          |   ellipse       ..     |
///  y ->|         |                       |                   ..   |
///      +---------+-----------------------+-----..........         |
/// ```
///
/// Immutable once created, so it can be shared between threads.
pub struct VesselProfile {
    length: f64,
    width: f64,
    half_width: f64,
    stern_end: f64,
    middle_start: f64,
    middle_end: f64,
    bow_end: f64,
    ///
    /// Ordered stern to bow.
    sections: IndexMap<SectionKind, Section>,
}
//
//
impl VesselProfile {
    ///
    /// Creates a new instance.
    ///
    /// # Errors
    /// - [ProfileError::InvalidDimension] if length or width is non-positive or non-finite,
    ///   as well as for a non-positive stern length or a forward ratio out of `(0, 1)`,
    /// - [ProfileError::InconsistentSections] if derived boundaries are not ordered stern to bow.
    pub fn new(parent: &DbgId, conf: VesselProfileConf) -> Result<Self, ProfileError> {
        let dbgid = DbgId::with_parent(parent, "VesselProfile");
        // exclusive upper bound of each value
        for (name, value, max) in [
            ("length", conf.length, f64::INFINITY),
            ("width", conf.width, f64::INFINITY),
            ("stern_length", conf.stern_length, f64::INFINITY),
            ("forward_ratio", conf.forward_ratio, 1.0),
        ] {
            if !(value.is_finite() && value > 0.0 && value < max) {
                log::warn!("{} | Invalid dimension {}={}", dbgid, name, value);
                return Err(ProfileError::InvalidDimension { name, value });
            }
        }
        let half_width = conf.width / 2.0;
        let stern_end = -conf.length / 2.0;
        let middle_start = stern_end + conf.stern_length;
        let middle_end = conf.length / 2.0 - conf.length * conf.forward_ratio;
        let bow_end = conf.length / 2.0;
        if !(stern_end < middle_start && middle_start <= middle_end && middle_end < bow_end) {
            log::warn!(
                "{} | Inconsistent sections for length={} stern_length={} forward_ratio={}",
                dbgid,
                conf.length,
                conf.stern_length,
                conf.forward_ratio
            );
            return Err(ProfileError::InconsistentSections {
                stern_end,
                middle_start,
                middle_end,
                bow_end,
            });
        }
        let sections: IndexMap<SectionKind, Section> = SectionKind::iter()
            .map(|kind| {
                let section: Section = match kind {
                    SectionKind::Stern => Box::new(RectSection::new(middle_start, half_width)),
                    SectionKind::Middle => Box::new(RectSection::new(middle_end, half_width)),
                    SectionKind::Forward => {
                        Box::new(EllipseSection::new(middle_end, bow_end, half_width))
                    }
                };
                (kind, section)
            })
            .collect();
        log::debug!(
            "{} | stern_end={} middle_start={} middle_end={} bow_end={} half_width={}",
            dbgid,
            stern_end,
            middle_start,
            middle_end,
            bow_end,
            half_width
        );
        Ok(Self {
            length: conf.length,
            width: conf.width,
            half_width,
            stern_end,
            middle_start,
            middle_end,
            bow_end,
            sections,
        })
    }
    ///
    /// Overall length.
    pub fn length(&self) -> f64 {
        self.length
    }
    ///
    /// Overall beam.
    pub fn width(&self) -> f64 {
        self.width
    }
    pub fn half_width(&self) -> f64 {
        self.half_width
    }
    ///
    /// Aft-most point.
    pub fn stern_end(&self) -> f64 {
        self.stern_end
    }
    pub fn middle_start(&self) -> f64 {
        self.middle_start
    }
    pub fn middle_end(&self) -> f64 {
        self.middle_end
    }
    ///
    /// Forward-most point.
    pub fn bow_end(&self) -> f64 {
        self.bow_end
    }
    ///
    /// Longitudinal semi-axis of the forward ellipse.
    pub fn ellipse_major(&self) -> f64 {
        (self.bow_end - self.middle_end) / 2.0
    }
    ///
    /// Transverse semi-axis of the forward ellipse.
    pub fn ellipse_minor(&self) -> f64 {
        self.half_width
    }
    ///
    /// `y` of the forward ellipse center.
    pub fn ellipse_center(&self) -> f64 {
        self.middle_end + self.ellipse_major()
    }
    ///
    /// Return a reference to the section of the `kind`.
    pub fn section(&self, kind: SectionKind) -> Option<&(dyn HullSection + Send + Sync)> {
        self.sections.get(&kind).map(|section| &**section as &(dyn HullSection + Send + Sync))
    }
    ///
    /// Return an iterator over the sections, stern to bow.
    pub fn sections(
        &self,
    ) -> impl Iterator<Item = (SectionKind, &(dyn HullSection + Send + Sync))> {
        self.sections
            .iter()
            .map(|(kind, section)| (*kind, &**section as &(dyn HullSection + Send + Sync)))
    }
    ///
    /// Returns where `y` lies against the hull.
    ///
    /// Non-comparable `y` (_NaN_) is considered to be beyond the stern.
    pub fn locate(&self, y: f64) -> Longitudinal {
        // also catches NaN
        if !(y >= self.stern_end) {
            return Longitudinal::BeyondStern;
        }
        if y > self.bow_end {
            return Longitudinal::BeyondBow;
        }
        self.sections
            .iter()
            .find(|(_, section)| y <= section.end())
            .map(|(kind, _)| Longitudinal::Within(*kind))
            .unwrap_or(Longitudinal::BeyondBow)
    }
    ///
    /// Returns `true` if `(x, y)` lies within the hull silhouette, skin included.
    pub fn is_inside(&self, x: f64, y: f64) -> bool {
        self.section_at(y)
            .is_some_and(|section| section.contains(x, y))
    }
    ///
    /// Returns the transverse extent of the hull at `y`,
    /// or `None` if `y` is out of the longitudinal range.
    pub fn boundary_at(&self, y: f64) -> Option<Boundary> {
        self.section_at(y).and_then(|section| section.boundary(y))
    }
    ///
    /// Returns the section which band contains `y`.
    fn section_at(&self, y: f64) -> Option<&Section> {
        match self.locate(y) {
            Longitudinal::Within(kind) => self.sections.get(&kind),
            _ => None,
        }
    }
}
