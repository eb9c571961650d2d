//!
//! Errors of the locator.
//!
//! - [ProfileError] - typed errors of [VesselProfile] construction.
//!
//! On the binary side any failure is reported as text
//! wrapped into [StrErr] of `sal_sync`.
//!
//! # Examples
//! ```
//! use mob_locator::error::ProfileError;
//! use sal_sync::services::entity::error::str_err::StrErr;
//! //
//! // typed error raised while building a profile
//! fn check_length(length: f64) -> Result<f64, ProfileError> {
//!     match length > 0.0 {
//!         true => Ok(length),
//!         false => Err(ProfileError::InvalidDimension { name: "length", value: length }),
//!     }
//! }
//! //
//! // the same error turned into a message for the caller
//! fn length_or_message(length: f64) -> Result<f64, StrErr> {
//!     check_length(length).map_err(|err| StrErr(format!("main | {}", err)))
//! }
//! assert!(length_or_message(-1.0).is_err());
//! ```
//!
//! [VesselProfile]: crate::vessel_profile::VesselProfile
//! [StrErr]: sal_sync::services::entity::error::str_err::StrErr
///
/// Failure of [VesselProfile] construction.
///
/// Not recoverable: the caller has to supply valid dimensions
/// before any point gets classified.
///
/// [VesselProfile]: crate::vessel_profile::VesselProfile
#[derive(Clone, Debug, PartialEq)]
pub enum ProfileError {
    ///
    /// Dimension is non-positive, non-finite or out of its range.
    InvalidDimension { name: &'static str, value: f64 },
    ///
    /// Derived section boundaries are not ordered stern to bow.
    InconsistentSections {
        stern_end: f64,
        middle_start: f64,
        middle_end: f64,
        bow_end: f64,
    },
}
//
//
impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimension { name, value } => {
                write!(f, "Invalid dimension {}={}", name, value)
            }
            Self::InconsistentSections {
                stern_end,
                middle_start,
                middle_end,
                bow_end,
            } => write!(
                f,
                "Inconsistent sections: stern_end={} middle_start={} middle_end={} bow_end={}",
                stern_end, middle_start, middle_end, bow_end
            ),
        }
    }
}
//
//
impl std::error::Error for ProfileError {}
