//! Engine error taxonomy.
//!
//! Three families, mirrored by stable codes for the calling layer:
//! input validation (reject the request), ephemeris/house computation
//! (fatal for this request), and catalog configuration (startup only).

use std::error::Error;
use std::fmt::{Display, Formatter};

use jataka_ephem::EphemerisError;
use jataka_time::TimeError;
use jataka_vedic::VedicError;
use jataka_yoga::RuleCatalogError;

/// A rejected request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError {
    /// Name of the offending request field.
    pub field: &'static str,
    pub reason: &'static str,
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid field '{}': {}", self.field, self.reason)
    }
}

impl Error for InputError {}

/// Errors surfaced by chart computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// The request failed validation; nothing was computed.
    Input(InputError),
    /// The instant parsed but the ephemeris refused it.
    Ephemeris(EphemerisError),
    /// House cusp computation is undefined for this latitude/system.
    House(VedicError),
    /// The combination catalog is malformed (startup-time condition).
    Catalog(RuleCatalogError),
}

impl ChartError {
    /// Stable machine-readable code for the calling layer.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Input(_) => "INPUT_VALIDATION",
            Self::Ephemeris(_) | Self::House(_) => "EPHEMERIS_COMPUTATION",
            Self::Catalog(_) => "RULE_CATALOG",
        }
    }
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(e) => write!(f, "input validation: {e}"),
            Self::Ephemeris(e) => write!(f, "ephemeris computation: {e}"),
            Self::House(e) => write!(f, "house computation: {e}"),
            Self::Catalog(e) => write!(f, "rule catalog: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<InputError> for ChartError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

impl From<EphemerisError> for ChartError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<VedicError> for ChartError {
    fn from(e: VedicError) -> Self {
        Self::House(e)
    }
}

impl From<RuleCatalogError> for ChartError {
    fn from(e: RuleCatalogError) -> Self {
        Self::Catalog(e)
    }
}

/// Map a time error onto the instant field.
pub fn instant_error(e: TimeError) -> InputError {
    let reason = match e {
        TimeError::InvalidDate(msg) | TimeError::Parse(msg) => msg,
        _ => "malformed instant",
    };
    InputError {
        field: "instant",
        reason,
    }
}
