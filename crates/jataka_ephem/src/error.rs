//! Error types for ephemeris computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the analytic ephemeris.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Requested epoch lies outside the supported 1 CE - 9999 CE span.
    EpochOutOfRange { jd_tt: f64 },
    /// An iterative solution failed to converge.
    NoConvergence(&'static str),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EpochOutOfRange { jd_tt } => {
                write!(f, "epoch out of supported range: JD {jd_tt}")
            }
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl Error for EphemerisError {}
