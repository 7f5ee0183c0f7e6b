//! Error types for vedic calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from house and chart computations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// The selected house system has no defined cusp solution at this
    /// latitude. Callers may retry with an equal-division system; the
    /// engine never substitutes silently.
    UnsupportedLatitude {
        latitude_deg: f64,
        system: &'static str,
    },
    /// An iterative cusp solution failed to converge.
    NoConvergence(&'static str),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLatitude {
                latitude_deg,
                system,
            } => write!(
                f,
                "{system} house cusps undefined at latitude {latitude_deg} deg"
            ),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl Error for VedicError {}
