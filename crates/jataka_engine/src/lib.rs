//! The jataka chart engine: external contract and orchestration.
//!
//! [`ChartEngine`] (or the free [`compute_chart`]) turns a validated
//! [`ChartRequest`] into a complete [`Chart`]: normalized sidereal
//! positions, house frame and assignment, requested divisional charts,
//! ordered yoga/dosha matches, Shadbala scores and the Moon signature.
//! [`ChartEngine::match_charts`] scores two charts through the Ashtakoot
//! matcher.
//!
//! Everything is a pure function of the request plus immutable reference
//! data; charts never share state, so independent requests can run fully
//! in parallel.

pub mod chart;
pub mod error;
pub mod request;

pub use chart::{Chart, ChartEngine, GrahaBhava, compute_chart};
pub use error::{ChartError, InputError};
pub use request::{ChartRequest, ValidatedRequest, validate};

// Re-export the types a caller needs to build requests and read results.
pub use jataka_ephem::Ephemeris;
pub use jataka_kuta::{AshtakootResult, Compatibility, KootaScore, MoonSignature, match_kuta};
pub use jataka_vedic::{AyanamshaSystem, BhavaSystem, Graha};
