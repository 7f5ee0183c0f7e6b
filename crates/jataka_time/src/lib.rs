//! Time scales for the jataka engine.
//!
//! This crate provides:
//! - `UtcTime`, the canonical UTC calendar representation, with ISO-8601 parsing
//! - Julian Date conversions covering the full 1 CE - 9999 CE range
//! - A polynomial delta-T model for the UTC -> TT (dynamical time) conversion
//! - Greenwich / local sidereal time
//!
//! All implementations derive from published astronomical formulas
//! (Meeus, *Astronomical Algorithms* 2nd ed.; Espenak & Meeus delta-T
//! polynomial expressions; IAU 1982 GMST).

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use delta_t::{delta_t_seconds, jd_utc_to_jd_tt};
pub use error::TimeError;
pub use julian::{J2000_JD, calendar_to_jd, jd_to_calendar, jd_to_centuries};
pub use sidereal::{gmst_rad, local_sidereal_time_rad};
pub use utc_time::UtcTime;
