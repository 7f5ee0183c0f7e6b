//! Greenwich and local sidereal time.
//!
//! GMST from the IAU 1982 expression (Meeus, eq. 12.4). UT1 is taken
//! equal to UTC; the neglected DUT1 (< 0.9 s) amounts to < 0.004 deg of
//! sidereal rotation.

use std::f64::consts::TAU;

use crate::julian::{J2000_JD, jd_to_centuries};

/// Greenwich Mean Sidereal Time in radians, range [0, 2*pi).
pub fn gmst_rad(jd_ut1: f64) -> f64 {
    let t = jd_to_centuries(jd_ut1);
    let theta_deg = 280.460_618_37 + 360.985_647_366_29 * (jd_ut1 - J2000_JD)
        + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta_deg.to_radians().rem_euclid(TAU)
}

/// Local sidereal time: GMST plus the observer's east longitude.
pub fn local_sidereal_time_rad(gmst: f64, east_longitude_rad: f64) -> f64 {
    (gmst + east_longitude_rad).rem_euclid(TAU)
}
