//! Geocentric solar position (Meeus, *Astronomical Algorithms* 2nd ed., ch. 25).
//!
//! Mean longitude plus equation of center, referred to the mean equinox of
//! date. Accuracy is about 0.01 degrees over several millennia, far inside
//! the engine's degree/minute contract.

use crate::normalize_360;

/// Geocentric ecliptic longitude (deg, equinox of date), latitude (deg,
/// ~0 for the Sun), and distance (au).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn sun_geocentric(t: f64) -> (f64, f64, f64) {
    let l0 = 280.46646 + 36_000.76983 * t + 0.000_3032 * t * t;
    let m = sun_mean_anomaly_deg(t);
    let m_rad = m.to_radians();

    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m_rad.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();

    let true_lon = normalize_360(l0 + c);

    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;
    let nu = (m + c).to_radians();
    let r = 1.000001018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    (true_lon, 0.0, r)
}

/// Mean anomaly of the Sun in degrees (not normalized).
pub fn sun_mean_anomaly_deg(t: f64) -> f64 {
    357.52911 + 35_999.05029 * t - 0.0001537 * t * t
}
