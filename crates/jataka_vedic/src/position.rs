//! Normalized sidereal graha positions.
//!
//! Bridges raw geocentric ephemeris states into the engine's canonical
//! per-graha record: sidereal longitude, rashi, nakshatra/pada, and the
//! retrograde flag derived from the longitude speed sign.

use serde::Serialize;

use jataka_ephem::EclipticState;

use crate::graha::Graha;
use crate::nakshatra::nakshatra_from_longitude;
use crate::rashi::rashi_from_longitude;
use crate::util::normalize_360;

/// Fully normalized position of one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrahaPosition {
    pub graha: Graha,
    /// Sidereal ecliptic longitude, degrees [0, 360).
    pub longitude: f64,
    /// Ecliptic latitude, degrees.
    pub latitude: f64,
    /// Geocentric distance, au (0 for the nodes).
    pub distance: f64,
    /// Longitude rate, deg/day.
    pub speed: f64,
    /// True while the longitude rate is negative.
    pub retrograde: bool,
    /// Rashi index [0, 11].
    pub rashi_index: u8,
    /// Degrees within the rashi [0, 30).
    pub degrees_in_rashi: f64,
    /// Nakshatra index [0, 26].
    pub nakshatra_index: u8,
    /// Pada [1, 4].
    pub pada: u8,
}

/// Normalize a raw tropical state into a sidereal [`GrahaPosition`].
///
/// `ayanamsha_deg` is subtracted from the tropical longitude; the result is
/// reduced modulo 360 before any classification.
pub fn normalize_position(graha: Graha, state: &EclipticState, ayanamsha_deg: f64) -> GrahaPosition {
    from_sidereal_longitude(
        graha,
        state.lon_deg - ayanamsha_deg,
        state.lat_deg,
        state.distance_au,
        state.speed_deg_per_day,
    )
}

/// Build a [`GrahaPosition`] from an already-sidereal longitude.
pub fn from_sidereal_longitude(
    graha: Graha,
    sidereal_lon: f64,
    latitude: f64,
    distance: f64,
    speed: f64,
) -> GrahaPosition {
    let lon = normalize_360(sidereal_lon);
    let rashi = rashi_from_longitude(lon);
    let nak = nakshatra_from_longitude(lon);
    GrahaPosition {
        graha,
        longitude: lon,
        latitude,
        distance,
        speed,
        retrograde: speed < 0.0,
        rashi_index: rashi.rashi_index,
        degrees_in_rashi: rashi.degrees_in_rashi,
        nakshatra_index: nak.nakshatra_index,
        pada: nak.pada,
    }
}
