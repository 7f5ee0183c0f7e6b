//! Analytic geocentric ephemeris for the jataka engine.
//!
//! Provides ecliptic longitude/latitude/distance/speed for the Sun, Moon
//! and the five classical planets, plus mean/true lunar node longitudes.
//! Everything is computed from published closed-form theories embedded as
//! immutable coefficient tables — no kernel files, no I/O, no shared
//! mutable state. [`Ephemeris`] is `Send + Sync` and can be shared freely.
//!
//! Positions are geocentric, referred to the ecliptic and mean equinox of
//! date. Sidereal reduction (ayanamsha) happens downstream.

pub mod error;
pub mod fundamental;
pub mod kepler;
pub mod moon;
pub mod nodes;
pub mod sun;

pub use error::EphemerisError;
pub use fundamental::{
    OBLIQUITY_J2000_DEG, OBLIQUITY_J2000_RAD, delaunay_arguments,
    general_precession_longitude_deg,
};
pub use nodes::{NodeMode, ketu_deg, rahu_deg};

use jataka_time::jd_to_centuries;

/// First supported instant: 0001-01-01T00:00:00 (Julian calendar).
pub const SUPPORTED_MIN_JD: f64 = 1_721_423.5;

/// Last supported instant: end of 9999-12-31 (Gregorian calendar), with
/// three days of headroom so the far-future delta-T shift (~2.5 days at
/// year 9999) keeps the full calendar range reachable in TT.
pub const SUPPORTED_MAX_JD: f64 = 5_373_487.5;

/// Step for finite-difference speeds, in days.
const SPEED_STEP_DAYS: f64 = 0.25;

/// Bodies with a physical geocentric state. The lunar nodes are computed
/// points (see [`nodes`]) and are not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// All seven bodies in traditional weekday-lord order.
pub const ALL_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

impl Body {
    /// NAIF-style body code.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 10,
            Self::Moon => 301,
            Self::Mercury => 199,
            Self::Venus => 299,
            Self::Mars => 499,
            Self::Jupiter => 599,
            Self::Saturn => 699,
        }
    }

    /// Convert a NAIF-style body code into a [`Body`].
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            10 => Some(Self::Sun),
            301 => Some(Self::Moon),
            199 => Some(Self::Mercury),
            299 => Some(Self::Venus),
            499 => Some(Self::Mars),
            599 => Some(Self::Jupiter),
            699 => Some(Self::Saturn),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }
}

/// Geocentric ecliptic state of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticState {
    /// Tropical (equinox of date) ecliptic longitude, degrees [0, 360).
    pub lon_deg: f64,
    /// Ecliptic latitude, degrees.
    pub lat_deg: f64,
    /// Geocentric distance, astronomical units.
    pub distance_au: f64,
    /// Longitude rate, degrees per day. Negative while retrograde.
    pub speed_deg_per_day: f64,
}

/// Analytic ephemeris context.
///
/// Stateless and allocation-free; exists as a value so callers hold an
/// explicit context rather than reaching for globals, and so the table set
/// could later be swapped behind the same surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ephemeris;

impl Ephemeris {
    pub fn new() -> Self {
        Self
    }

    /// Geocentric ecliptic state of one body at a TT Julian Date.
    pub fn state(&self, body: Body, jd_tt: f64) -> Result<EclipticState, EphemerisError> {
        check_epoch(jd_tt)?;
        let t = jd_to_centuries(jd_tt);
        let (lon, lat, dist) = position_of_date(body, t)?;

        let step = SPEED_STEP_DAYS / 36_525.0;
        let (lon_before, _, _) = position_of_date(body, t - step)?;
        let (lon_after, _, _) = position_of_date(body, t + step)?;
        let speed = wrap_diff(lon_after, lon_before) / (2.0 * SPEED_STEP_DAYS);

        Ok(EclipticState {
            lon_deg: lon,
            lat_deg: lat,
            distance_au: dist,
            speed_deg_per_day: speed,
        })
    }

    /// States for all seven bodies, indexed as [`ALL_BODIES`].
    pub fn all_states(&self, jd_tt: f64) -> Result<[EclipticState; 7], EphemerisError> {
        let mut out = [EclipticState {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance_au: 0.0,
            speed_deg_per_day: 0.0,
        }; 7];
        for (i, &body) in ALL_BODIES.iter().enumerate() {
            out[i] = self.state(body, jd_tt)?;
        }
        Ok(out)
    }

    /// True node longitude and speed at a TT Julian Date.
    pub fn node_state(&self, jd_tt: f64) -> Result<EclipticState, EphemerisError> {
        check_epoch(jd_tt)?;
        let t = jd_to_centuries(jd_tt);
        Ok(EclipticState {
            lon_deg: nodes::rahu_deg(t, NodeMode::True),
            lat_deg: 0.0,
            distance_au: 0.0,
            speed_deg_per_day: nodes::mean_node_speed_deg_per_day(t),
        })
    }
}

/// Reject epochs outside the supported calendrical span.
pub fn check_epoch(jd_tt: f64) -> Result<(), EphemerisError> {
    if !jd_tt.is_finite() || !(SUPPORTED_MIN_JD..=SUPPORTED_MAX_JD).contains(&jd_tt) {
        return Err(EphemerisError::EpochOutOfRange { jd_tt });
    }
    Ok(())
}

/// Tropical position of a body, equinox of date.
///
/// Sun and Moon theories are natively of-date; Keplerian planet positions
/// come out in the J2000 frame and are precessed forward in longitude.
fn position_of_date(body: Body, t: f64) -> Result<(f64, f64, f64), EphemerisError> {
    match body {
        Body::Sun => Ok(sun::sun_geocentric(t)),
        Body::Moon => Ok(moon::moon_geocentric(t)),
        _ => {
            let el = match body {
                Body::Mercury => &kepler::MERCURY,
                Body::Venus => &kepler::VENUS,
                Body::Mars => &kepler::MARS,
                Body::Jupiter => &kepler::JUPITER,
                Body::Saturn => &kepler::SATURN,
                Body::Sun | Body::Moon => unreachable!(),
            };
            let (lon_j2000, lat, dist) = kepler::planet_geocentric(el, t)?;
            let lon = normalize_360(lon_j2000 + general_precession_longitude_deg(t));
            Ok((lon, lat, dist))
        }
    }
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Signed shortest angular difference a - b in degrees.
fn wrap_diff(a: f64, b: f64) -> f64 {
    let mut d = a - b;
    while d > 180.0 {
        d -= 360.0;
    }
    while d < -180.0 {
        d += 360.0;
    }
    d
}
