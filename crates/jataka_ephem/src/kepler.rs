//! Heliocentric planetary positions from approximate Keplerian elements.
//!
//! Mean elements and per-century rates from the published JPL approximate
//! ephemeris tables (Standish, "Keplerian Elements for Approximate
//! Positions of the Major Planets"). Positions are referred to the mean
//! ecliptic and equinox of J2000; the caller applies general precession to
//! reach the equinox of date.

use crate::error::EphemerisError;
use crate::normalize_360;

/// Osculating mean elements at J2000 plus per-century rates.
///
/// Fields: semi-major axis (au), eccentricity, inclination (deg),
/// mean longitude (deg), longitude of perihelion (deg), longitude of the
/// ascending node (deg) — each paired with its century rate.
#[derive(Debug, Clone, Copy)]
pub struct Elements {
    pub a: f64,
    pub a_dot: f64,
    pub e: f64,
    pub e_dot: f64,
    pub i: f64,
    pub i_dot: f64,
    pub l: f64,
    pub l_dot: f64,
    pub peri: f64,
    pub peri_dot: f64,
    pub node: f64,
    pub node_dot: f64,
}

pub const MERCURY: Elements = Elements {
    a: 0.387_099_27,
    a_dot: 0.000_000_37,
    e: 0.205_635_93,
    e_dot: 0.000_019_06,
    i: 7.004_979_02,
    i_dot: -0.005_947_49,
    l: 252.250_323_50,
    l_dot: 149_472.674_111_75,
    peri: 77.457_796_28,
    peri_dot: 0.160_476_89,
    node: 48.330_765_93,
    node_dot: -0.125_340_81,
};

pub const VENUS: Elements = Elements {
    a: 0.723_335_66,
    a_dot: 0.000_003_90,
    e: 0.006_776_72,
    e_dot: -0.000_041_07,
    i: 3.394_676_05,
    i_dot: -0.000_788_90,
    l: 181.979_099_50,
    l_dot: 58_517.815_387_29,
    peri: 131.602_467_18,
    peri_dot: 0.002_683_29,
    node: 76.679_842_55,
    node_dot: -0.277_694_18,
};

/// Earth-Moon barycentre; stands in for the Earth when forming geocentric
/// planet vectors (the ~4700 km offset is below the engine's resolution).
pub const EARTH_MOON_BARY: Elements = Elements {
    a: 1.000_002_61,
    a_dot: 0.000_005_62,
    e: 0.016_711_23,
    e_dot: -0.000_043_92,
    i: -0.000_015_31,
    i_dot: -0.012_946_68,
    l: 100.464_571_66,
    l_dot: 35_999.372_449_81,
    peri: 102.937_681_93,
    peri_dot: 0.323_273_64,
    node: 0.0,
    node_dot: 0.0,
};

pub const MARS: Elements = Elements {
    a: 1.523_710_34,
    a_dot: 0.000_018_47,
    e: 0.093_394_10,
    e_dot: 0.000_078_82,
    i: 1.849_691_42,
    i_dot: -0.008_131_31,
    l: -4.553_432_05,
    l_dot: 19_140.302_684_99,
    peri: -23.943_629_59,
    peri_dot: 0.444_410_88,
    node: 49.559_538_91,
    node_dot: -0.292_573_43,
};

pub const JUPITER: Elements = Elements {
    a: 5.202_887_00,
    a_dot: -0.000_116_07,
    e: 0.048_386_24,
    e_dot: -0.000_132_53,
    i: 1.304_396_95,
    i_dot: -0.001_837_14,
    l: 34.396_440_51,
    l_dot: 3_034.746_127_75,
    peri: 14.728_479_83,
    peri_dot: 0.212_526_68,
    node: 100.473_909_09,
    node_dot: 0.204_691_06,
};

pub const SATURN: Elements = Elements {
    a: 9.536_675_94,
    a_dot: -0.001_250_60,
    e: 0.053_861_79,
    e_dot: -0.000_509_91,
    i: 2.485_991_87,
    i_dot: 0.001_936_09,
    l: 49.954_244_23,
    l_dot: 1_222.493_622_01,
    peri: 92.598_878_31,
    peri_dot: -0.418_972_16,
    node: 113.662_424_48,
    node_dot: -0.288_677_94,
};

/// Solve Kepler's equation `E - e sin E = M` by Newton iteration.
///
/// `m_rad` is the mean anomaly in radians. Converges in a handful of
/// iterations for planetary eccentricities; the iteration cap guards the
/// contract rather than an expected failure.
pub fn solve_kepler(m_rad: f64, e: f64) -> Result<f64, EphemerisError> {
    let mut ecc_anom = if e < 0.8 { m_rad } else { std::f64::consts::PI };
    for _ in 0..60 {
        let delta = (ecc_anom - e * ecc_anom.sin() - m_rad) / (1.0 - e * ecc_anom.cos());
        ecc_anom -= delta;
        if delta.abs() < 1e-12 {
            return Ok(ecc_anom);
        }
    }
    Err(EphemerisError::NoConvergence("kepler equation"))
}

/// Heliocentric position vector (au, ecliptic J2000) from mean elements.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn heliocentric_position(el: &Elements, t: f64) -> Result<[f64; 3], EphemerisError> {
    let a = el.a + el.a_dot * t;
    let e = el.e + el.e_dot * t;
    let i = (el.i + el.i_dot * t).to_radians();
    let l = el.l + el.l_dot * t;
    let peri = el.peri + el.peri_dot * t;
    let node = (el.node + el.node_dot * t).to_radians();

    // Mean anomaly and argument of perihelion.
    let m = normalize_360(l - peri).to_radians();
    let omega = (peri).to_radians() - node;

    let ecc_anom = solve_kepler(m, e)?;

    // Position in the orbital plane (x' toward perihelion).
    let xp = a * (ecc_anom.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anom.sin();

    // Rotate by argument of perihelion, inclination, node.
    let (cw, sw) = (omega.cos(), omega.sin());
    let (cn, sn) = (node.cos(), node.sin());
    let (ci, si) = (i.cos(), i.sin());

    let x = (cw * cn - sw * sn * ci) * xp + (-sw * cn - cw * sn * ci) * yp;
    let y = (cw * sn + sw * cn * ci) * xp + (-sw * sn + cw * cn * ci) * yp;
    let z = (sw * si) * xp + (cw * si) * yp;

    Ok([x, y, z])
}

/// Geocentric ecliptic longitude (deg), latitude (deg) and distance (au)
/// of a planet, referred to the mean ecliptic/equinox of J2000.
pub fn planet_geocentric(el: &Elements, t: f64) -> Result<(f64, f64, f64), EphemerisError> {
    let p = heliocentric_position(el, t)?;
    let earth = heliocentric_position(&EARTH_MOON_BARY, t)?;

    let x = p[0] - earth[0];
    let y = p[1] - earth[1];
    let z = p[2] - earth[2];

    let r = (x * x + y * y + z * z).sqrt();
    let lon = normalize_360(y.atan2(x).to_degrees());
    let lat = (z / r).asin().to_degrees();

    Ok((lon, lat, r))
}
