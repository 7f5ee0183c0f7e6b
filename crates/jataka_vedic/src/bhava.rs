//! Bhava (house) cusps and planet-to-house assignment.
//!
//! Four systems: Placidus and Koch (time-based, undefined inside the polar
//! circles), Equal, and Whole Sign. Cusps are produced directly in the
//! sidereal frame: the trigonometric systems solve tropical cusps and
//! subtract the ayanamsha, the equal-division systems build on the
//! sidereal ascendant.
//!
//! A planet occupies house k when its longitude lies in the half-open arc
//! [cusp_k, cusp_{k+1}) counter-clockwise; an exact cusp hit belongs to
//! the house that starts there.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use jataka_ephem::OBLIQUITY_J2000_RAD;

use crate::error::VedicError;
use crate::lagna::{ascendant_rad, midheaven_rad, vertex_rad};
use crate::util::normalize_360;

/// Latitude limit (degrees) for the time-based systems.
const MAX_TIME_BASED_LATITUDE_DEG: f64 = 66.5;

/// Supported house systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BhavaSystem {
    Placidus,
    Koch,
    Equal,
    WholeSign,
}

impl BhavaSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Placidus => "Placidus",
            Self::Koch => "Koch",
            Self::Equal => "Equal",
            Self::WholeSign => "Whole Sign",
        }
    }

    /// Parse the wire identifier used by the request contract.
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "PLACIDUS" => Some(Self::Placidus),
            "KOCH" => Some(Self::Koch),
            "EQUAL" => Some(Self::Equal),
            "WHOLE_SIGN" => Some(Self::WholeSign),
            _ => None,
        }
    }

    /// True for systems that need no trigonometric cusp solve.
    pub const fn is_equal_division(self) -> bool {
        matches!(self, Self::Equal | Self::WholeSign)
    }
}

/// Computed house frame: 12 sidereal cusps plus the angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BhavaFrame {
    pub system: BhavaSystem,
    /// Sidereal cusp longitudes, counter-clockwise from house 1.
    pub cusps: [f64; 12],
    /// Sidereal ascendant.
    pub lagna_deg: f64,
    /// Sidereal midheaven.
    pub mc_deg: f64,
    /// Right ascension of the MC (equatorial, not sidereal-corrected).
    pub armc_deg: f64,
    /// Sidereal vertex.
    pub vertex_deg: f64,
}

/// Compute the house frame for a birth moment.
///
/// `lst_rad` is the local sidereal time, `ayanamsha_deg` the sidereal
/// correction for the epoch. Placidus and Koch reject |latitude| > 66.5
/// deg with [`VedicError::UnsupportedLatitude`]; the caller may retry
/// with Whole Sign but the engine never substitutes on its own.
pub fn compute_bhavas(
    lst_rad: f64,
    latitude_deg: f64,
    system: BhavaSystem,
    ayanamsha_deg: f64,
) -> Result<BhavaFrame, VedicError> {
    let lat_rad = latitude_deg.to_radians();
    let asc_trop = ascendant_rad(lst_rad, lat_rad).to_degrees();
    let mc_trop = midheaven_rad(lst_rad).to_degrees();
    let vertex_trop = vertex_rad(lst_rad, lat_rad).to_degrees();

    let lagna_deg = normalize_360(asc_trop - ayanamsha_deg);
    let mc_deg = normalize_360(mc_trop - ayanamsha_deg);
    let vertex_deg = normalize_360(vertex_trop - ayanamsha_deg);
    let armc_deg = normalize_360(lst_rad.to_degrees());

    let cusps = match system {
        BhavaSystem::Equal => equal_cusps(lagna_deg),
        BhavaSystem::WholeSign => whole_sign_cusps(lagna_deg),
        BhavaSystem::Placidus => {
            check_latitude(latitude_deg, system)?;
            let trop = placidus_cusps(asc_trop, mc_trop, lst_rad, lat_rad)?;
            sidereal_cusps(&trop, ayanamsha_deg)
        }
        BhavaSystem::Koch => {
            check_latitude(latitude_deg, system)?;
            let trop = koch_cusps(asc_trop, mc_trop, lst_rad, lat_rad);
            sidereal_cusps(&trop, ayanamsha_deg)
        }
    };

    Ok(BhavaFrame {
        system,
        cusps,
        lagna_deg,
        mc_deg,
        armc_deg,
        vertex_deg,
    })
}

/// House number (1-12) for a sidereal longitude.
pub fn bhava_of(frame: &BhavaFrame, sidereal_lon: f64) -> u8 {
    let lon = normalize_360(sidereal_lon);
    for i in 0..12 {
        let start = frame.cusps[i];
        let end = frame.cusps[(i + 1) % 12];
        let in_house = if start <= end {
            lon >= start && lon < end
        } else {
            lon >= start || lon < end
        };
        if in_house {
            return (i as u8) + 1;
        }
    }
    // Degenerate frames (coincident cusps) fall back to house 1.
    1
}

/// Assign each longitude to its house.
pub fn assign_bhavas(frame: &BhavaFrame, sidereal_lons: &[f64]) -> Vec<u8> {
    sidereal_lons.iter().map(|&l| bhava_of(frame, l)).collect()
}

fn check_latitude(latitude_deg: f64, system: BhavaSystem) -> Result<(), VedicError> {
    if latitude_deg.abs() > MAX_TIME_BASED_LATITUDE_DEG {
        return Err(VedicError::UnsupportedLatitude {
            latitude_deg,
            system: system.name(),
        });
    }
    Ok(())
}

fn equal_cusps(lagna_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(lagna_deg + i as f64 * 30.0);
    }
    cusps
}

fn whole_sign_cusps(lagna_deg: f64) -> [f64; 12] {
    let base = (normalize_360(lagna_deg) / 30.0).floor() * 30.0;
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(base + i as f64 * 30.0);
    }
    cusps
}

fn sidereal_cusps(tropical: &[f64; 12], ayanamsha_deg: f64) -> [f64; 12] {
    let mut out = [0.0; 12];
    for (i, &c) in tropical.iter().enumerate() {
        out[i] = normalize_360(c - ayanamsha_deg);
    }
    out
}

/// Ecliptic longitude (radians) of the ecliptic point with right
/// ascension `ra`: `lambda = atan2(sin ra, cos ra cos eps)`.
fn ecliptic_lon_for_ra(ra: f64) -> f64 {
    let eps = OBLIQUITY_J2000_RAD;
    f64::atan2(ra.sin(), ra.cos() * eps.cos()).rem_euclid(TAU)
}

/// Declination (radians) of the ecliptic point with right ascension `ra`.
fn ecliptic_declination_for_ra(ra: f64) -> f64 {
    let eps = OBLIQUITY_J2000_RAD;
    let lambda = ecliptic_lon_for_ra(ra);
    (eps.sin() * lambda.sin()).asin()
}

/// Diurnal semi-arc for a declination and latitude, radians.
fn diurnal_semi_arc(dec: f64, lat: f64) -> f64 {
    (-(dec.tan() * lat.tan())).clamp(-1.0, 1.0).acos()
}

/// Placidus cusps (tropical degrees): iterative semi-arc trisection.
fn placidus_cusps(
    asc_deg: f64,
    mc_deg: f64,
    ramc: f64,
    lat: f64,
) -> Result<[f64; 12], VedicError> {
    let mut cusps = [0.0; 12];
    cusps[0] = normalize_360(asc_deg);
    cusps[3] = normalize_360(mc_deg + 180.0);
    cusps[6] = normalize_360(asc_deg + 180.0);
    cusps[9] = normalize_360(mc_deg);

    // Houses 11, 12: trisect the diurnal arc MC -> Asc.
    cusps[10] = placidus_iterate(ramc, lat, 1.0 / 3.0, true)?;
    cusps[11] = placidus_iterate(ramc, lat, 2.0 / 3.0, true)?;

    // Houses 2, 3: trisect the nocturnal arc Asc -> IC.
    cusps[1] = placidus_iterate(ramc, lat, 2.0 / 3.0, false)?;
    cusps[2] = placidus_iterate(ramc, lat, 1.0 / 3.0, false)?;

    // Opposite cusps.
    cusps[4] = normalize_360(cusps[10] + 180.0);
    cusps[5] = normalize_360(cusps[11] + 180.0);
    cusps[7] = normalize_360(cusps[1] + 180.0);
    cusps[8] = normalize_360(cusps[2] + 180.0);

    Ok(cusps)
}

/// Solve one interior Placidus cusp.
///
/// Above the horizon the cusp's RA satisfies `ra = ramc + f * SA_d(ra)`;
/// below, `ra = ramc + pi - f * SA_n(ra)` with the nocturnal semi-arc.
fn placidus_iterate(ramc: f64, lat: f64, fraction: f64, above: bool) -> Result<f64, VedicError> {
    let mut ra = if above {
        ramc + fraction * PI / 2.0
    } else {
        ramc + PI - fraction * PI / 2.0
    };

    for _ in 0..60 {
        let dec = ecliptic_declination_for_ra(ra);
        let sa_d = diurnal_semi_arc(dec, lat);
        let new_ra = if above {
            ramc + fraction * sa_d
        } else {
            ramc + PI - fraction * (PI - sa_d)
        };
        if (new_ra - ra).abs() < 1e-10 {
            return Ok(normalize_360(ecliptic_lon_for_ra(new_ra).to_degrees()));
        }
        ra = new_ra;
    }
    Err(VedicError::NoConvergence("placidus cusp iteration"))
}

/// Koch cusps (tropical degrees): the MC degree's semi-arc divides the
/// quadrants on the equator before projection to the ecliptic.
fn koch_cusps(asc_deg: f64, mc_deg: f64, ramc: f64, lat: f64) -> [f64; 12] {
    let dec_mc = ecliptic_declination_for_ra(ramc);
    let sa_d = diurnal_semi_arc(dec_mc, lat);
    let sa_n = PI - sa_d;

    let mut cusps = [0.0; 12];
    cusps[0] = normalize_360(asc_deg);
    cusps[3] = normalize_360(mc_deg + 180.0);
    cusps[6] = normalize_360(asc_deg + 180.0);
    cusps[9] = normalize_360(mc_deg);

    cusps[10] = normalize_360(ecliptic_lon_for_ra(ramc + sa_d / 3.0).to_degrees());
    cusps[11] = normalize_360(ecliptic_lon_for_ra(ramc + 2.0 * sa_d / 3.0).to_degrees());
    cusps[1] = normalize_360(ecliptic_lon_for_ra(ramc + PI - 2.0 * sa_n / 3.0).to_degrees());
    cusps[2] = normalize_360(ecliptic_lon_for_ra(ramc + PI - sa_n / 3.0).to_degrees());

    cusps[4] = normalize_360(cusps[10] + 180.0);
    cusps[5] = normalize_360(cusps[11] + 180.0);
    cusps[7] = normalize_360(cusps[1] + 180.0);
    cusps[8] = normalize_360(cusps[2] + 180.0);

    cusps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::arc_forward;

    fn frame(system: BhavaSystem) -> BhavaFrame {
        // Porbandar fixture: LST 118.9 deg, 21.6417 N, Lahiri 1869.
        compute_bhavas(118.9_f64.to_radians(), 21.6417, system, 22.035).unwrap()
    }

    fn cusps_cover_circle(cusps: &[f64; 12]) {
        let mut total = 0.0;
        for i in 0..12 {
            let arc = arc_forward(cusps[i], cusps[(i + 1) % 12]);
            assert!(arc > 0.0, "cusp {i} arc not positive");
            total += arc;
        }
        assert!((total - 360.0).abs() < 1e-6, "arcs sum to {total}");
    }

    #[test]
    fn equal_cusps_30_apart() {
        let f = frame(BhavaSystem::Equal);
        for i in 0..12 {
            let expected = normalize_360(f.lagna_deg + i as f64 * 30.0);
            assert!((f.cusps[i] - expected).abs() < 1e-9, "cusp {i}");
        }
    }

    #[test]
    fn whole_sign_cusps_on_boundaries() {
        let f = frame(BhavaSystem::WholeSign);
        for (i, c) in f.cusps.iter().enumerate() {
            assert!((c % 30.0).abs() < 1e-9, "cusp {i} = {c}");
        }
        // Cusp 1 opens the ascendant's sign.
        assert_eq!((f.cusps[0] / 30.0) as u8, (f.lagna_deg / 30.0) as u8);
    }

    #[test]
    fn placidus_angles_anchor_cusps() {
        let f = frame(BhavaSystem::Placidus);
        assert!((f.cusps[0] - f.lagna_deg).abs() < 1e-9);
        assert!((f.cusps[9] - f.mc_deg).abs() < 1e-9);
        cusps_cover_circle(&f.cusps);
    }

    #[test]
    fn koch_angles_anchor_cusps() {
        let f = frame(BhavaSystem::Koch);
        assert!((f.cusps[0] - f.lagna_deg).abs() < 1e-9);
        assert!((f.cusps[9] - f.mc_deg).abs() < 1e-9);
        cusps_cover_circle(&f.cusps);
    }

    #[test]
    fn all_systems_cover_circle() {
        for system in [
            BhavaSystem::Placidus,
            BhavaSystem::Koch,
            BhavaSystem::Equal,
            BhavaSystem::WholeSign,
        ] {
            cusps_cover_circle(&frame(system).cusps);
        }
    }

    #[test]
    fn time_based_systems_reject_polar_latitudes() {
        for system in [BhavaSystem::Placidus, BhavaSystem::Koch] {
            let err = compute_bhavas(1.0, 70.0, system, 24.0).unwrap_err();
            assert!(matches!(err, VedicError::UnsupportedLatitude { .. }), "{system:?}");
        }
    }

    #[test]
    fn equal_division_systems_accept_poles() {
        for system in [BhavaSystem::Equal, BhavaSystem::WholeSign] {
            for &lat in &[90.0, -90.0] {
                let f = compute_bhavas(1.0, lat, system, 24.0).unwrap();
                cusps_cover_circle(&f.cusps);
            }
        }
    }

    #[test]
    fn assignment_lands_inside_interval() {
        for system in [
            BhavaSystem::Placidus,
            BhavaSystem::Koch,
            BhavaSystem::Equal,
            BhavaSystem::WholeSign,
        ] {
            let f = frame(system);
            let mut lon = 0.25;
            while lon < 360.0 {
                let h = bhava_of(&f, lon) as usize;
                assert!((1..=12).contains(&h));
                let start = f.cusps[h - 1];
                let end = f.cusps[h % 12];
                let inside = if start <= end {
                    lon >= start && lon < end
                } else {
                    lon >= start || lon < end
                };
                assert!(inside, "{system:?}: lon {lon} assigned to house {h}");
                lon += 3.7;
            }
        }
    }

    #[test]
    fn exact_cusp_belongs_to_opening_house() {
        let f = frame(BhavaSystem::Placidus);
        for i in 0..12 {
            assert_eq!(bhava_of(&f, f.cusps[i]) as usize, i + 1, "cusp {i}");
        }
    }

    #[test]
    fn lon_360_treated_as_zero() {
        let f = frame(BhavaSystem::WholeSign);
        assert_eq!(bhava_of(&f, 360.0), bhava_of(&f, 0.0));
    }

    #[test]
    fn assign_many() {
        let f = frame(BhavaSystem::Equal);
        let houses = assign_bhavas(&f, &[f.lagna_deg, f.lagna_deg + 35.0, f.lagna_deg + 185.0]);
        assert_eq!(houses, vec![1, 2, 7]);
    }

    #[test]
    fn porbandar_lagna_in_tula() {
        // Sidereal ascendant ~184.7 -> Tula.
        let f = frame(BhavaSystem::Placidus);
        assert_eq!((f.lagna_deg / 30.0) as u8, 6, "lagna = {}", f.lagna_deg);
        // Sidereal MC ~94.9 -> Karka.
        assert_eq!((f.mc_deg / 30.0) as u8, 3, "mc = {}", f.mc_deg);
    }

    #[test]
    fn wire_names() {
        assert_eq!(BhavaSystem::from_wire("PLACIDUS"), Some(BhavaSystem::Placidus));
        assert_eq!(BhavaSystem::from_wire("WHOLE_SIGN"), Some(BhavaSystem::WholeSign));
        assert_eq!(BhavaSystem::from_wire("PORPHYRY"), None);
    }
}
