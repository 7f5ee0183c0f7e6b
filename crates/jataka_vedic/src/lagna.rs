//! Lagna (ascendant), MC, ARMC and vertex from local sidereal time.
//!
//! Closed-form spherical astronomy on the J2000 mean obliquity. The
//! ascendant is the eastern intersection of ecliptic and horizon, derived
//! from the horizon condition; the quadrant is resolved so that the point
//! is rising, not setting.

use std::f64::consts::{PI, TAU};

use jataka_ephem::OBLIQUITY_J2000_RAD;

/// Ecliptic longitude (radians, [0, 2pi)) of the horizon's eastern
/// intersection for a given LST and geographic latitude.
///
/// `asc = atan2(cos(LST), -(sin(LST) cos eps + tan(phi) sin eps))`
pub fn ascendant_rad(lst_rad: f64, latitude_rad: f64) -> f64 {
    let eps = OBLIQUITY_J2000_RAD;
    f64::atan2(
        lst_rad.cos(),
        -(lst_rad.sin() * eps.cos() + latitude_rad.tan() * eps.sin()),
    )
    .rem_euclid(TAU)
}

/// Ecliptic longitude (radians, [0, 2pi)) of the midheaven.
///
/// `MC = atan2(sin(LST), cos(LST) cos eps)`
pub fn midheaven_rad(lst_rad: f64) -> f64 {
    let eps = OBLIQUITY_J2000_RAD;
    f64::atan2(lst_rad.sin(), lst_rad.cos() * eps.cos()).rem_euclid(TAU)
}

/// Vertex: the western intersection of ecliptic and prime vertical,
/// computed as the ascendant of the co-latitude at LST + 180 deg.
pub fn vertex_rad(lst_rad: f64, latitude_rad: f64) -> f64 {
    let co_lat = if latitude_rad >= 0.0 {
        PI / 2.0 - latitude_rad
    } else {
        -PI / 2.0 - latitude_rad
    };
    ascendant_rad(lst_rad + PI, co_lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn aries_culminating_cancer_rising() {
        // At LST = 0 on the equator the vernal point culminates and the
        // rising ecliptic point is 0 Karka (90 deg).
        let asc = ascendant_rad(0.0, 0.0);
        assert!((asc - PI / 2.0).abs() < EPS, "asc = {} deg", asc.to_degrees());
    }

    #[test]
    fn mc_at_lst_zero() {
        assert!(midheaven_rad(0.0).abs() < EPS);
    }

    #[test]
    fn mc_follows_lst_loosely() {
        // MC ecliptic longitude stays within ~3 deg of the LST angle.
        for i in 0..36 {
            let lst = TAU * i as f64 / 36.0;
            let mc = midheaven_rad(lst);
            let mut diff = (mc - lst).abs();
            if diff > PI {
                diff = TAU - diff;
            }
            assert!(diff < 0.06, "LST {} deg: diff {}", lst.to_degrees(), diff.to_degrees());
        }
    }

    #[test]
    fn ascendant_sweeps_full_circle() {
        let phi = 28.6_f64.to_radians();
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for i in 0..720 {
            let asc = ascendant_rad(TAU * i as f64 / 720.0, phi);
            min = min.min(asc);
            max = max.max(asc);
        }
        assert!(min < 0.02, "min = {}", min.to_degrees());
        assert!(max > TAU - 0.02, "max = {}", max.to_degrees());
    }

    #[test]
    fn asc_mc_about_quadrature_at_low_latitude() {
        let phi = 10.0_f64.to_radians();
        for &lst in &[0.5, 1.5, 3.0, 4.5] {
            let asc = ascendant_rad(lst, phi);
            let mc = midheaven_rad(lst);
            let mut diff = (asc - mc).abs();
            if diff > PI {
                diff = TAU - diff;
            }
            assert!(
                diff > 1.0 && diff < 2.2,
                "LST {lst}: |asc-mc| = {} deg",
                diff.to_degrees()
            );
        }
    }

    #[test]
    fn porbandar_fixture() {
        // LST 118.9 deg, phi 21.6417 N -> tropical ascendant ~206.7 deg,
        // MC ~116.9 deg (hand-computed from the closed forms).
        let lst = 118.9_f64.to_radians();
        let phi = 21.6417_f64.to_radians();
        let asc = ascendant_rad(lst, phi).to_degrees();
        let mc = midheaven_rad(lst).to_degrees();
        assert!((asc - 206.7).abs() < 0.2, "asc = {asc}");
        assert!((mc - 116.9).abs() < 0.2, "mc = {mc}");
    }

    #[test]
    fn extreme_latitude_still_finite() {
        // The closed form stays finite at the poles; house systems that
        // cannot handle it reject the latitude upstream.
        for &phi_deg in &[89.9_f64, 90.0, -90.0] {
            let asc = ascendant_rad(1.0, phi_deg.to_radians());
            assert!(asc.is_finite());
        }
    }

    #[test]
    fn vertex_on_western_side() {
        // Vertex and ascendant fall on opposite halves of the ecliptic.
        let lst = 2.0;
        let phi = 40.0_f64.to_radians();
        let asc = ascendant_rad(lst, phi);
        let vtx = vertex_rad(lst, phi);
        let mut diff = (vtx - asc).abs();
        if diff > PI {
            diff = TAU - diff;
        }
        assert!(diff > PI / 4.0, "vertex too close to ascendant: {} deg", diff.to_degrees());
    }
}
