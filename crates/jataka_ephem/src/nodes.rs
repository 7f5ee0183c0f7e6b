//! Lunar node (Rahu/Ketu) longitudes.
//!
//! The mean node is the Delaunay Omega polynomial (IERS Conventions 2010);
//! the true node adds 13 short-period sinusoidal corrections (Meeus,
//! *Astronomical Algorithms* 2nd ed., ch. 47, Table 47.B). Both are
//! referred to the mean equinox of date. Ketu is always Rahu + 180 deg.

use crate::fundamental::delaunay_arguments;
use crate::normalize_360;

/// Mean or true (perturbation-corrected) node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeMode {
    /// Smooth polynomial motion only.
    Mean,
    /// Mean plus short-period corrections.
    #[default]
    True,
}

/// Short-period node corrections: [nl, nl', nF, nD, nOmega, amplitude_deg].
#[rustfmt::skip]
static NODE_TERMS: [[f64; 6]; 13] = [
    [ 0.0,  0.0,  0.0,  0.0,  1.0, -1.4979],
    [ 0.0,  0.0,  2.0, -2.0,  0.0,  0.1500],
    [ 0.0,  0.0,  2.0,  0.0,  0.0, -0.1226],
    [ 0.0,  0.0,  0.0,  0.0,  2.0,  0.1176],
    [ 1.0,  0.0,  0.0,  0.0,  0.0, -0.0801],
    [ 0.0,  1.0,  0.0,  0.0,  0.0,  0.0056],
    [ 0.0,  0.0,  2.0,  0.0, -2.0, -0.0047],
    [ 1.0,  0.0,  2.0,  0.0,  0.0, -0.0043],
    [ 0.0,  0.0,  2.0, -2.0,  2.0,  0.0040],
    [ 0.0,  1.0,  0.0,  0.0, -1.0,  0.0037],
    [ 0.0,  0.0,  0.0,  2.0,  0.0, -0.0030],
    [ 2.0,  0.0,  0.0,  0.0,  0.0, -0.0020],
    [ 0.0,  1.0,  2.0, -2.0,  0.0,  0.0015],
];

/// Rahu (ascending node) longitude in degrees [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn rahu_deg(t: f64, mode: NodeMode) -> f64 {
    let args = delaunay_arguments(t);
    let mean = args[4].to_degrees();
    match mode {
        NodeMode::Mean => normalize_360(mean),
        NodeMode::True => {
            let mut correction = 0.0;
            for term in &NODE_TERMS {
                let angle = term[0] * args[0]
                    + term[1] * args[1]
                    + term[2] * args[2]
                    + term[3] * args[3]
                    + term[4] * args[4];
                correction += term[5] * angle.sin();
            }
            normalize_360(mean + correction)
        }
    }
}

/// Ketu (descending node) longitude in degrees [0, 360).
pub fn ketu_deg(t: f64, mode: NodeMode) -> f64 {
    normalize_360(rahu_deg(t, mode) + 180.0)
}

/// Mean node daily motion in deg/day — always retrograde.
pub fn mean_node_speed_deg_per_day(t: f64) -> f64 {
    let day = 1.0 / 36_525.0;
    let l1 = rahu_deg(t, NodeMode::Mean);
    let l2 = rahu_deg(t + day, NodeMode::Mean);
    let mut diff = l2 - l1;
    if diff > 180.0 {
        diff -= 360.0;
    } else if diff < -180.0 {
        diff += 360.0;
    }
    diff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_rahu_at_j2000() {
        // Omega at J2000 = 125.0446 deg.
        let deg = rahu_deg(0.0, NodeMode::Mean);
        assert!((deg - 125.04).abs() < 0.1, "mean Rahu = {deg}");
    }

    #[test]
    fn ketu_opposite_rahu() {
        for &t in &[-1.3, -0.5, 0.0, 0.24, 1.0] {
            for mode in [NodeMode::Mean, NodeMode::True] {
                let diff = normalize_360(ketu_deg(t, mode) - rahu_deg(t, mode));
                assert!((diff - 180.0).abs() < 1e-10, "t={t}: diff = {diff}");
            }
        }
    }

    #[test]
    fn node_regression_rate() {
        // ~ -0.0529 deg/day.
        let rate = mean_node_speed_deg_per_day(0.0);
        assert!((rate - (-0.0529)).abs() < 0.001, "rate = {rate}");
    }

    #[test]
    fn true_correction_bounded() {
        for &t in &[-2.0, -1.3, 0.0, 0.24, 1.5] {
            let mean = rahu_deg(t, NodeMode::Mean);
            let truth = rahu_deg(t, NodeMode::True);
            let mut diff = (truth - mean).abs();
            if diff > 180.0 {
                diff = 360.0 - diff;
            }
            assert!(diff < 2.0, "t={t}: |true-mean| = {diff}");
        }
    }

    #[test]
    fn outputs_normalized() {
        for &t in &[-13.0, -1.0, 0.0, 5.0, 79.0] {
            for mode in [NodeMode::Mean, NodeMode::True] {
                let r = rahu_deg(t, mode);
                assert!((0.0..360.0).contains(&r), "t={t}: {r}");
            }
        }
    }
}
