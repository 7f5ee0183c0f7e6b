//! Shared angle helpers for vedic calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Unsigned angular separation between two longitudes, in [0, 180].
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let diff = (normalize_360(a) - normalize_360(b)).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Forward (counter-clockwise) arc from `a` to `b`, in [0, 360).
pub fn arc_forward(a: f64, b: f64) -> f64 {
    (b - a).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_cases() {
        assert!((normalize_360(0.0)).abs() < 1e-15);
        assert!((normalize_360(360.0)).abs() < 1e-15);
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(725.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn separation_symmetric() {
        assert!((angular_separation(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((angular_separation(350.0, 10.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn separation_max_180() {
        assert!((angular_separation(0.0, 180.0) - 180.0).abs() < 1e-12);
        assert!((angular_separation(90.0, 271.0) - 179.0).abs() < 1e-12);
    }

    #[test]
    fn arc_forward_wraps() {
        assert!((arc_forward(350.0, 20.0) - 30.0).abs() < 1e-12);
        assert!((arc_forward(20.0, 350.0) - 330.0).abs() < 1e-12);
    }
}
