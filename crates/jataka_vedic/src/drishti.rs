//! Graha drishti (aspect) strength in virupa units.
//!
//! The classical piecewise formula maps the angular distance from aspecting
//! graha to target into virupas, with the special bonuses of Mars
//! (4th/8th), Jupiter (5th/9th) and Saturn (3rd/10th). Feeds the drik
//! component of Shadbala.

use crate::graha::Graha;
use crate::util::normalize_360;

/// Aspect strength from one graha onto one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrishtiEntry {
    /// Forward angular distance source -> target, [0, 360).
    pub angular_distance: f64,
    pub base_virupa: f64,
    pub special_virupa: f64,
    pub total_virupa: f64,
}

/// Piecewise base virupa for an angular distance.
///
/// - [0, 30): 0
/// - [30, 90): rises 0..45
/// - [90, 150): falls 45..0
/// - [150, 180): rises 0..60 (full aspect at opposition)
/// - [180, 300): falls 60..0
/// - [300, 360): 0
pub fn base_virupa(angular_distance: f64) -> f64 {
    let a = normalize_360(angular_distance);
    if a < 30.0 {
        0.0
    } else if a < 90.0 {
        (a - 30.0) * 0.75
    } else if a < 150.0 {
        45.0 - (a - 90.0) * 0.75
    } else if a < 180.0 {
        (a - 150.0) * 2.0
    } else if a < 300.0 {
        60.0 - (a - 180.0) * 0.5
    } else {
        0.0
    }
}

/// Special full-aspect bonus for Mars, Jupiter and Saturn.
pub fn special_virupa(graha: Graha, angular_distance: f64) -> f64 {
    let a = normalize_360(angular_distance);
    match graha {
        Graha::Mangal if (90.0..120.0).contains(&a) || (210.0..240.0).contains(&a) => 15.0,
        Graha::Guru if (120.0..150.0).contains(&a) || (240.0..270.0).contains(&a) => 30.0,
        Graha::Shani if (60.0..90.0).contains(&a) || (270.0..300.0).contains(&a) => 45.0,
        _ => 0.0,
    }
}

/// Drishti from a graha at `source_lon` onto `target_lon`.
pub fn graha_drishti(graha: Graha, source_lon: f64, target_lon: f64) -> DrishtiEntry {
    let angular_distance = normalize_360(target_lon - source_lon);
    let base = base_virupa(angular_distance);
    let special = special_virupa(graha, angular_distance);
    DrishtiEntry {
        angular_distance,
        base_virupa: base,
        special_virupa: special,
        total_virupa: base + special,
    }
}
