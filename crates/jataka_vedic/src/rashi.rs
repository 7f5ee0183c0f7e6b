//! Rashi (zodiac sign) identification and DMS formatting.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees starting from
//! Mesha (Aries) at 0 deg sidereal. Signs carry two classical groupings
//! used elsewhere in the engine: the element (fire/earth/air/water, which
//! seeds several divisional-chart sequences) and the modality
//! (movable/fixed/dual).

use serde::Serialize;

use crate::util::normalize_360;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in zodiacal order (0 = Mesha .. 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Element classification (fire/earth/air/water), cycling with the zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Modality classification: movable (chara), fixed (sthira), dual
/// (dwiswabhava), cycling in threes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Chara,
    Sthira,
    Dwiswabhava,
}

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha = 0 .. Meena = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi from a 0-based index; indices >= 12 wrap around the zodiac.
    pub const fn from_index(index: u8) -> Rashi {
        ALL_RASHIS[(index % 12) as usize]
    }

    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Chara,
            1 => Modality::Sthira,
            _ => Modality::Dwiswabhava,
        }
    }

    /// Odd rashi in the 1-based zodiacal sense (Mesha, Mithuna, ...).
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds, may carry a fractional part.
    pub seconds: f64,
}

/// Position of a longitude within the zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    pub rashi_index: u8,
    /// Decimal degrees within the rashi [0, 30).
    pub degrees_in_rashi: f64,
    pub dms: Dms,
}

/// Convert decimal degrees to DMS (absolute value).
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let rem = (d - degrees as f64) * 60.0;
    let minutes = rem.floor() as u8;
    let seconds = (rem - minutes as f64) * 60.0;
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Identify the rashi holding a sidereal longitude.
///
/// The input is reduced modulo 360 first, never rejected.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / 30.0).floor() as u8).min(11);
    let degrees_in_rashi = lon - idx as f64 * 30.0;
    RashiInfo {
        rashi: ALL_RASHIS[idx as usize],
        rashi_index: idx,
        degrees_in_rashi,
        dms: deg_to_dms(degrees_in_rashi),
    }
}
