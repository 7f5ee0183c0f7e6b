//! Varga (divisional chart) transforms, Shodashavarga set.
//!
//! Each varga Dn splits the 30-degree rashi into n equal parts; the part
//! index selects a target rashi from the classical sequence rules
//! (identity, hora cycle, drekkana trines, element-seeded starts, odd/even
//! increments). The rules are immutable data resolved by a single
//! dispatch, and the transform is a pure function of (longitude, varga) —
//! calling it twice can never disagree.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::rashi::{Element, Rashi};
use crate::util::normalize_360;

/// The 16 Shodashavarga divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Varga {
    D1,
    D2,
    D3,
    D4,
    D7,
    D9,
    D10,
    D12,
    D16,
    D20,
    D24,
    D27,
    D30,
    D40,
    D45,
    D60,
}

/// All 16 vargas in ascending division order.
pub const ALL_VARGAS: [Varga; 16] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D4,
    Varga::D7,
    Varga::D9,
    Varga::D10,
    Varga::D12,
    Varga::D16,
    Varga::D20,
    Varga::D24,
    Varga::D27,
    Varga::D30,
    Varga::D40,
    Varga::D45,
    Varga::D60,
];

/// The seven vargas feeding saptavargaja bala.
pub const SAPTA_VARGAS: [Varga; 7] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D7,
    Varga::D9,
    Varga::D12,
    Varga::D30,
];

impl Varga {
    /// Number of divisions per rashi.
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D16 => 16,
            Self::D20 => 20,
            Self::D24 => 24,
            Self::D27 => 27,
            Self::D30 => 30,
            Self::D40 => 40,
            Self::D45 => 45,
            Self::D60 => 60,
        }
    }

    /// Classical name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D4 => "Chaturthamsha",
            Self::D7 => "Saptamsha",
            Self::D9 => "Navamsha",
            Self::D10 => "Dashamsha",
            Self::D12 => "Dwadashamsha",
            Self::D16 => "Shodashamsha",
            Self::D20 => "Vimshamsha",
            Self::D24 => "Chaturvimshamsha",
            Self::D27 => "Bhamsha",
            Self::D30 => "Trimshamsha",
            Self::D40 => "Khavedamsha",
            Self::D45 => "Akshavedamsha",
            Self::D60 => "Shashtiamsha",
        }
    }

    /// Reverse lookup from the division count.
    pub fn from_code(code: u16) -> Option<Varga> {
        ALL_VARGAS.iter().copied().find(|v| v.divisions() == code)
    }
}

/// Target rashi index for one division of one natal rashi.
fn target_rashi(varga: Varga, natal_rashi_idx: u8, div_idx: u16) -> u8 {
    let natal = Rashi::from_index(natal_rashi_idx);
    match varga {
        Varga::D1 => natal_rashi_idx,

        // Hora: zodiac cycling from the doubled rashi index.
        Varga::D2 => cycle(natal_rashi_idx as u16 * 2, div_idx),

        // Drekkana: trine progression.
        Varga::D3 => cycle(natal_rashi_idx as u16, div_idx * 4),

        // Odd rashi counts from itself, even rashi from an offset.
        Varga::D7 => increment(natal, div_idx, 6),
        Varga::D10 => increment(natal, div_idx, 8),
        Varga::D24 => increment(natal, div_idx, 4),
        Varga::D40 => increment(natal, div_idx, 6),

        // Element-seeded starts.
        Varga::D9 | Varga::D60 => {
            let start = match natal.element() {
                Element::Fire => 0,
                Element::Earth => 9,
                Element::Air => 6,
                Element::Water => 3,
            };
            cycle(start, div_idx)
        }
        Varga::D16 => {
            let start = match natal.element() {
                Element::Fire | Element::Water => 0,
                Element::Earth => 4,
                Element::Air => 8,
            };
            cycle(start, div_idx)
        }
        Varga::D20 => {
            let start = match natal.element() {
                Element::Fire | Element::Water => 0,
                Element::Earth => 8,
                Element::Air => 4,
            };
            cycle(start, div_idx)
        }

        // Trimshamsha: odd rashi from Mesha, even from Meena.
        Varga::D30 => {
            let start = if natal.is_odd() { 0 } else { 11 };
            cycle(start, div_idx)
        }

        // Plain progression from the natal rashi.
        Varga::D4 | Varga::D12 | Varga::D27 | Varga::D45 => {
            cycle(natal_rashi_idx as u16, div_idx)
        }
    }
}

fn cycle(start: u16, step: u16) -> u8 {
    ((start + step) % 12) as u8
}

fn increment(natal: Rashi, div_idx: u16, even_offset: u16) -> u8 {
    let start = if natal.is_odd() {
        natal.index() as u16
    } else {
        (natal.index() as u16 + even_offset) % 12
    };
    cycle(start, div_idx)
}

/// Transform a sidereal longitude into its varga longitude, [0, 360).
pub fn varga_longitude(sidereal_lon: f64, varga: Varga) -> f64 {
    let lon = normalize_360(sidereal_lon);
    if varga == Varga::D1 {
        return lon;
    }

    let rashi_idx = ((lon / 30.0).floor() as u8).min(11);
    let pos_in_rashi = lon - rashi_idx as f64 * 30.0;
    let n = varga.divisions();
    let deg_per_div = 30.0 / n as f64;

    let div_idx = ((pos_in_rashi / deg_per_div).floor() as u16).min(n - 1);
    let target = target_rashi(varga, rashi_idx, div_idx);

    // Stretch the division span back onto a full sign.
    let pos_in_div = pos_in_rashi - div_idx as f64 * deg_per_div;
    let scaled = pos_in_div / deg_per_div * 30.0;

    normalize_360(target as f64 * 30.0 + scaled)
}

/// Varga rashi index of a sidereal longitude.
pub fn varga_rashi_index(sidereal_lon: f64, varga: Varga) -> u8 {
    ((varga_longitude(sidereal_lon, varga) / 30.0).floor() as u8).min(11)
}

/// A graha placed in a divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VargaPosition {
    pub graha: Graha,
    /// Rashi index within the division, [0, 11].
    pub rashi_index: u8,
    /// Whole-sign house from the varga lagna, [1, 12].
    pub house: u8,
}

/// A complete divisional chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VargaChart {
    pub varga: Varga,
    /// Division count, for the wire contract.
    pub division: u16,
    /// Varga rashi of the natal lagna.
    pub lagna_rashi_index: u8,
    pub positions: Vec<VargaPosition>,
}

/// Build a divisional chart from natal sidereal longitudes.
///
/// The varga lagna is the natal lagna pushed through the same transform;
/// houses are whole-sign from it.
pub fn varga_chart(
    natal_positions: &[(Graha, f64)],
    natal_lagna_lon: f64,
    varga: Varga,
) -> VargaChart {
    let lagna_rashi = varga_rashi_index(natal_lagna_lon, varga);
    let positions = natal_positions
        .iter()
        .map(|&(graha, lon)| {
            let rashi = varga_rashi_index(lon, varga);
            VargaPosition {
                graha,
                rashi_index: rashi,
                house: ((rashi + 12 - lagna_rashi) % 12) + 1,
            }
        })
        .collect();

    VargaChart {
        varga,
        division: varga.divisions(),
        lagna_rashi_index: lagna_rashi,
        positions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d1_is_identity() {
        for i in 0..12 {
            let lon = i as f64 * 30.0 + 17.3;
            assert!((varga_longitude(lon, Varga::D1) - lon).abs() < 1e-12);
        }
    }

    #[test]
    fn navamsha_fire_rashi() {
        // Mesha 5.0: fire seeds Mesha; division 1 -> Vrishabha 15.
        let lon = varga_longitude(5.0, Varga::D9);
        assert!((lon - 45.0).abs() < 1e-9, "got {lon}");
    }

    #[test]
    fn navamsha_earth_rashi() {
        // Vrishabha 15.5: earth seeds Makara; division 4 -> Vrishabha 19.5.
        let lon = varga_longitude(45.5, Varga::D9);
        assert!((lon - 49.5).abs() < 1e-9, "got {lon}");
    }

    #[test]
    fn navamsha_air_and_water() {
        // Mithuna 0: air seeds Tula -> 180. Karka 0: water seeds Karka -> 90.
        assert!((varga_longitude(60.0, Varga::D9) - 180.0).abs() < 1e-9);
        assert!((varga_longitude(90.0, Varga::D9) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn hora_cycles_from_doubled_sign() {
        // Vrishabha 15.5: start (1*2)=2, division 1 -> Karka 1.0 = 91.0.
        let lon = varga_longitude(45.5, Varga::D2);
        assert!((lon - 91.0).abs() < 1e-9, "got {lon}");
    }

    #[test]
    fn drekkana_trines() {
        // Vrishabha 15.5: division 1 -> (1 + 4) = Kanya, 16.5 within -> 166.5.
        let lon = varga_longitude(45.5, Varga::D3);
        assert!((lon - 166.5).abs() < 1e-9, "got {lon}");
    }

    #[test]
    fn trimshamsha_odd_even() {
        // Mesha 1.5 (odd): division 1 from Mesha -> Vrishabha 15 -> 45.
        assert!((varga_longitude(1.5, Varga::D30) - 45.0).abs() < 1e-9);
        // Vrishabha 1.5 (even): division 1 from Meena -> Mesha 15 -> 15.
        assert!((varga_longitude(31.5, Varga::D30) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn saptamsha_even_offset() {
        // Vrishabha (even) division 0 starts 6 signs on: Vrischika.
        assert_eq!(varga_rashi_index(30.0, Varga::D7), 7);
        // Mesha (odd) division 0 starts at itself.
        assert_eq!(varga_rashi_index(0.0, Varga::D7), 0);
    }

    #[test]
    fn all_vargas_stay_in_range() {
        for &varga in &ALL_VARGAS {
            let mut lon = 0.0;
            while lon < 360.0 {
                let v = varga_longitude(lon, varga);
                assert!((0.0..360.0).contains(&v), "{varga:?} at {lon}: {v}");
                lon += 0.83;
            }
        }
    }

    #[test]
    fn deterministic() {
        for &varga in &ALL_VARGAS {
            for &lon in &[0.0, 29.999, 123.456, 359.999] {
                let a = varga_longitude(lon, varga);
                let b = varga_longitude(lon, varga);
                assert!(a.to_bits() == b.to_bits(), "{varga:?} at {lon}");
            }
        }
    }

    #[test]
    fn boundary_360_and_negative() {
        for &varga in &[Varga::D9, Varga::D60] {
            let at_zero = varga_longitude(0.0, varga);
            assert!((varga_longitude(360.0, varga) - at_zero).abs() < 1e-9);
            let v = varga_longitude(-10.0, varga);
            assert!((0.0..360.0).contains(&v));
        }
    }

    #[test]
    fn from_code_round_trip() {
        for &varga in &ALL_VARGAS {
            assert_eq!(Varga::from_code(varga.divisions()), Some(varga));
        }
        assert_eq!(Varga::from_code(5), None);
        assert_eq!(Varga::from_code(0), None);
    }

    #[test]
    fn chart_houses_relative_to_varga_lagna() {
        let positions = [(Graha::Surya, 5.0), (Graha::Chandra, 95.0)];
        let chart = varga_chart(&positions, 5.0, Varga::D9);
        // Lagna Mesha 5.0 -> navamsha Vrishabha (1).
        assert_eq!(chart.lagna_rashi_index, 1);
        // Sun shares the lagna longitude -> house 1.
        assert_eq!(chart.positions[0].house, 1);
        for p in &chart.positions {
            assert!((1..=12).contains(&p.house));
        }
    }

    #[test]
    fn d1_chart_mirrors_natal_whole_sign() {
        let positions = [(Graha::Mangal, 200.0), (Graha::Shani, 310.0)];
        let chart = varga_chart(&positions, 185.0, Varga::D1);
        assert_eq!(chart.lagna_rashi_index, 6);
        assert_eq!(chart.positions[0].house, 1); // Mars in Tula
        assert_eq!(chart.positions[1].house, 5); // Saturn in Kumbha
    }
}
