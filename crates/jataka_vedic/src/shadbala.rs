//! Shadbala: six-fold planetary strength.
//!
//! Sapta grahas only; the nodes score zero. Components:
//! 1. Sthana (positional): uchcha + saptavargaja + ojhayugma + kendradi +
//!    drekkana
//! 2. Dig (directional)
//! 3. Kala (temporal): nathonnatha + paksha + tribhaga + vara + hora +
//!    ayana + yuddha
//! 4. Cheshta (motional)
//! 5. Naisargika (natural)
//! 6. Drik (aspectual)
//!
//! Each graha's total in virupas (shashtiamsas) is compared against its
//! classical required strength; the percentage classifies into five bands
//! around the 100%/125% reference points.

use serde::Serialize;

use jataka_ephem::OBLIQUITY_J2000_RAD;

use crate::drishti::{base_virupa, special_virupa};
use crate::graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS};
use crate::relationships::{
    BeneficNature, Dignity, GrahaGender, dignity_in_rashi_with_positions, exaltation_degree,
    graha_gender, moon_benefic_nature, natural_benefic_malefic,
};
use crate::util::normalize_360;
use crate::varga::{SAPTA_VARGAS, varga_rashi_index};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Natural strength in virupas, Sun through Saturn.
pub const NAISARGIKA_VIRUPAS: [f64; 7] = [60.0, 51.43, 17.14, 25.71, 34.29, 42.86, 8.57];

/// Bhava of maximum directional strength per graha.
pub const DIG_BALA_BHAVA: [u8; 7] = [10, 4, 10, 1, 1, 4, 7];

/// Maximum daily speed (deg/day) for cheshta normalization.
pub const MAX_SPEED: [f64; 7] = [1.0, 15.0, 0.8, 2.2, 0.25, 1.6, 0.13];

/// Required strength in virupas per graha.
pub const REQUIRED_VIRUPAS: [f64; 7] = [390.0, 360.0, 300.0, 420.0, 390.0, 330.0, 300.0];

fn dignity_virupas(dignity: Dignity) -> f64 {
    match dignity {
        Dignity::Exalted => 30.0,
        Dignity::Moolatrikone => 22.5,
        Dignity::OwnSign => 20.0,
        Dignity::AdhiMitra => 15.0,
        Dignity::Mitra => 10.0,
        Dignity::Sama => 7.5,
        Dignity::Shatru => 5.0,
        Dignity::AdhiShatru => 2.5,
        Dignity::Debilitated => 1.25,
    }
}

// ---------------------------------------------------------------------------
// Inputs and outputs
// ---------------------------------------------------------------------------

/// Everything Shadbala needs, assembled by the chart orchestration.
#[derive(Debug, Clone, Copy)]
pub struct ShadbalaInputs {
    /// Sidereal longitudes of all 9 grahas (drik bala sees the nodes).
    pub sidereal_lons: [f64; 9],
    /// Longitude speeds of the sapta grahas, deg/day.
    pub speeds: [f64; 7],
    /// House numbers (1-12) of the sapta grahas.
    pub bhava_numbers: [u8; 7],
    /// Declinations of the sapta grahas, degrees.
    pub declinations: [f64; 7],
    /// Birth during daytime (Sun above the horizon).
    pub is_daytime: bool,
    /// Fraction elapsed of the day or night portion, [0, 1).
    pub day_fraction: f64,
    /// Lord of the weekday.
    pub weekday_lord: Graha,
    /// Lord of the planetary hour.
    pub hora_lord: Graha,
}

/// Strength classification bands around the required minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthBand {
    VeryWeak,
    Weak,
    Average,
    Strong,
    VeryStrong,
}

/// Band from the percentage of required strength.
pub fn band_from_percentage(percentage: f64) -> StrengthBand {
    if percentage < 50.0 {
        StrengthBand::VeryWeak
    } else if percentage < 75.0 {
        StrengthBand::Weak
    } else if percentage < 100.0 {
        StrengthBand::Average
    } else if percentage <= 125.0 {
        StrengthBand::Strong
    } else {
        StrengthBand::VeryStrong
    }
}

/// Complete six-fold strength of one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadbalaScore {
    pub graha: Graha,
    pub sthana: f64,
    pub dig: f64,
    pub kala: f64,
    pub cheshta: f64,
    pub naisargika: f64,
    pub drik: f64,
    pub total_virupas: f64,
    pub required_virupas: f64,
    pub percentage: f64,
    pub band: StrengthBand,
}

// ---------------------------------------------------------------------------
// Sthana bala
// ---------------------------------------------------------------------------

/// Uchcha bala: 60 at the exaltation point, 0 at debilitation.
pub fn uchcha_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    let exalt = match exaltation_degree(graha) {
        Some(e) => e,
        None => return 0.0,
    };
    let diff = (normalize_360(sidereal_lon) - exalt).abs();
    let dist = if diff > 180.0 { 360.0 - diff } else { diff };
    60.0 * (1.0 - dist / 180.0)
}

/// Rashi indices of the sapta grahas across the seven saptavarga charts.
///
/// `out[varga][graha]`, vargas ordered as [`SAPTA_VARGAS`].
pub fn sapta_varga_rashis(sapta_lons: &[f64; 7]) -> [[u8; 7]; 7] {
    let mut out = [[0u8; 7]; 7];
    for (vi, &varga) in SAPTA_VARGAS.iter().enumerate() {
        for (gi, &lon) in sapta_lons.iter().enumerate() {
            out[vi][gi] = varga_rashi_index(lon, varga);
        }
    }
    out
}

/// Saptavargaja bala: dignity points summed over the seven vargas.
pub fn saptavargaja_bala(graha: Graha, sidereal_lon: f64, varga_rashis: &[[u8; 7]; 7]) -> f64 {
    if !graha.is_sapta() {
        return 0.0;
    }
    let gi = graha.index() as usize;
    let mut total = 0.0;
    for varga_row in varga_rashis {
        let dignity =
            dignity_in_rashi_with_positions(graha, sidereal_lon, varga_row[gi], varga_row);
        total += dignity_virupas(dignity);
    }
    total
}

/// Ojhayugma bala: gendered preference for odd/even rashi and navamsha.
pub fn ojhayugma_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    if !graha.is_sapta() {
        return 0.0;
    }
    let rashi_odd = (normalize_360(sidereal_lon) / 30.0).floor() as u8 % 2 == 0;
    let navamsha_odd = varga_rashi_index(sidereal_lon, crate::varga::Varga::D9) % 2 == 0;

    let wants_odd = !matches!(graha_gender(graha), GrahaGender::Female);
    let mut score = 0.0;
    if rashi_odd == wants_odd {
        score += 15.0;
    }
    if navamsha_odd == wants_odd {
        score += 15.0;
    }
    score
}

/// Kendradi bala: kendra 60, panapara 30, apoklima 15.
pub fn kendradi_bala(bhava_number: u8) -> f64 {
    match bhava_number {
        1 | 4 | 7 | 10 => 60.0,
        2 | 5 | 8 | 11 => 30.0,
        3 | 6 | 9 | 12 => 15.0,
        _ => 0.0,
    }
}

/// Drekkana bala: male 1st decanate, female 2nd, neuter 3rd.
pub fn drekkana_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    if !graha.is_sapta() {
        return 0.0;
    }
    let lon = normalize_360(sidereal_lon);
    let deg_in_rashi = lon - (lon / 30.0).floor() * 30.0;
    let decanate = (deg_in_rashi / 10.0).floor() as u8;
    let matches = match graha_gender(graha) {
        GrahaGender::Male => decanate == 0,
        GrahaGender::Female => decanate == 1,
        GrahaGender::Neuter => decanate == 2,
    };
    if matches { 15.0 } else { 0.0 }
}

fn sthana_bala(graha: Graha, lon: f64, bhava: u8, varga_rashis: &[[u8; 7]; 7]) -> f64 {
    uchcha_bala(graha, lon)
        + saptavargaja_bala(graha, lon, varga_rashis)
        + ojhayugma_bala(graha, lon)
        + kendradi_bala(bhava)
        + drekkana_bala(graha, lon)
}

// ---------------------------------------------------------------------------
// Dig bala
// ---------------------------------------------------------------------------

/// Dig bala: full strength in the graha's own direction, zero opposite.
pub fn dig_bala(graha: Graha, bhava_number: u8) -> f64 {
    if !graha.is_sapta() || bhava_number == 0 || bhava_number > 12 {
        return 0.0;
    }
    let best = DIG_BALA_BHAVA[graha.index() as usize];
    let diff = (bhava_number as i16 - best as i16).unsigned_abs();
    let dist = diff.min(12 - diff).min(6);
    60.0 * (1.0 - dist as f64 / 6.0)
}

// ---------------------------------------------------------------------------
// Kala bala
// ---------------------------------------------------------------------------

fn contextual_nature(graha: Graha, moon_sun_elong: f64) -> BeneficNature {
    if matches!(graha, Graha::Chandra | Graha::Buddh) {
        moon_benefic_nature(moon_sun_elong)
    } else {
        natural_benefic_malefic(graha)
    }
}

/// Nathonnatha bala: malefics strong by day, benefics by night.
pub fn nathonnatha_bala(graha: Graha, is_daytime: bool, moon_sun_elong: f64) -> f64 {
    if !graha.is_sapta() {
        return 0.0;
    }
    match (contextual_nature(graha, moon_sun_elong), is_daytime) {
        (BeneficNature::Malefic, true) | (BeneficNature::Benefic, false) => 60.0,
        _ => 0.0,
    }
}

/// Paksha bala: benefics wax with the Moon, malefics wane.
pub fn paksha_bala(graha: Graha, moon_sun_elong: f64) -> f64 {
    if !graha.is_sapta() {
        return 0.0;
    }
    let elong = normalize_360(moon_sun_elong);
    let phase = if elong <= 180.0 { elong } else { 360.0 - elong };
    let benefic_score = phase / 3.0;

    let nature = if graha == Graha::Chandra {
        BeneficNature::Benefic
    } else {
        contextual_nature(graha, moon_sun_elong)
    };
    match nature {
        BeneficNature::Benefic => benefic_score,
        BeneficNature::Malefic => 60.0 - benefic_score,
    }
}

/// Tribhaga bala: one graha rules each third of the day/night; Sun always 60.
pub fn tribhaga_bala(graha: Graha, is_daytime: bool, fraction: f64) -> f64 {
    if !graha.is_sapta() {
        return 0.0;
    }
    if graha == Graha::Surya {
        return 60.0;
    }
    let third = ((fraction * 3.0).floor() as u8).min(2);
    let strong = if is_daytime {
        [Graha::Guru, Graha::Buddh, Graha::Shani][third as usize]
    } else {
        [Graha::Chandra, Graha::Shukra, Graha::Mangal][third as usize]
    };
    if graha == strong { 60.0 } else { 0.0 }
}

/// Vara bala: 45 for the weekday lord.
pub fn vara_bala(graha: Graha, weekday_lord: Graha) -> f64 {
    if graha.is_sapta() && graha == weekday_lord {
        45.0
    } else {
        0.0
    }
}

/// Hora bala: 60 for the planetary-hour lord.
pub fn hora_bala(graha: Graha, hora_lord: Graha) -> f64 {
    if graha.is_sapta() && graha == hora_lord {
        60.0
    } else {
        0.0
    }
}

/// Ayana bala from declination: benefics favor north, malefics south.
pub fn ayana_bala(graha: Graha, declination_deg: f64, moon_sun_elong: f64) -> f64 {
    if !graha.is_sapta() {
        return 0.0;
    }
    let kranti = declination_deg.clamp(-24.0, 24.0);
    let score = match contextual_nature(graha, moon_sun_elong) {
        BeneficNature::Benefic => (24.0 + kranti) / 48.0 * 60.0,
        BeneficNature::Malefic => (24.0 - kranti) / 48.0 * 60.0,
    };
    score.max(0.0)
}

/// Yuddha bala: planetary war within 1 deg, won by the northern graha.
/// Sun and Moon do not participate.
pub fn yuddha_bala(graha: Graha, sidereal_lons: &[f64; 9], declinations: &[f64; 7]) -> f64 {
    let gi = graha.index() as usize;
    if !graha.is_sapta() || gi < 2 {
        return 0.0;
    }
    let my_lon = normalize_360(sidereal_lons[gi]);
    let mut total = 0.0;
    for oi in 2..7 {
        if oi == gi {
            continue;
        }
        let diff = (my_lon - normalize_360(sidereal_lons[oi])).abs();
        let sep = if diff > 180.0 { 360.0 - diff } else { diff };
        if sep < 1.0 {
            if declinations[gi] > declinations[oi] {
                total += 60.0;
            } else if declinations[gi] < declinations[oi] {
                total -= 60.0;
            }
        }
    }
    total
}

fn kala_bala(graha: Graha, inputs: &ShadbalaInputs, moon_sun_elong: f64) -> f64 {
    let gi = graha.index() as usize;
    nathonnatha_bala(graha, inputs.is_daytime, moon_sun_elong)
        + paksha_bala(graha, moon_sun_elong)
        + tribhaga_bala(graha, inputs.is_daytime, inputs.day_fraction)
        + vara_bala(graha, inputs.weekday_lord)
        + hora_bala(graha, inputs.hora_lord)
        + ayana_bala(graha, inputs.declinations[gi.min(6)], moon_sun_elong)
        + yuddha_bala(graha, &inputs.sidereal_lons, &inputs.declinations)
}

// ---------------------------------------------------------------------------
// Cheshta, naisargika, drik
// ---------------------------------------------------------------------------

/// Cheshta bala: retrograde 60, direct scaled by speed ratio.
/// Sun and Moon have no cheshta bala.
pub fn cheshta_bala(graha: Graha, speed_deg_per_day: f64) -> f64 {
    let gi = graha.index() as usize;
    if !graha.is_sapta() || gi < 2 {
        return 0.0;
    }
    if speed_deg_per_day < 0.0 {
        60.0
    } else {
        (speed_deg_per_day / MAX_SPEED[gi] * 60.0).min(60.0)
    }
}

/// Naisargika bala: fixed natural strengths.
pub fn naisargika_bala(graha: Graha) -> f64 {
    if graha.is_sapta() {
        NAISARGIKA_VIRUPAS[graha.index() as usize]
    } else {
        0.0
    }
}

/// Drik bala: (benefic - malefic incoming virupas) / 4.
pub fn drik_bala(graha: Graha, sidereal_lons: &[f64; 9], moon_sun_elong: f64) -> f64 {
    if !graha.is_sapta() {
        return 0.0;
    }
    let target = sidereal_lons[graha.index() as usize];
    let mut benefic = 0.0;
    let mut malefic = 0.0;
    for src in ALL_GRAHAS {
        if src == graha {
            continue;
        }
        let ang = normalize_360(target - sidereal_lons[src.index() as usize]);
        let total = base_virupa(ang) + special_virupa(src, ang);
        match contextual_nature(src, moon_sun_elong) {
            BeneficNature::Benefic => benefic += total,
            BeneficNature::Malefic => malefic += total,
        }
    }
    (benefic - malefic) / 4.0
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Complete Shadbala for one graha. Nodes yield a zeroed score.
pub fn shadbala(graha: Graha, inputs: &ShadbalaInputs) -> ShadbalaScore {
    if !graha.is_sapta() {
        return zero_score(graha);
    }
    let gi = graha.index() as usize;
    let moon_sun_elong =
        normalize_360(inputs.sidereal_lons[1] - inputs.sidereal_lons[0]);

    let mut sapta_lons = [0.0; 7];
    sapta_lons.copy_from_slice(&inputs.sidereal_lons[..7]);
    let varga_rashis = sapta_varga_rashis(&sapta_lons);

    let sthana = sthana_bala(
        graha,
        inputs.sidereal_lons[gi],
        inputs.bhava_numbers[gi],
        &varga_rashis,
    );
    let dig = dig_bala(graha, inputs.bhava_numbers[gi]);
    let kala = kala_bala(graha, inputs, moon_sun_elong);
    let cheshta = cheshta_bala(graha, inputs.speeds[gi]);
    let naisargika = naisargika_bala(graha);
    let drik = drik_bala(graha, &inputs.sidereal_lons, moon_sun_elong);

    let total = sthana + dig + kala + cheshta + naisargika + drik;
    let required = REQUIRED_VIRUPAS[gi];
    let percentage = total / required * 100.0;

    ShadbalaScore {
        graha,
        sthana,
        dig,
        kala,
        cheshta,
        naisargika,
        drik,
        total_virupas: total,
        required_virupas: required,
        percentage,
        band: band_from_percentage(percentage),
    }
}

/// Shadbala for all seven sapta grahas.
pub fn all_shadbala(inputs: &ShadbalaInputs) -> [ShadbalaScore; 7] {
    let mut out = [zero_score(Graha::Surya); 7];
    for (i, &g) in SAPTA_GRAHAS.iter().enumerate() {
        out[i] = shadbala(g, inputs);
    }
    out
}

fn zero_score(graha: Graha) -> ShadbalaScore {
    ShadbalaScore {
        graha,
        sthana: 0.0,
        dig: 0.0,
        kala: 0.0,
        cheshta: 0.0,
        naisargika: 0.0,
        drik: 0.0,
        total_virupas: 0.0,
        required_virupas: 0.0,
        percentage: 0.0,
        band: StrengthBand::VeryWeak,
    }
}

/// Declination (degrees) of an ecliptic position given tropical longitude
/// and ecliptic latitude.
pub fn declination_deg(tropical_lon_deg: f64, ecl_lat_deg: f64) -> f64 {
    let eps = OBLIQUITY_J2000_RAD;
    let lon = tropical_lon_deg.to_radians();
    let lat = ecl_lat_deg.to_radians();
    (lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin())
        .asin()
        .to_degrees()
}
