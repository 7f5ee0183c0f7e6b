//! The eight koota scores and their aggregation.
//!
//! `match_kuta(groom, bride)` is pure and table-driven. Argument order
//! matters wherever the classical tables are asymmetric (Varna hierarchy,
//! Vashya and Gana matrices, Tara direction weighting); the first argument
//! is always the groom's Moon signature.

use serde::Serialize;

use jataka_vedic::{Graha, naisargika_maitri, rashi_lord_by_index};
use jataka_vedic::relationships::NaisargikaMaitri;

use crate::tables::{
    NAKSHATRA_YONI, gana_of_nakshatra, gana_points, nadi_of_nakshatra, varna_of_rashi,
    vashya_of_rashi, vashya_points, yoni_points,
};

/// Moon-based signature of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoonSignature {
    /// Moon's rashi index [0, 11].
    pub rashi_index: u8,
    /// Moon's nakshatra index [0, 26].
    pub nakshatra_index: u8,
    /// Moon's pada [1, 4].
    pub pada: u8,
}

impl MoonSignature {
    pub fn new(rashi_index: u8, nakshatra_index: u8, pada: u8) -> Self {
        Self {
            rashi_index: rashi_index % 12,
            nakshatra_index: nakshatra_index % 27,
            pada: pada.clamp(1, 4),
        }
    }
}

/// One koota's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KootaScore {
    pub name: &'static str,
    pub points: f64,
    pub max_points: f64,
}

/// Overall compatibility tier. Fixed cut points on the 36-point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Compatibility {
    Excellent,
    Good,
    Moderate,
    Poor,
}

/// Minimum totals for the tiers.
pub const EXCELLENT_MIN: f64 = 28.0;
pub const GOOD_MIN: f64 = 18.0;
pub const MODERATE_MIN: f64 = 12.0;

/// Complete Ashtakoot result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AshtakootResult {
    pub kootas: [KootaScore; 8],
    /// Sum of the eight koota points, in [0, 36].
    pub total: f64,
    pub percentage: f64,
    pub compatibility: Compatibility,
    /// True exactly when the Nadi koota scored zero.
    pub nadi_veto: bool,
    pub recommendation: &'static str,
}

/// Varna (max 1): the groom's caste tier must not be below the bride's.
pub fn varna_kuta(groom: &MoonSignature, bride: &MoonSignature) -> f64 {
    if varna_of_rashi(groom.rashi_index) >= varna_of_rashi(bride.rashi_index) {
        1.0
    } else {
        0.0
    }
}

/// Vashya (max 2): dominance-group matrix.
pub fn vashya_kuta(groom: &MoonSignature, bride: &MoonSignature) -> f64 {
    vashya_points(
        vashya_of_rashi(groom.rashi_index),
        vashya_of_rashi(bride.rashi_index),
    )
}

/// Inclusive nakshatra count from `from` to `to`, 1-27.
fn nakshatra_count(from: u8, to: u8) -> u8 {
    ((to + 27 - from) % 27) + 1
}

/// Tara (max 3): the inauspicious taras counted in either direction are
/// Vipat (3), Pratyari (5) and Naidhana (7); each clean direction earns
/// 1.5 points.
pub fn tara_kuta(groom: &MoonSignature, bride: &MoonSignature) -> f64 {
    let mut points = 0.0;
    for (from, to) in [
        (bride.nakshatra_index, groom.nakshatra_index),
        (groom.nakshatra_index, bride.nakshatra_index),
    ] {
        let tara = nakshatra_count(from, to) % 9;
        if !matches!(tara, 3 | 5 | 7) {
            points += 1.5;
        }
    }
    points
}

/// Yoni (max 4): animal-symbol compatibility (symmetric matrix).
pub fn yoni_kuta(groom: &MoonSignature, bride: &MoonSignature) -> f64 {
    yoni_points(
        NAKSHATRA_YONI[groom.nakshatra_index as usize % 27],
        NAKSHATRA_YONI[bride.nakshatra_index as usize % 27],
    )
}

/// Graha Maitri (max 5): mutual natural friendship of the Moon-sign lords.
pub fn graha_maitri_kuta(groom: &MoonSignature, bride: &MoonSignature) -> f64 {
    let lord_a = rashi_lord_by_index(groom.rashi_index).unwrap_or(Graha::Surya);
    let lord_b = rashi_lord_by_index(bride.rashi_index).unwrap_or(Graha::Surya);
    if lord_a == lord_b {
        return 5.0;
    }
    use NaisargikaMaitri::*;
    let ab = naisargika_maitri(lord_a, lord_b);
    let ba = naisargika_maitri(lord_b, lord_a);
    match (ab, ba) {
        (Friend, Friend) => 5.0,
        (Friend, Neutral) | (Neutral, Friend) => 4.0,
        (Neutral, Neutral) => 3.0,
        (Friend, Enemy) | (Enemy, Friend) => 1.0,
        (Neutral, Enemy) | (Enemy, Neutral) => 0.5,
        (Enemy, Enemy) => 0.0,
    }
}

/// Gana (max 6): temperament-category matrix.
pub fn gana_kuta(groom: &MoonSignature, bride: &MoonSignature) -> f64 {
    gana_points(
        gana_of_nakshatra(groom.nakshatra_index),
        gana_of_nakshatra(bride.nakshatra_index),
    )
}

/// Inclusive rashi count from `from` to `to`, 1-12.
fn rashi_count(from: u8, to: u8) -> u8 {
    ((to + 12 - from) % 12) + 1
}

/// Bhakoot (max 7): the strict rule — a 6/8 sign distance in either
/// direction forfeits all points. (The classical cancellation exceptions
/// are deliberately not part of this baseline.)
pub fn bhakoot_kuta(groom: &MoonSignature, bride: &MoonSignature) -> f64 {
    let forward = rashi_count(groom.rashi_index, bride.rashi_index);
    if forward == 6 || forward == 8 { 0.0 } else { 7.0 }
}

/// Nadi (max 8): identical nadi group scores zero — the veto case.
pub fn nadi_kuta(groom: &MoonSignature, bride: &MoonSignature) -> f64 {
    if nadi_of_nakshatra(groom.nakshatra_index) == nadi_of_nakshatra(bride.nakshatra_index) {
        0.0
    } else {
        8.0
    }
}

fn compatibility_for(total: f64) -> Compatibility {
    if total >= EXCELLENT_MIN {
        Compatibility::Excellent
    } else if total >= GOOD_MIN {
        Compatibility::Good
    } else if total >= MODERATE_MIN {
        Compatibility::Moderate
    } else {
        Compatibility::Poor
    }
}

fn recommendation_for(compatibility: Compatibility, nadi_veto: bool) -> &'static str {
    if nadi_veto {
        return "Nadi dosha present: identical nadi overrides the numeric total \
                and calls for expert review before proceeding.";
    }
    match compatibility {
        Compatibility::Excellent => "Excellent match across the eight kootas.",
        Compatibility::Good => "Good match; the combination is favorable.",
        Compatibility::Moderate => "Moderate match; acceptable with strengths elsewhere.",
        Compatibility::Poor => "Poor match by koota scoring; traditionally not recommended.",
    }
}

/// Score the eight kootas for a (groom, bride) pair of Moon signatures.
pub fn match_kuta(groom: &MoonSignature, bride: &MoonSignature) -> AshtakootResult {
    let kootas = [
        KootaScore {
            name: "Varna",
            points: varna_kuta(groom, bride),
            max_points: 1.0,
        },
        KootaScore {
            name: "Vashya",
            points: vashya_kuta(groom, bride),
            max_points: 2.0,
        },
        KootaScore {
            name: "Tara",
            points: tara_kuta(groom, bride),
            max_points: 3.0,
        },
        KootaScore {
            name: "Yoni",
            points: yoni_kuta(groom, bride),
            max_points: 4.0,
        },
        KootaScore {
            name: "Graha Maitri",
            points: graha_maitri_kuta(groom, bride),
            max_points: 5.0,
        },
        KootaScore {
            name: "Gana",
            points: gana_kuta(groom, bride),
            max_points: 6.0,
        },
        KootaScore {
            name: "Bhakoot",
            points: bhakoot_kuta(groom, bride),
            max_points: 7.0,
        },
        KootaScore {
            name: "Nadi",
            points: nadi_kuta(groom, bride),
            max_points: 8.0,
        },
    ];

    let total: f64 = kootas.iter().map(|k| k.points).sum();
    let nadi_veto = kootas[7].points == 0.0;
    let compatibility = compatibility_for(total);

    AshtakootResult {
        kootas,
        total,
        percentage: total / 36.0 * 100.0,
        compatibility,
        nadi_veto,
        recommendation: recommendation_for(compatibility, nadi_veto),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(rashi: u8, nakshatra: u8) -> MoonSignature {
        MoonSignature::new(rashi, nakshatra, 1)
    }

    #[test]
    fn points_never_exceed_maxima() {
        for gr in 0..12u8 {
            for bn in 0..27u8 {
                let groom = sig(gr, (gr as u16 * 2 + bn as u16) as u8 % 27);
                let bride = sig((gr + bn) % 12, bn);
                let result = match_kuta(&groom, &bride);
                for k in &result.kootas {
                    assert!(
                        k.points >= 0.0 && k.points <= k.max_points,
                        "{}: {} / {}",
                        k.name,
                        k.points,
                        k.max_points
                    );
                }
                let sum: f64 = result.kootas.iter().map(|k| k.points).sum();
                assert!((result.total - sum).abs() < 1e-12);
                assert!((0.0..=36.0).contains(&result.total));
            }
        }
    }

    #[test]
    fn maxima_are_one_through_eight() {
        let r = match_kuta(&sig(0, 0), &sig(1, 1));
        let maxima: Vec<f64> = r.kootas.iter().map(|k| k.max_points).collect();
        assert_eq!(maxima, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn varna_hierarchy_one_way() {
        // Groom Karka (Brahmin), bride Mesha (Kshatriya): 1.
        assert_eq!(varna_kuta(&sig(3, 0), &sig(0, 0)), 1.0);
        // Reversed: groom below bride: 0.
        assert_eq!(varna_kuta(&sig(0, 0), &sig(3, 0)), 0.0);
    }

    #[test]
    fn tara_same_nakshatra_full() {
        // Count 1 both ways -> tara 1 (Janma), favorable.
        assert_eq!(tara_kuta(&sig(0, 4), &sig(0, 4)), 3.0);
    }

    #[test]
    fn tara_vipat_direction() {
        // Bride Ashwini (0), groom Krittika (2): count 3 -> Vipat one way;
        // reverse count 26 % 9 = 8, favorable. One direction scores.
        assert_eq!(tara_kuta(&sig(0, 2), &sig(0, 0)), 1.5);
    }

    #[test]
    fn yoni_same_animal_full() {
        // Rohini and Mrigashira are both Sarpa.
        assert_eq!(yoni_kuta(&sig(1, 3), &sig(1, 4)), 4.0);
    }

    #[test]
    fn yoni_enemy_zero() {
        // Ashwini (Ashwa) vs Hasta (Mahisha).
        assert_eq!(yoni_kuta(&sig(0, 0), &sig(5, 12)), 0.0);
    }

    #[test]
    fn graha_maitri_same_lord() {
        // Mesha and Vrischika share Mangal.
        assert_eq!(graha_maitri_kuta(&sig(0, 0), &sig(7, 16)), 5.0);
    }

    #[test]
    fn graha_maitri_mutual_enemies() {
        // Simha (Surya) vs Makara (Shani): mutual enemies.
        assert_eq!(graha_maitri_kuta(&sig(4, 9), &sig(9, 21)), 0.0);
    }

    #[test]
    fn graha_maitri_asymmetric_pair() {
        // Karka (Chandra) vs Mithuna (Buddh): Moon befriends Mercury,
        // Mercury counts the Moon an enemy -> 1.0.
        assert_eq!(graha_maitri_kuta(&sig(3, 7), &sig(2, 5)), 1.0);
    }

    #[test]
    fn gana_matrix_directional() {
        // Groom Deva (Ashwini), bride Rakshasa (Krittika): 1.
        assert_eq!(gana_kuta(&sig(0, 0), &sig(1, 2)), 1.0);
        // Groom Manushya (Bharani), bride Rakshasa: 0.
        assert_eq!(gana_kuta(&sig(0, 1), &sig(1, 2)), 0.0);
    }

    #[test]
    fn bhakoot_six_eight_zero_both_directions() {
        // Mesha -> Kanya is the 6th; Kanya -> Mesha is the 8th.
        assert_eq!(bhakoot_kuta(&sig(0, 0), &sig(5, 13)), 0.0);
        assert_eq!(bhakoot_kuta(&sig(5, 13), &sig(0, 0)), 0.0);
        // Mesha -> Simha (5th) passes.
        assert_eq!(bhakoot_kuta(&sig(0, 0), &sig(4, 10)), 7.0);
    }

    #[test]
    fn nadi_same_group_vetoes() {
        // Ashwini and Ardra are both Adi nadi.
        let r = match_kuta(&sig(0, 0), &sig(2, 5));
        assert_eq!(r.kootas[7].points, 0.0);
        assert!(r.nadi_veto);
        // Different groups: full points, no veto.
        let r = match_kuta(&sig(0, 0), &sig(1, 1));
        assert_eq!(r.kootas[7].points, 8.0);
        assert!(!r.nadi_veto);
    }

    #[test]
    fn nadi_veto_iff_zero_nadi_points() {
        for gn in 0..27u8 {
            for bn in 0..27u8 {
                let r = match_kuta(&sig(gn % 12, gn), &sig(bn % 12, bn));
                assert_eq!(r.nadi_veto, r.kootas[7].points == 0.0, "{gn}/{bn}");
            }
        }
    }

    #[test]
    fn identical_signatures_veto_despite_high_total() {
        // Same Moon scores every koota but Nadi; the veto is still
        // surfaced, never folded into the total.
        let r = match_kuta(&sig(1, 3), &sig(1, 3));
        assert!((r.total - 28.0).abs() < 1e-12);
        assert!(r.nadi_veto);
        assert_eq!(r.compatibility, Compatibility::Excellent);
        assert!(r.recommendation.contains("Nadi dosha"));
    }

    #[test]
    fn compatibility_thresholds() {
        assert_eq!(compatibility_for(36.0), Compatibility::Excellent);
        assert_eq!(compatibility_for(28.0), Compatibility::Excellent);
        assert_eq!(compatibility_for(27.9), Compatibility::Good);
        assert_eq!(compatibility_for(18.0), Compatibility::Good);
        assert_eq!(compatibility_for(17.9), Compatibility::Moderate);
        assert_eq!(compatibility_for(12.0), Compatibility::Moderate);
        assert_eq!(compatibility_for(11.9), Compatibility::Poor);
    }

    #[test]
    fn percentage_consistent() {
        let r = match_kuta(&sig(0, 0), &sig(1, 1));
        assert!((r.percentage - r.total / 36.0 * 100.0).abs() < 1e-12);
    }

    #[test]
    fn veto_overrides_recommendation() {
        let r = match_kuta(&sig(1, 3), &sig(1, 3));
        assert!(r.recommendation.contains("Nadi dosha"));
    }
}
