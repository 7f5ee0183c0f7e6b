//! Tagged-variant predicates and their single evaluation dispatch.
//!
//! Every catalog entry is a conjunction of these predicates over chart
//! facts. Strength comes from exactness: aspect/conjunction predicates use
//! the orb, placement predicates the distance from the occupied sign's
//! middle. Structural predicates (node hemming, lone Moon) are binary and
//! carry no tier of their own.

use jataka_vedic::{Dignity, Graha, GrahaPosition, SAPTA_GRAHAS, angular_separation, arc_forward};

use crate::error::RuleCatalogError;
use crate::types::StrengthTier;

/// Facts derived from a normalized chart, precomputed once per evaluation.
#[derive(Debug, Clone)]
pub struct ChartFacts {
    /// Sidereal longitudes of the 9 grahas.
    pub lons: [f64; 9],
    /// Rashi index of each graha.
    pub rashi_indices: [u8; 9],
    /// Whole-sign house of each graha, counted from the lagna's sign.
    pub whole_sign_bhavas: [u8; 9],
    /// Dignity of each graha in its natal rashi.
    pub dignities: [Dignity; 9],
    /// Rashi index of the lagna.
    pub lagna_rashi_index: u8,
}

impl ChartFacts {
    /// Build facts from normalized positions and the lagna sign.
    pub fn from_positions(positions: &[GrahaPosition; 9], lagna_rashi_index: u8) -> Self {
        let mut lons = [0.0; 9];
        let mut rashi_indices = [0u8; 9];
        let mut whole_sign_bhavas = [0u8; 9];
        let mut dignities = [Dignity::Sama; 9];
        for (i, p) in positions.iter().enumerate() {
            lons[i] = p.longitude;
            rashi_indices[i] = p.rashi_index;
            whole_sign_bhavas[i] = ((p.rashi_index + 12 - lagna_rashi_index) % 12) + 1;
            dignities[i] = jataka_vedic::dignity_in_rashi(p.graha, p.longitude, p.rashi_index);
        }
        Self {
            lons,
            rashi_indices,
            whole_sign_bhavas,
            dignities,
            lagna_rashi_index,
        }
    }
}

/// Declarative predicate over chart facts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Predicate {
    /// Graha occupies one of the listed rashis.
    InRashi {
        graha: Graha,
        rashis: &'static [u8],
    },
    /// Graha occupies one of the listed whole-sign houses from the lagna.
    InBhava {
        graha: Graha,
        bhavas: &'static [u8],
    },
    /// Two grahas within an orb of conjunction.
    Conjunct { a: Graha, b: Graha, orb_deg: f64 },
    /// Angular separation near a specific aspect angle.
    Aspect {
        a: Graha,
        b: Graha,
        angle_deg: f64,
        orb_deg: f64,
    },
    /// Graha holds one of the listed dignities.
    InDignity {
        graha: Graha,
        dignities: &'static [Dignity],
    },
    /// Graha stands in a kendra (1/4/7/10) counted from another graha.
    KendraFrom { graha: Graha, from: Graha },
    /// All seven classical grahas on one side of the Rahu-Ketu axis.
    AllHemmedByNodes,
    /// No classical graha except the Sun adjacent to the Moon
    /// (2nd or 12th rashi from it).
    LoneMoon,
}

/// Outcome of one satisfied predicate.
#[derive(Debug, Clone)]
pub struct PredicateHit {
    /// Exactness tier; None for binary structural predicates.
    pub tier: Option<StrengthTier>,
    /// Grahas this predicate involved.
    pub grahas: Vec<Graha>,
    /// Whole-sign houses this predicate involved.
    pub bhavas: Vec<u8>,
}

/// Tier from an orb deviation: <= 1 deg strong, <= 3 deg moderate.
fn orb_tier(deviation_deg: f64) -> StrengthTier {
    if deviation_deg <= 1.0 {
        StrengthTier::Strong
    } else if deviation_deg <= 3.0 {
        StrengthTier::Moderate
    } else {
        StrengthTier::Weak
    }
}

/// Tier from distance to the middle of the occupied sign: <= 5 deg strong,
/// <= 10 deg moderate.
fn placement_tier(lon: f64, rashi_index: u8) -> StrengthTier {
    let deg_in_rashi = jataka_vedic::normalize_360(lon) - rashi_index as f64 * 30.0;
    let off_center = (deg_in_rashi - 15.0).abs();
    if off_center <= 5.0 {
        StrengthTier::Strong
    } else if off_center <= 10.0 {
        StrengthTier::Moderate
    } else {
        StrengthTier::Weak
    }
}

/// Check a predicate's declared parameters.
///
/// Run for the whole catalog at startup; re-checked defensively during
/// evaluation so one bad entry can be skipped without aborting the pass.
pub fn validate_predicate(pred: &Predicate, rule: &'static str) -> Result<(), RuleCatalogError> {
    let fail = |reason| Err(RuleCatalogError { rule, reason });
    match pred {
        Predicate::InRashi { rashis, .. } => {
            if rashis.is_empty() {
                return fail("empty rashi list");
            }
            if rashis.iter().any(|&r| r > 11) {
                return fail("rashi index out of range");
            }
        }
        Predicate::InBhava { bhavas, .. } => {
            if bhavas.is_empty() {
                return fail("empty bhava list");
            }
            if bhavas.iter().any(|&b| b < 1 || b > 12) {
                return fail("bhava number out of range");
            }
        }
        Predicate::Conjunct { a, b, orb_deg } => {
            if a == b {
                return fail("conjunction of a graha with itself");
            }
            if !(*orb_deg > 0.0 && *orb_deg < 180.0) {
                return fail("conjunction orb out of range");
            }
        }
        Predicate::Aspect {
            a,
            b,
            angle_deg,
            orb_deg,
        } => {
            if a == b {
                return fail("aspect of a graha with itself");
            }
            if !(*angle_deg > 0.0 && *angle_deg <= 180.0) {
                return fail("aspect angle out of range");
            }
            if !(*orb_deg > 0.0 && *orb_deg < 30.0) {
                return fail("aspect orb out of range");
            }
        }
        Predicate::InDignity { dignities, .. } => {
            if dignities.is_empty() {
                return fail("empty dignity list");
            }
        }
        Predicate::KendraFrom { graha, from } => {
            if graha == from {
                return fail("kendra of a graha from itself");
            }
        }
        Predicate::AllHemmedByNodes | Predicate::LoneMoon => {}
    }
    Ok(())
}

/// Evaluate one predicate. Returns `None` when it does not hold.
pub fn eval_predicate(
    pred: &Predicate,
    facts: &ChartFacts,
    rule: &'static str,
) -> Result<Option<PredicateHit>, RuleCatalogError> {
    validate_predicate(pred, rule)?;

    let hit = match *pred {
        Predicate::InRashi { graha, rashis } => {
            let gi = graha.index() as usize;
            rashis.contains(&facts.rashi_indices[gi]).then(|| PredicateHit {
                tier: Some(placement_tier(facts.lons[gi], facts.rashi_indices[gi])),
                grahas: vec![graha],
                bhavas: vec![facts.whole_sign_bhavas[gi]],
            })
        }
        Predicate::InBhava { graha, bhavas } => {
            let gi = graha.index() as usize;
            bhavas
                .contains(&facts.whole_sign_bhavas[gi])
                .then(|| PredicateHit {
                    tier: Some(placement_tier(facts.lons[gi], facts.rashi_indices[gi])),
                    grahas: vec![graha],
                    bhavas: vec![facts.whole_sign_bhavas[gi]],
                })
        }
        Predicate::Conjunct { a, b, orb_deg } => {
            let (ai, bi) = (a.index() as usize, b.index() as usize);
            let sep = angular_separation(facts.lons[ai], facts.lons[bi]);
            (sep <= orb_deg).then(|| PredicateHit {
                tier: Some(orb_tier(sep)),
                grahas: vec![a, b],
                bhavas: vec![facts.whole_sign_bhavas[ai]],
            })
        }
        Predicate::Aspect {
            a,
            b,
            angle_deg,
            orb_deg,
        } => {
            let (ai, bi) = (a.index() as usize, b.index() as usize);
            let sep = angular_separation(facts.lons[ai], facts.lons[bi]);
            let deviation = (sep - angle_deg).abs();
            (deviation <= orb_deg).then(|| PredicateHit {
                tier: Some(orb_tier(deviation)),
                grahas: vec![a, b],
                bhavas: vec![
                    facts.whole_sign_bhavas[ai],
                    facts.whole_sign_bhavas[bi],
                ],
            })
        }
        Predicate::InDignity { graha, dignities } => {
            let gi = graha.index() as usize;
            dignities
                .contains(&facts.dignities[gi])
                .then(|| PredicateHit {
                    tier: Some(placement_tier(facts.lons[gi], facts.rashi_indices[gi])),
                    grahas: vec![graha],
                    bhavas: vec![facts.whole_sign_bhavas[gi]],
                })
        }
        Predicate::KendraFrom { graha, from } => {
            let (gi, fi) = (graha.index() as usize, from.index() as usize);
            let dist = (facts.rashi_indices[gi] + 12 - facts.rashi_indices[fi]) % 12;
            matches!(dist, 0 | 3 | 6 | 9).then(|| PredicateHit {
                tier: Some(placement_tier(facts.lons[gi], facts.rashi_indices[gi])),
                grahas: vec![graha, from],
                bhavas: vec![facts.whole_sign_bhavas[gi]],
            })
        }
        Predicate::AllHemmedByNodes => {
            let rahu = facts.lons[Graha::Rahu.index() as usize];
            let mut ahead = 0;
            for g in SAPTA_GRAHAS {
                if arc_forward(rahu, facts.lons[g.index() as usize]) < 180.0 {
                    ahead += 1;
                }
            }
            (ahead == 0 || ahead == 7).then(|| PredicateHit {
                tier: None,
                grahas: vec![Graha::Rahu, Graha::Ketu],
                bhavas: vec![],
            })
        }
        Predicate::LoneMoon => {
            let moon_rashi = facts.rashi_indices[Graha::Chandra.index() as usize];
            let second = (moon_rashi + 1) % 12;
            let twelfth = (moon_rashi + 11) % 12;
            let accompanied = SAPTA_GRAHAS.iter().any(|&g| {
                if matches!(g, Graha::Chandra | Graha::Surya) {
                    return false;
                }
                let r = facts.rashi_indices[g.index() as usize];
                r == second || r == twelfth
            });
            (!accompanied).then(|| PredicateHit {
                tier: None,
                grahas: vec![Graha::Chandra],
                bhavas: vec![facts.whole_sign_bhavas[Graha::Chandra.index() as usize]],
            })
        }
    };
    Ok(hit)
}
