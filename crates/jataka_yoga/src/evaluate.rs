//! Catalog evaluation.
//!
//! Rules are independent: one malformed entry is skipped with a warning
//! and the remaining catalog still runs. Results are stably sorted by
//! strength tier; declaration order is the only tie-break.

use log::warn;

use jataka_vedic::Graha;

use crate::catalog::{CATALOG, Rule};
use crate::error::RuleCatalogError;
use crate::predicate::{ChartFacts, eval_predicate};
use crate::types::{DoshaMatch, RuleKind, RuleMatch, Severity, StrengthTier, YogaMatch};

/// Evaluate the built-in catalog against chart facts.
pub fn evaluate(facts: &ChartFacts) -> Vec<RuleMatch> {
    evaluate_catalog(CATALOG, facts)
}

/// Evaluate an explicit catalog (swappable for tests and extensions).
pub fn evaluate_catalog(rules: &[Rule], facts: &ChartFacts) -> Vec<RuleMatch> {
    let mut matches = Vec::new();
    for rule in rules {
        match eval_rule(rule, facts) {
            Ok(Some(m)) => matches.push(m),
            Ok(None) => {}
            Err(e) => warn!("skipping malformed catalog rule: {e}"),
        }
    }
    // Stable: equal tiers keep catalog declaration order.
    matches.sort_by_key(|m| m.tier().rank());
    matches
}

/// Evaluate one rule; all predicates must hold.
fn eval_rule(rule: &Rule, facts: &ChartFacts) -> Result<Option<RuleMatch>, RuleCatalogError> {
    let mut tier: Option<StrengthTier> = None;
    let mut grahas: Vec<Graha> = Vec::new();
    let mut bhavas: Vec<u8> = Vec::new();

    for pred in rule.predicates {
        let hit = match eval_predicate(pred, facts, rule.name)? {
            Some(hit) => hit,
            None => return Ok(None),
        };
        if let Some(t) = hit.tier {
            tier = Some(match tier {
                Some(existing) => existing.weakest(t),
                None => t,
            });
        }
        for g in hit.grahas {
            if !grahas.contains(&g) {
                grahas.push(g);
            }
        }
        for b in hit.bhavas {
            if !bhavas.contains(&b) {
                bhavas.push(b);
            }
        }
    }

    // Structural-only rules are binary; report them at full strength.
    let tier = tier.unwrap_or(StrengthTier::Strong);

    let m = match rule.kind {
        RuleKind::Yoga => RuleMatch::Yoga(YogaMatch {
            name: rule.name,
            grahas,
            bhavas,
            tier,
        }),
        RuleKind::Dosha => RuleMatch::Dosha(DoshaMatch {
            name: rule.name,
            grahas,
            bhavas,
            tier,
            severity: rule.severity.unwrap_or(Severity::Moderate),
            remedies: rule.remedies.to_vec(),
        }),
    };
    Ok(Some(m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::Predicate;
    use jataka_vedic::from_sidereal_longitude;

    fn facts_from_lons(lons: [f64; 9], lagna_rashi: u8) -> ChartFacts {
        let mut positions = [from_sidereal_longitude(Graha::Surya, 0.0, 0.0, 1.0, 1.0); 9];
        for (i, &g) in jataka_vedic::ALL_GRAHAS.iter().enumerate() {
            positions[i] = from_sidereal_longitude(g, lons[i], 0.0, 1.0, 1.0);
        }
        ChartFacts::from_positions(&positions, lagna_rashi)
    }

    /// A quiet chart spread so no conjunction/hemming rules fire by accident.
    fn baseline_lons() -> [f64; 9] {
        // Surya, Chandra, Mangal, Buddh, Guru, Shukra, Shani, Rahu, Ketu
        [15.0, 75.0, 130.0, 40.0, 255.0, 340.0, 160.0, 100.0, 280.0]
    }

    #[test]
    fn mangal_dosha_in_seventh() {
        // Lagna Mesha; Mars in Tula (7th whole-sign house).
        let mut lons = baseline_lons();
        lons[Graha::Mangal.index() as usize] = 195.0;
        let matches = evaluate(&facts_from_lons(lons, 0));
        assert!(
            matches
                .iter()
                .any(|m| matches!(m, RuleMatch::Dosha(d) if d.name == "Mangal Dosha")),
            "matches: {:?}",
            matches.iter().map(|m| m.name()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn mangal_dosha_absent_in_fifth() {
        let mut lons = baseline_lons();
        lons[Graha::Mangal.index() as usize] = 135.0; // Simha, 5th from Mesha
        let matches = evaluate(&facts_from_lons(lons, 0));
        assert!(!matches.iter().any(|m| m.name() == "Mangal Dosha"));
    }

    #[test]
    fn budhaditya_with_tier_from_orb() {
        let mut lons = baseline_lons();
        lons[Graha::Surya.index() as usize] = 100.0;
        lons[Graha::Buddh.index() as usize] = 102.0;
        let matches = evaluate(&facts_from_lons(lons, 0));
        let m = matches
            .iter()
            .find(|m| m.name() == "Budhaditya Yoga")
            .expect("yoga detected");
        assert_eq!(m.tier(), StrengthTier::Moderate);
    }

    #[test]
    fn gajakesari_when_jupiter_in_kendra_from_moon() {
        let mut lons = baseline_lons();
        lons[Graha::Chandra.index() as usize] = 45.0; // Vrishabha
        lons[Graha::Guru.index() as usize] = 135.0; // Simha: 4th from it
        let matches = evaluate(&facts_from_lons(lons, 0));
        assert!(matches.iter().any(|m| m.name() == "Gajakesari Yoga"));
    }

    #[test]
    fn kaal_sarpa_reported_strong() {
        // Rahu 10, Ketu 190, everyone inside the forward half.
        let lons = [20.0, 60.0, 90.0, 120.0, 150.0, 170.0, 185.0, 10.0, 190.0];
        let matches = evaluate(&facts_from_lons(lons, 0));
        let m = matches
            .iter()
            .find(|m| m.name() == "Kaal Sarpa Dosha")
            .expect("dosha detected");
        assert_eq!(m.tier(), StrengthTier::Strong);
    }

    #[test]
    fn ordering_strong_before_weak_then_declaration() {
        // Sun-Mercury exact (strong); Moon-Mars wide (weak).
        let mut lons = baseline_lons();
        lons[Graha::Surya.index() as usize] = 200.0;
        lons[Graha::Buddh.index() as usize] = 200.4;
        lons[Graha::Chandra.index() as usize] = 60.0;
        lons[Graha::Mangal.index() as usize] = 68.0;
        let matches = evaluate(&facts_from_lons(lons, 0));

        let budha = matches
            .iter()
            .position(|m| m.name() == "Budhaditya Yoga")
            .unwrap();
        let chandra_mangala = matches
            .iter()
            .position(|m| m.name() == "Chandra-Mangala Yoga")
            .unwrap();
        assert!(budha < chandra_mangala, "strong must sort first");

        for pair in matches.windows(2) {
            assert!(pair[0].tier().rank() <= pair[1].tier().rank());
        }
    }

    #[test]
    fn malformed_rule_skipped_not_fatal() {
        const BROKEN: &[Rule] = &[
            Rule {
                name: "broken self-conjunction",
                kind: RuleKind::Yoga,
                predicates: &[Predicate::Conjunct {
                    a: Graha::Surya,
                    b: Graha::Surya,
                    orb_deg: 5.0,
                }],
                severity: None,
                remedies: &[],
            },
            Rule {
                name: "valid placement",
                kind: RuleKind::Yoga,
                predicates: &[Predicate::InBhava {
                    graha: Graha::Surya,
                    bhavas: &[1],
                }],
                severity: None,
                remedies: &[],
            },
        ];
        let matches = evaluate_catalog(BROKEN, &facts_from_lons(baseline_lons(), 0));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name(), "valid placement");
    }

    #[test]
    fn compound_rule_takes_weakest_predicate_tier() {
        // Mars exalted near the sign edge in a kendra: placement tiers
        // combine through the weakest.
        let mut lons = baseline_lons();
        lons[Graha::Mangal.index() as usize] = 299.0; // Makara 29: exalted sign, edge
        // Lagna Makara so Mars sits in house 1.
        let matches = evaluate(&facts_from_lons(lons, 9));
        let m = matches
            .iter()
            .find(|m| m.name() == "Ruchaka Yoga")
            .expect("yoga detected");
        assert_eq!(m.tier(), StrengthTier::Weak);
    }
}
