//! The built-in combination catalog.
//!
//! Immutable declarative data: each entry names a classical combination
//! and the predicates that detect it. Evaluation order and result
//! tie-breaking follow declaration order, so entries are grouped yogas
//! first, doshas second, both in rough order of classical prominence.

use jataka_vedic::{Dignity, Graha};

use crate::error::RuleCatalogError;
use crate::predicate::{Predicate, validate_predicate};
use crate::types::{RuleKind, Severity};

/// One declarative catalog entry. All predicates must hold for a match.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub kind: RuleKind,
    pub predicates: &'static [Predicate],
    /// Dosha severity; ignored for yogas.
    pub severity: Option<Severity>,
    pub remedies: &'static [&'static str],
}

/// Dignities that qualify for the five Mahapurusha yogas.
const MAHAPURUSHA_DIGNITIES: &[Dignity] =
    &[Dignity::Exalted, Dignity::Moolatrikone, Dignity::OwnSign];

/// Kendra houses from the lagna.
const KENDRA_BHAVAS: &[u8] = &[1, 4, 7, 10];

/// Houses whose Mars placement constitutes Mangal dosha.
const MANGAL_DOSHA_BHAVAS: &[u8] = &[1, 4, 7, 8, 12];

/// The built-in catalog.
pub const CATALOG: &[Rule] = &[
    // -- Yogas ------------------------------------------------------------
    Rule {
        name: "Gajakesari Yoga",
        kind: RuleKind::Yoga,
        predicates: &[Predicate::KendraFrom {
            graha: Graha::Guru,
            from: Graha::Chandra,
        }],
        severity: None,
        remedies: &[],
    },
    Rule {
        name: "Budhaditya Yoga",
        kind: RuleKind::Yoga,
        predicates: &[Predicate::Conjunct {
            a: Graha::Surya,
            b: Graha::Buddh,
            orb_deg: 10.0,
        }],
        severity: None,
        remedies: &[],
    },
    Rule {
        name: "Chandra-Mangala Yoga",
        kind: RuleKind::Yoga,
        predicates: &[Predicate::Conjunct {
            a: Graha::Chandra,
            b: Graha::Mangal,
            orb_deg: 10.0,
        }],
        severity: None,
        remedies: &[],
    },
    Rule {
        name: "Guru-Mangala Yoga",
        kind: RuleKind::Yoga,
        predicates: &[Predicate::Conjunct {
            a: Graha::Guru,
            b: Graha::Mangal,
            orb_deg: 8.0,
        }],
        severity: None,
        remedies: &[],
    },
    Rule {
        name: "Ruchaka Yoga",
        kind: RuleKind::Yoga,
        predicates: &[
            Predicate::InDignity {
                graha: Graha::Mangal,
                dignities: MAHAPURUSHA_DIGNITIES,
            },
            Predicate::InBhava {
                graha: Graha::Mangal,
                bhavas: KENDRA_BHAVAS,
            },
        ],
        severity: None,
        remedies: &[],
    },
    Rule {
        name: "Bhadra Yoga",
        kind: RuleKind::Yoga,
        predicates: &[
            Predicate::InDignity {
                graha: Graha::Buddh,
                dignities: MAHAPURUSHA_DIGNITIES,
            },
            Predicate::InBhava {
                graha: Graha::Buddh,
                bhavas: KENDRA_BHAVAS,
            },
        ],
        severity: None,
        remedies: &[],
    },
    Rule {
        name: "Hamsa Yoga",
        kind: RuleKind::Yoga,
        predicates: &[
            Predicate::InDignity {
                graha: Graha::Guru,
                dignities: MAHAPURUSHA_DIGNITIES,
            },
            Predicate::InBhava {
                graha: Graha::Guru,
                bhavas: KENDRA_BHAVAS,
            },
        ],
        severity: None,
        remedies: &[],
    },
    Rule {
        name: "Malavya Yoga",
        kind: RuleKind::Yoga,
        predicates: &[
            Predicate::InDignity {
                graha: Graha::Shukra,
                dignities: MAHAPURUSHA_DIGNITIES,
            },
            Predicate::InBhava {
                graha: Graha::Shukra,
                bhavas: KENDRA_BHAVAS,
            },
        ],
        severity: None,
        remedies: &[],
    },
    Rule {
        name: "Sasa Yoga",
        kind: RuleKind::Yoga,
        predicates: &[
            Predicate::InDignity {
                graha: Graha::Shani,
                dignities: MAHAPURUSHA_DIGNITIES,
            },
            Predicate::InBhava {
                graha: Graha::Shani,
                bhavas: KENDRA_BHAVAS,
            },
        ],
        severity: None,
        remedies: &[],
    },
    Rule {
        name: "Amala Yoga (Guru)",
        kind: RuleKind::Yoga,
        predicates: &[Predicate::InBhava {
            graha: Graha::Guru,
            bhavas: &[10],
        }],
        severity: None,
        remedies: &[],
    },
    Rule {
        name: "Amala Yoga (Shukra)",
        kind: RuleKind::Yoga,
        predicates: &[Predicate::InBhava {
            graha: Graha::Shukra,
            bhavas: &[10],
        }],
        severity: None,
        remedies: &[],
    },
    // -- Doshas -----------------------------------------------------------
    Rule {
        name: "Mangal Dosha",
        kind: RuleKind::Dosha,
        predicates: &[Predicate::InBhava {
            graha: Graha::Mangal,
            bhavas: MANGAL_DOSHA_BHAVAS,
        }],
        severity: Some(Severity::High),
        remedies: &[
            "Kumbh vivah before marriage",
            "Mangal shanti puja",
            "Recitation of the Hanuman Chalisa on Tuesdays",
        ],
    },
    Rule {
        name: "Kaal Sarpa Dosha",
        kind: RuleKind::Dosha,
        predicates: &[Predicate::AllHemmedByNodes],
        severity: Some(Severity::High),
        remedies: &[
            "Kaal sarpa shanti at Trimbakeshwar",
            "Rudrabhishek on Mondays",
        ],
    },
    Rule {
        name: "Kemadruma Dosha",
        kind: RuleKind::Dosha,
        predicates: &[Predicate::LoneMoon],
        severity: Some(Severity::Moderate),
        remedies: &["Chandra japa on Mondays", "Donation of white articles"],
    },
    Rule {
        name: "Guru Chandal Dosha",
        kind: RuleKind::Dosha,
        predicates: &[Predicate::Conjunct {
            a: Graha::Guru,
            b: Graha::Rahu,
            orb_deg: 8.0,
        }],
        severity: Some(Severity::Moderate),
        remedies: &["Guru graha shanti", "Donation of turmeric and gram dal"],
    },
    Rule {
        name: "Surya Grahan Dosha",
        kind: RuleKind::Dosha,
        predicates: &[Predicate::Conjunct {
            a: Graha::Surya,
            b: Graha::Rahu,
            orb_deg: 8.0,
        }],
        severity: Some(Severity::Moderate),
        remedies: &["Aditya hridaya recitation", "Surya arghya at sunrise"],
    },
    Rule {
        name: "Chandra Grahan Dosha",
        kind: RuleKind::Dosha,
        predicates: &[Predicate::Conjunct {
            a: Graha::Chandra,
            b: Graha::Ketu,
            orb_deg: 8.0,
        }],
        severity: Some(Severity::Moderate),
        remedies: &["Chandra grahan shanti", "Shiva abhisheka on Mondays"],
    },
    Rule {
        name: "Angarak Dosha",
        kind: RuleKind::Dosha,
        predicates: &[Predicate::Conjunct {
            a: Graha::Mangal,
            b: Graha::Rahu,
            orb_deg: 8.0,
        }],
        severity: Some(Severity::High),
        remedies: &["Angarak shanti puja", "Feeding jaggery to cattle on Tuesdays"],
    },
    Rule {
        name: "Vish Dosha",
        kind: RuleKind::Dosha,
        predicates: &[Predicate::Conjunct {
            a: Graha::Chandra,
            b: Graha::Shani,
            orb_deg: 8.0,
        }],
        severity: Some(Severity::Moderate),
        remedies: &["Shani shanti puja", "Donation of sesame on Saturdays"],
    },
];

/// Check every catalog entry. Run at startup so malformed entries surface
/// before any chart is evaluated.
pub fn validate_catalog(rules: &[Rule]) -> Result<(), RuleCatalogError> {
    for rule in rules {
        if rule.predicates.is_empty() {
            return Err(RuleCatalogError {
                rule: rule.name,
                reason: "no predicates",
            });
        }
        if rule.kind == RuleKind::Dosha && rule.severity.is_none() {
            return Err(RuleCatalogError {
                rule: rule.name,
                reason: "dosha without severity",
            });
        }
        for pred in rule.predicates {
            validate_predicate(pred, rule.name)?;
        }
    }
    Ok(())
}
