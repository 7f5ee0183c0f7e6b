//! Match types produced by the combination catalog.

use serde::Serialize;

use jataka_vedic::Graha;

/// Whether a catalog entry describes a beneficial or afflictive combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Yoga,
    Dosha,
}

/// Match strength from aspect/placement exactness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthTier {
    Strong,
    Moderate,
    Weak,
}

impl StrengthTier {
    /// Sort rank: strong matches order first.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Strong => 0,
            Self::Moderate => 1,
            Self::Weak => 2,
        }
    }

    /// The weaker of two tiers.
    pub fn weakest(self, other: StrengthTier) -> StrengthTier {
        if self.rank() >= other.rank() { self } else { other }
    }
}

/// Dosha severity, declared per catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Low,
    Moderate,
    High,
}

/// A detected beneficial combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YogaMatch {
    pub name: &'static str,
    pub grahas: Vec<Graha>,
    pub bhavas: Vec<u8>,
    pub tier: StrengthTier,
}

/// A detected afflictive combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoshaMatch {
    pub name: &'static str,
    pub grahas: Vec<Graha>,
    pub bhavas: Vec<u8>,
    pub tier: StrengthTier,
    pub severity: Severity,
    pub remedies: Vec<&'static str>,
}

/// One entry in the ordered evaluation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum RuleMatch {
    Yoga(YogaMatch),
    Dosha(DoshaMatch),
}

impl RuleMatch {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Yoga(y) => y.name,
            Self::Dosha(d) => d.name,
        }
    }

    pub fn tier(&self) -> StrengthTier {
        match self {
            Self::Yoga(y) => y.tier,
            Self::Dosha(d) => d.tier,
        }
    }
}
