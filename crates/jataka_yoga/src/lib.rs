//! Yoga/dosha detection for the jataka engine.
//!
//! A declarative catalog of classical planetary combinations is evaluated
//! against normalized chart facts. Predicates are a tagged enum with one
//! evaluation dispatch; the catalog itself is immutable const data, so the
//! domain knowledge stays auditable apart from the evaluation loop.
//!
//! House-placement predicates always use whole-sign houses from the lagna,
//! the classical frame for combination rules, regardless of which cusp
//! system the chart was drawn with.

pub mod catalog;
pub mod error;
pub mod evaluate;
pub mod predicate;
pub mod types;

pub use catalog::{CATALOG, Rule, validate_catalog};
pub use error::RuleCatalogError;
pub use evaluate::{evaluate, evaluate_catalog};
pub use predicate::{ChartFacts, Predicate, PredicateHit, eval_predicate};
pub use types::{DoshaMatch, RuleKind, RuleMatch, Severity, StrengthTier, YogaMatch};
