//! Error types for the combination catalog.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// A malformed catalog entry.
///
/// Surfaced at startup by `validate_catalog`; during evaluation the same
/// condition only skips the one rule (with a logged warning) so the rest
/// of the catalog still runs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RuleCatalogError {
    /// Name of the offending rule.
    pub rule: &'static str,
    /// What is wrong with it.
    pub reason: &'static str,
}

impl Display for RuleCatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "catalog rule '{}': {}", self.rule, self.reason)
    }
}

impl Error for RuleCatalogError {}
