use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::compose::composer::has_empty_segment;
use crate::report::manifest::fingerprint;
use crate::tree::tree_model::ResolvedIdentifier;

// ============================================================================
// Identifier manifest — the resolved lookup keys of one tree
// ============================================================================

/// Serializable snapshot of every identifier a tree resolves to.
///
/// UI test suites pin the `fingerprint` to notice when a layout change
/// renames or reorders their lookup keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdentifierManifest {
    /// Path or name of the tree the manifest was built from
    pub source: String,

    /// SHA-1 hex of the newline-joined identifiers, in document order
    pub fingerprint: String,

    pub identifiers: Vec<String>,
}

impl IdentifierManifest {
    pub fn from_resolved(source: &str, resolved: &[ResolvedIdentifier]) -> Self {
        let identifiers: Vec<String> = resolved.iter().map(|r| r.identifier.clone()).collect();
        Self {
            source: source.to_string(),
            fingerprint: fingerprint(&identifiers),
            identifiers,
        }
    }
}

// ============================================================================
// Expectation check — compares resolved identifiers against a pinned list
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpectationReport {
    /// Expected but not produced by the tree
    pub missing: Vec<String>,

    /// Produced by the tree but not listed
    pub unexpected: Vec<String>,

    /// Applied to more than one node; ambiguous as a lookup key
    pub duplicates: Vec<String>,

    /// Produced with an empty segment from stray dots in a fragment
    pub malformed: Vec<String>,

    /// Number of expected identifiers that were found
    pub matched: usize,
}

impl ExpectationReport {
    pub fn compare(expected: &[String], resolved: &[ResolvedIdentifier]) -> Self {
        let expected_set: BTreeSet<&str> = expected.iter().map(String::as_str).collect();

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for r in resolved {
            *counts.entry(r.identifier.as_str()).or_default() += 1;
        }

        let missing = expected_set
            .iter()
            .filter(|id| !counts.contains_key(*id))
            .map(|id| id.to_string())
            .collect();

        let unexpected = counts
            .keys()
            .filter(|id| !expected_set.contains(*id))
            .map(|id| id.to_string())
            .collect();

        let duplicates = counts
            .iter()
            .filter(|(_, n)| **n > 1)
            .map(|(id, _)| id.to_string())
            .collect();

        let malformed = counts
            .keys()
            .filter(|id| has_empty_segment(id))
            .map(|id| id.to_string())
            .collect();

        let matched = expected_set.iter().filter(|id| counts.contains_key(*id)).count();

        Self {
            missing,
            unexpected,
            duplicates,
            malformed,
            matched,
        }
    }

    /// Duplicates and malformed identifiers are reported but do not fail the check.
    pub fn all_passed(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}
