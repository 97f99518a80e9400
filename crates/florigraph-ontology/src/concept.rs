//! Concept identifiers.
//!
//! Every concept in the knowledge base is addressed by a normalized string
//! key: trimmed, outer quotes stripped, lowercased, internal spaces replaced
//! with `_`. Two identifiers are equal iff their normalized forms are equal,
//! and normalization is idempotent, so a `ConceptId` built from raw user
//! input compares directly against configuration keys.

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// A normalized concept key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ConceptId(String);

impl ConceptId {
    /// Normalize raw text into a concept identifier.
    pub fn new(raw: &str) -> Self {
        let mut text = raw.trim();
        // Strip outer quotes until stable, so quoting never nests.
        loop {
            let stripped = text.trim_matches('"').trim_matches('\'').trim();
            if stripped == text {
                break;
            }
            text = stripped;
        }

        let normalized: String = text
            .to_lowercase()
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConceptId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl Borrow<str> for ConceptId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Normalize raw text into a concept identifier.
///
/// Free-function spelling of [`ConceptId::new`], for call sites that read
/// better as `normalize("Temperate Forest")`.
pub fn normalize(raw: &str) -> ConceptId {
    ConceptId::new(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn trims_quotes_and_lowercases() {
        assert_eq!(normalize("  Rose ").as_str(), "rose");
        assert_eq!(normalize("\"rose\"").as_str(), "rose");
        assert_eq!(normalize("'Temperate Forest'").as_str(), "temperate_forest");
        assert_eq!(normalize("'\"rose\"'").as_str(), "rose");
    }

    #[test]
    fn replaces_internal_spaces() {
        assert_eq!(normalize("plant organ").as_str(), "plant_organ");
        assert_eq!(normalize("a  b").as_str(), "a__b");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(normalize("").is_empty());
        assert!(normalize("  \"\"  ").is_empty());
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(raw in ".{0,40}") {
            let once = normalize(&raw);
            let twice = normalize(once.as_str());
            prop_assert_eq!(once, twice);
        }
    }
}
