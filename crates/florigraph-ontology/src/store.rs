//! Base relation tables.
//!
//! The store holds the three fixed relation sets (`is_a`, `part_of`,
//! `grows_in`), the instance→class mapping, and the alias table, all as
//! immutable configuration. Everything else in the workspace (indices,
//! the merged multigraph, every query engine) is derived from this and
//! rebuilt only when the store changes.

use crate::concept::{normalize, ConceptId};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// The three base relation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RelationKind {
    IsA,
    PartOf,
    GrowsIn,
}

impl RelationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RelationKind::IsA => "is_a",
            RelationKind::PartOf => "part_of",
            RelationKind::GrowsIn => "grows_in",
        }
    }
}

#[derive(Debug, Error)]
pub enum OntologyError {
    /// The `is_a` table is not a hierarchy: upward traversal from this
    /// concept returns to it.
    #[error("taxonomy cycle through concept `{0}`")]
    TaxonomyCycle(ConceptId),

    #[error("invalid knowledge-base document: {0}")]
    Config(#[from] serde_json::Error),
}

/// On-disk knowledge-base document (JSON).
///
/// Pairs are `(child, parent)` for `is_a`, `(part, whole)` for `part_of`,
/// and `(class, habitat)` for `grows_in`. Keys and values are normalized on
/// load, so the document may use any spelling `normalize` accepts.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KbConfig {
    #[serde(default)]
    pub is_a: Vec<(String, String)>,
    #[serde(default)]
    pub part_of: Vec<(String, String)>,
    #[serde(default)]
    pub grows_in: Vec<(String, String)>,
    /// Instance name → class name. A map by construction: one class per
    /// instance.
    #[serde(default)]
    pub instances: BTreeMap<String, String>,
    /// Descriptive alias → canonical class (e.g. `living` → `organism`),
    /// consulted for the right-hand side of `is_a` hypotheses.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// Immutable base relation sets and mappings.
#[derive(Debug, Clone, Default)]
pub struct RelationStore {
    is_a: BTreeSet<(ConceptId, ConceptId)>,
    part_of: BTreeSet<(ConceptId, ConceptId)>,
    grows_in: BTreeSet<(ConceptId, ConceptId)>,
    instances: BTreeMap<ConceptId, ConceptId>,
    aliases: BTreeMap<ConceptId, ConceptId>,
}

impl RelationStore {
    /// Build a store from a parsed knowledge-base document.
    pub fn from_config(config: KbConfig) -> Self {
        let pairs = |table: Vec<(String, String)>| {
            table
                .into_iter()
                .map(|(a, b)| (normalize(&a), normalize(&b)))
                .collect::<BTreeSet<_>>()
        };
        let map = |table: BTreeMap<String, String>| {
            table
                .into_iter()
                .map(|(k, v)| (normalize(&k), normalize(&v)))
                .collect::<BTreeMap<_, _>>()
        };

        let store = Self {
            is_a: pairs(config.is_a),
            part_of: pairs(config.part_of),
            grows_in: pairs(config.grows_in),
            instances: map(config.instances),
            aliases: map(config.aliases),
        };
        tracing::debug!(
            is_a = store.is_a.len(),
            part_of = store.part_of.len(),
            grows_in = store.grows_in.len(),
            instances = store.instances.len(),
            "loaded relation store"
        );
        store
    }

    /// Parse a JSON knowledge-base document.
    pub fn from_json_str(text: &str) -> Result<Self, OntologyError> {
        let config: KbConfig = serde_json::from_str(text)?;
        Ok(Self::from_config(config))
    }

    pub fn is_a(&self) -> &BTreeSet<(ConceptId, ConceptId)> {
        &self.is_a
    }

    pub fn part_of(&self) -> &BTreeSet<(ConceptId, ConceptId)> {
        &self.part_of
    }

    pub fn grows_in(&self) -> &BTreeSet<(ConceptId, ConceptId)> {
        &self.grows_in
    }

    pub fn instances(&self) -> &BTreeMap<ConceptId, ConceptId> {
        &self.instances
    }

    /// Direct habitat fact check. Deliberately not transitive: habitats are
    /// leaves, not a hierarchy.
    pub fn grows_in_direct(&self, class: &ConceptId, habitat: &ConceptId) -> bool {
        self.grows_in.contains(&(class.clone(), habitat.clone()))
    }

    /// The class an instance is bound to, if the concept is an instance.
    pub fn class_of_instance(&self, concept: &ConceptId) -> Option<&ConceptId> {
        self.instances.get(concept)
    }

    /// Map a descriptive alias to its canonical class; non-aliases pass
    /// through unchanged.
    pub fn resolve_alias<'a>(&'a self, concept: &'a ConceptId) -> &'a ConceptId {
        self.aliases.get(concept).unwrap_or(concept)
    }

    /// The builtin plants knowledge base: 20 classes, four-plus levels of
    /// taxonomy, two instances per leaf plant class, and two habitats.
    pub fn plants() -> Self {
        let is_a = [
            ("organism", "entity"),
            ("plant", "organism"),
            ("seedplant", "plant"),
            ("flowering", "seedplant"),
            ("dicot", "flowering"),
            ("rosaceae", "dicot"),
            ("rose", "rosaceae"),
            ("apple", "rosaceae"),
            ("grass", "flowering"),
            ("wheat", "grass"),
            ("maize", "grass"),
            ("conifer", "seedplant"),
            ("pine", "conifer"),
            ("spruce", "conifer"),
            ("plant_organ", "entity"),
            ("flower", "plant_organ"),
            ("fruit", "plant_organ"),
            ("seed", "plant_organ"),
            ("habitat", "entity"),
        ];
        let part_of = [("flower", "plant"), ("fruit", "plant"), ("seed", "fruit")];
        let grows_in = [
            ("pine", "temperate_forest"),
            ("spruce", "temperate_forest"),
            ("rose", "temperate_forest"),
            ("apple", "temperate_forest"),
            ("wheat", "steppe"),
            ("maize", "steppe"),
        ];
        let instances = [
            ("rose_1", "rose"),
            ("rose_2", "rose"),
            ("apple_1", "apple"),
            ("apple_2", "apple"),
            ("wheat_1", "wheat"),
            ("wheat_2", "wheat"),
            ("maize_1", "maize"),
            ("maize_2", "maize"),
            ("pine_1", "pine"),
            ("pine_2", "pine"),
            ("spruce_1", "spruce"),
            ("spruce_2", "spruce"),
        ];
        let aliases = [("living", "organism"), ("alive", "organism")];

        let pairs = |table: &[(&str, &str)]| {
            table
                .iter()
                .map(|&(a, b)| (normalize(a), normalize(b)))
                .collect::<BTreeSet<_>>()
        };
        let map = |table: &[(&str, &str)]| {
            table
                .iter()
                .map(|&(k, v)| (normalize(k), normalize(v)))
                .collect::<BTreeMap<_, _>>()
        };

        Self {
            is_a: pairs(&is_a),
            part_of: pairs(&part_of),
            grows_in: pairs(&grows_in),
            instances: map(&instances),
            aliases: map(&aliases),
        }
    }
}
