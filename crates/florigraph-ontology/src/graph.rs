//! The merged labeled multigraph.
//!
//! Every base relation pair contributes two directed edges: the relation
//! itself and an inverse-labeled counterpart, so path search can move in
//! either direction while an explanation still states the correct semantic
//! direction of each hop. Instance↔class pairs are edges too. Two concepts
//! may be connected by several edges with different labels.
//!
//! The edge list is sorted by `(source, label, target)` and the adjacency
//! index preserves that order, so traversal and tie-breaking are
//! deterministic and reproducible.

use crate::concept::ConceptId;
use crate::store::RelationStore;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Edge labels of the merged multigraph: each base relation, its semantic
/// inverse, and the instance↔class links.
///
/// The derived `Ord` (declaration order) is part of the deterministic edge
/// ordering contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeLabel {
    /// child → parent in the taxonomy
    IsA,
    /// parent → child (inverse of `is_a`)
    HasSubclass,
    /// part → whole
    PartOf,
    /// whole → part (inverse of `part_of`)
    HasPart,
    /// class → habitat
    GrowsIn,
    /// habitat → class (inverse of `grows_in`)
    HabitatOf,
    /// instance → its class
    InstanceOf,
    /// class → one of its instances
    HasInstance,
}

impl EdgeLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeLabel::IsA => "is_a",
            EdgeLabel::HasSubclass => "has_subclass",
            EdgeLabel::PartOf => "part_of",
            EdgeLabel::HasPart => "has_part",
            EdgeLabel::GrowsIn => "grows_in",
            EdgeLabel::HabitatOf => "habitat_of",
            EdgeLabel::InstanceOf => "instance_of",
            EdgeLabel::HasInstance => "has_instance",
        }
    }

    /// Natural-language phrase for explanation steps.
    ///
    /// Total over the enum, so the formatter can never meet a label it has
    /// no phrase for.
    pub fn phrase(self) -> &'static str {
        match self {
            EdgeLabel::IsA => "is a (generalization)",
            EdgeLabel::HasSubclass => "has subclass (specialization)",
            EdgeLabel::PartOf => "is part of",
            EdgeLabel::HasPart => "has part",
            EdgeLabel::GrowsIn => "grows in",
            EdgeLabel::HabitatOf => "is habitat of",
            EdgeLabel::InstanceOf => "is an instance of",
            EdgeLabel::HasInstance => "has instance",
        }
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One directed labeled edge of the merged graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledEdge {
    pub source: ConceptId,
    pub target: ConceptId,
    pub label: EdgeLabel,
}

/// The merged multigraph with a deterministic edge order.
#[derive(Debug, Clone, Default)]
pub struct LabeledGraph {
    /// All edges, sorted by `(source, label, target)`.
    edges: Vec<LabeledEdge>,
    /// source → indices into `edges`, preserving the sorted order.
    outgoing: BTreeMap<ConceptId, Vec<usize>>,
}

impl LabeledGraph {
    pub fn build(store: &RelationStore) -> Self {
        let mut edges = Vec::new();
        let mut push = |source: &ConceptId, target: &ConceptId, label: EdgeLabel| {
            edges.push(LabeledEdge {
                source: source.clone(),
                target: target.clone(),
                label,
            });
        };

        for (child, parent) in store.is_a() {
            push(child, parent, EdgeLabel::IsA);
            push(parent, child, EdgeLabel::HasSubclass);
        }
        for (part, whole) in store.part_of() {
            push(part, whole, EdgeLabel::PartOf);
            push(whole, part, EdgeLabel::HasPart);
        }
        for (class, habitat) in store.grows_in() {
            push(class, habitat, EdgeLabel::GrowsIn);
            push(habitat, class, EdgeLabel::HabitatOf);
        }
        for (instance, class) in store.instances() {
            push(instance, class, EdgeLabel::InstanceOf);
            push(class, instance, EdgeLabel::HasInstance);
        }

        edges.sort_by(|a, b| {
            (&a.source, a.label, &a.target).cmp(&(&b.source, b.label, &b.target))
        });

        let mut outgoing: BTreeMap<ConceptId, Vec<usize>> = BTreeMap::new();
        for (idx, edge) in edges.iter().enumerate() {
            outgoing.entry(edge.source.clone()).or_default().push(idx);
        }

        tracing::debug!(edges = edges.len(), "built labeled multigraph");
        Self { edges, outgoing }
    }

    pub fn edges(&self) -> &[LabeledEdge] {
        &self.edges
    }

    /// Outgoing edges of a node, in the graph's deterministic order.
    pub fn outgoing<'a>(&'a self, node: &ConceptId) -> impl Iterator<Item = &'a LabeledEdge> + 'a {
        self.outgoing
            .get(node)
            .into_iter()
            .flatten()
            .map(|&idx| &self.edges[idx])
    }
}
