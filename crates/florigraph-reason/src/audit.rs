//! Knowledge-base requirements report.
//!
//! Checks the structural expectations the plants ontology is built to: a
//! fixed class count, all three relation tables populated, a taxonomy at
//! least four levels deep, and at least two instances per leaf plant class.
//! The report is informational; nothing here changes query behavior.

use crate::closure::is_subclass_of;
use florigraph_ontology::{ConceptId, Ontology};
use std::collections::BTreeSet;
use std::fmt::Write;

/// Structural summary of a knowledge base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KbAudit {
    pub class_count: usize,
    pub is_a_count: usize,
    pub part_of_count: usize,
    pub grows_in_count: usize,
    pub instance_count: usize,
    /// Longest root-to-leaf chain in the taxonomy, in nodes.
    pub max_depth: usize,
    /// Leaf classes under the given plant root, sorted.
    pub leaf_plants: Vec<ConceptId>,
    /// Leaf plant classes with fewer than two instances, with their counts.
    pub under_instantiated: Vec<(ConceptId, usize)>,
}

/// Audit an ontology. `plant_root` names the class whose leaf subclasses
/// must carry instances (`plant` in the builtin knowledge base).
pub fn audit(ontology: &Ontology, plant_root: &ConceptId) -> KbAudit {
    let taxonomy = ontology.taxonomy();
    let store = ontology.store();

    let classes: BTreeSet<&ConceptId> = taxonomy.concepts().collect();

    let max_depth = taxonomy
        .roots()
        .map(|root| subtree_depth(ontology, root))
        .max()
        .unwrap_or(0);

    let leaf_plants = leaf_classes_under(ontology, plant_root);

    let under_instantiated = leaf_plants
        .iter()
        .filter_map(|leaf| {
            let count = store.instances().values().filter(|c| *c == leaf).count();
            (count < 2).then(|| (leaf.clone(), count))
        })
        .collect();

    KbAudit {
        class_count: classes.len(),
        is_a_count: store.is_a().len(),
        part_of_count: store.part_of().len(),
        grows_in_count: store.grows_in().len(),
        instance_count: store.instances().len(),
        max_depth,
        leaf_plants,
        under_instantiated,
    }
}

/// Leaf classes that are subclasses of `root`, sorted.
pub fn leaf_classes_under(ontology: &Ontology, root: &ConceptId) -> Vec<ConceptId> {
    ontology
        .taxonomy()
        .concepts()
        .filter(|c| ontology.taxonomy().is_leaf(c) && is_subclass_of(ontology, c, root))
        .cloned()
        .collect()
}

/// Longest downward chain from `node`, counting `node` itself.
///
/// Recursion is bounded because construction validated the taxonomy acyclic.
pub fn subtree_depth(ontology: &Ontology, node: &ConceptId) -> usize {
    1 + ontology
        .taxonomy()
        .children_of(node)
        .map(|child| subtree_depth(ontology, child))
        .max()
        .unwrap_or(0)
}

impl KbAudit {
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Classes: {}", self.class_count);
        let _ = writeln!(
            out,
            "Relations: is_a={} part_of={} grows_in={}",
            self.is_a_count, self.part_of_count, self.grows_in_count
        );
        let _ = writeln!(out, "Instances: {}", self.instance_count);
        let _ = writeln!(out, "Taxonomy depth: {}", self.max_depth);
        let leaves = self
            .leaf_plants
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "Leaf plant classes: {leaves}");
        if self.under_instantiated.is_empty() {
            let _ = write!(out, "Instance coverage: every leaf plant class has 2+ instances");
        } else {
            let lacking = self
                .under_instantiated
                .iter()
                .map(|(c, n)| format!("{c} ({n})"))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = write!(out, "Instance coverage: lacking {lacking}");
        }
        out
    }
}
