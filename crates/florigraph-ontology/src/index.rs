//! Parent/child lookup tables derived from the taxonomic relation.
//!
//! Built once from `is_a` so upward and downward traversal is an O(depth)
//! walk over small sets instead of an O(E) scan per hop.

use crate::concept::ConceptId;
use crate::store::RelationStore;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default)]
pub struct TaxonomyIndex {
    /// child → direct parents
    parents: BTreeMap<ConceptId, BTreeSet<ConceptId>>,
    /// parent → direct children
    children: BTreeMap<ConceptId, BTreeSet<ConceptId>>,
    /// Every concept mentioned on either side of `is_a`.
    concepts: BTreeSet<ConceptId>,
}

impl TaxonomyIndex {
    pub fn build(store: &RelationStore) -> Self {
        let mut index = Self::default();
        for (child, parent) in store.is_a() {
            index
                .parents
                .entry(child.clone())
                .or_default()
                .insert(parent.clone());
            index
                .children
                .entry(parent.clone())
                .or_default()
                .insert(child.clone());
            index.concepts.insert(child.clone());
            index.concepts.insert(parent.clone());
        }
        index
    }

    pub fn parents_of<'a>(
        &'a self,
        concept: &ConceptId,
    ) -> impl Iterator<Item = &'a ConceptId> + 'a {
        self.parents.get(concept).into_iter().flatten()
    }

    pub fn children_of<'a>(
        &'a self,
        concept: &ConceptId,
    ) -> impl Iterator<Item = &'a ConceptId> + 'a {
        self.children.get(concept).into_iter().flatten()
    }

    /// All taxonomy concepts, in sorted order.
    pub fn concepts(&self) -> impl Iterator<Item = &ConceptId> {
        self.concepts.iter()
    }

    /// A leaf class has no subclasses.
    pub fn is_leaf(&self, concept: &ConceptId) -> bool {
        !self.children.contains_key(concept)
    }

    /// Classes with no parents (taxonomy roots).
    pub fn roots(&self) -> impl Iterator<Item = &ConceptId> {
        self.concepts
            .iter()
            .filter(|c| !self.parents.contains_key(*c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concept::normalize;

    #[test]
    fn parents_and_children_mirror_each_other() {
        let index = TaxonomyIndex::build(&RelationStore::plants());
        let rose = normalize("rose");
        let rosaceae = normalize("rosaceae");
        assert!(index.parents_of(&rose).any(|p| p == &rosaceae));
        assert!(index.children_of(&rosaceae).any(|c| c == &rose));
    }

    #[test]
    fn entity_is_the_only_root() {
        let index = TaxonomyIndex::build(&RelationStore::plants());
        let roots: Vec<_> = index.roots().collect();
        assert_eq!(roots, vec![&normalize("entity")]);
    }

    #[test]
    fn leaf_detection() {
        let index = TaxonomyIndex::build(&RelationStore::plants());
        assert!(index.is_leaf(&normalize("rose")));
        assert!(!index.is_leaf(&normalize("dicot")));
    }
}
