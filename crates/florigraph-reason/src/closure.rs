//! Per-relation boolean predicates.
//!
//! Each predicate is a breadth-first search restricted to one relation's own
//! edge set, never the merged multigraph. Two of the three relations close
//! transitively; the habitat relation deliberately does not:
//!
//! - `is_a` and `part_of` compose over hops (a subclass of a subclass is a
//!   subclass; a part of a part is a part),
//! - `grows_in` is a flat fact table (habitats are leaves, not a hierarchy).
//!
//! That asymmetry is a domain decision and is preserved here.
//!
//! All searches carry a visited set, so they terminate on any input; on a
//! validated ontology the taxonomy is additionally known to be acyclic.

use florigraph_ontology::{ConceptId, Ontology};
use std::collections::{HashSet, VecDeque};

/// True iff `child` equals `ancestor` or `ancestor` is reachable from
/// `child` by direct-parent hops (upward only).
pub fn is_subclass_of(ontology: &Ontology, child: &ConceptId, ancestor: &ConceptId) -> bool {
    let mut visited: HashSet<&ConceptId> = HashSet::new();
    let mut queue: VecDeque<&ConceptId> = VecDeque::from([child]);

    while let Some(current) = queue.pop_front() {
        if current == ancestor {
            return true;
        }
        for parent in ontology.taxonomy().parents_of(current) {
            if visited.insert(parent) {
                queue.push_back(parent);
            }
        }
    }
    false
}

/// Transitive closure of `part_of`, part → whole direction.
pub fn is_part_of(ontology: &Ontology, part: &ConceptId, whole: &ConceptId) -> bool {
    let mut visited: HashSet<&ConceptId> = HashSet::new();
    let mut queue: VecDeque<&ConceptId> = VecDeque::from([part]);

    while let Some(current) = queue.pop_front() {
        if current == whole {
            return true;
        }
        for (p, w) in ontology.store().part_of() {
            if p == current && visited.insert(w) {
                queue.push_back(w);
            }
        }
    }
    false
}

/// Transitive closure of `part_of`, whole → part direction.
pub fn has_part(ontology: &Ontology, whole: &ConceptId, part: &ConceptId) -> bool {
    let mut visited: HashSet<&ConceptId> = HashSet::new();
    let mut queue: VecDeque<&ConceptId> = VecDeque::from([whole]);

    while let Some(current) = queue.pop_front() {
        if current == part {
            return true;
        }
        for (p, w) in ontology.store().part_of() {
            if w == current && visited.insert(p) {
                queue.push_back(p);
            }
        }
    }
    false
}

/// Direct habitat fact only. Not transitive.
pub fn grows_in(ontology: &Ontology, class: &ConceptId, habitat: &ConceptId) -> bool {
    ontology.store().grows_in_direct(class, habitat)
}

/// Instance-aware taxonomy check: the subject may be a class or an instance.
///
/// An instance is answered via its class's position in the hierarchy. Only
/// `is_a` questions resolve instances; the other relations are defined over
/// classes.
pub fn is_kind_of(ontology: &Ontology, subject: &ConceptId, class: &ConceptId) -> bool {
    if is_subclass_of(ontology, subject, class) {
        return true;
    }
    match ontology.store().class_of_instance(subject) {
        Some(subject_class) => is_subclass_of(ontology, subject_class, class),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use florigraph_ontology::normalize;
    use proptest::prelude::*;

    fn plants() -> Ontology {
        Ontology::plants()
    }

    #[test]
    fn subclass_walks_the_whole_chain() {
        let ontology = plants();
        assert!(is_subclass_of(
            &ontology,
            &normalize("rose"),
            &normalize("organism")
        ));
        assert!(is_subclass_of(
            &ontology,
            &normalize("rose"),
            &normalize("entity")
        ));
        assert!(!is_subclass_of(
            &ontology,
            &normalize("pine"),
            &normalize("rose")
        ));
        // Upward only: a parent is not a subclass of its child.
        assert!(!is_subclass_of(
            &ontology,
            &normalize("organism"),
            &normalize("rose")
        ));
    }

    #[test]
    fn subclass_is_transitive_exhaustively() {
        let ontology = plants();
        let concepts: Vec<_> = ontology.taxonomy().concepts().cloned().collect();
        for x in &concepts {
            for y in &concepts {
                if !is_subclass_of(&ontology, x, y) {
                    continue;
                }
                for z in &concepts {
                    if is_subclass_of(&ontology, y, z) {
                        assert!(
                            is_subclass_of(&ontology, x, z),
                            "{x} ⊑ {y} ⊑ {z} but not {x} ⊑ {z}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn part_of_closes_over_two_hops() {
        let ontology = plants();
        // seed part_of fruit, fruit part_of plant
        assert!(is_part_of(
            &ontology,
            &normalize("seed"),
            &normalize("plant")
        ));
        assert!(has_part(&ontology, &normalize("plant"), &normalize("seed")));
        assert!(!is_part_of(
            &ontology,
            &normalize("plant"),
            &normalize("seed")
        ));
    }

    #[test]
    fn grows_in_is_not_transitive() {
        let ontology = plants();
        assert!(grows_in(
            &ontology,
            &normalize("pine"),
            &normalize("temperate_forest")
        ));
        // seed is part of plants that grow in the forest, but that is not a
        // habitat fact.
        assert!(!grows_in(
            &ontology,
            &normalize("seed"),
            &normalize("temperate_forest")
        ));
        // Nor does it follow the taxonomy upward.
        assert!(!grows_in(
            &ontology,
            &normalize("conifer"),
            &normalize("temperate_forest")
        ));
    }

    #[test]
    fn instances_answer_through_their_class() {
        let ontology = plants();
        assert!(is_kind_of(
            &ontology,
            &normalize("rose_1"),
            &normalize("organism")
        ));
        assert!(is_kind_of(&ontology, &normalize("rose_1"), &normalize("rose")));
        assert!(!is_kind_of(
            &ontology,
            &normalize("rose_1"),
            &normalize("conifer")
        ));
    }

    proptest! {
        #[test]
        fn subclass_is_reflexive(idx in 0usize..20) {
            let ontology = plants();
            let concepts: Vec<_> = ontology.taxonomy().concepts().cloned().collect();
            let x = &concepts[idx % concepts.len()];
            prop_assert!(is_subclass_of(&ontology, x, x));
        }
    }
}
