//! Florigraph ontology: immutable relation tables and derived structures.
//!
//! Construction runs one way: relation store → taxonomy index → labeled
//! multigraph. The result is an [`Ontology`] context object that every query
//! engine borrows. Nothing is mutated after construction, so contexts are
//! freely shared across threads and multiple independent ontologies can
//! coexist (no ambient global state).
//!
//! The taxonomic relation must be acyclic. That is a construction-time
//! invariant: [`Ontology::new`] validates it explicitly and refuses cyclic
//! configurations instead of assuming well-formed input.

pub mod concept;
pub mod graph;
pub mod index;
pub mod store;

pub use concept::{normalize, ConceptId};
pub use graph::{EdgeLabel, LabeledEdge, LabeledGraph};
pub use index::TaxonomyIndex;
pub use store::{KbConfig, OntologyError, RelationKind, RelationStore};

/// The immutable query context: base tables plus derived structures.
#[derive(Debug, Clone)]
pub struct Ontology {
    store: RelationStore,
    taxonomy: TaxonomyIndex,
    graph: LabeledGraph,
}

impl Ontology {
    /// Derive the taxonomy index and merged multigraph from a store.
    ///
    /// Fails with [`OntologyError::TaxonomyCycle`] if `is_a` is cyclic.
    pub fn new(store: RelationStore) -> Result<Self, OntologyError> {
        let taxonomy = TaxonomyIndex::build(&store);
        check_acyclic(&taxonomy)?;
        let graph = LabeledGraph::build(&store);
        Ok(Self {
            store,
            taxonomy,
            graph,
        })
    }

    /// The builtin plants knowledge base.
    pub fn plants() -> Self {
        // The fixture is acyclic by construction; validation still runs and
        // an Err here would be a bug in the fixture itself.
        match Self::new(RelationStore::plants()) {
            Ok(ontology) => ontology,
            Err(e) => unreachable!("builtin plants fixture failed validation: {e}"),
        }
    }

    /// Build from a JSON knowledge-base document.
    pub fn from_json_str(text: &str) -> Result<Self, OntologyError> {
        Self::new(RelationStore::from_json_str(text)?)
    }

    pub fn store(&self) -> &RelationStore {
        &self.store
    }

    pub fn taxonomy(&self) -> &TaxonomyIndex {
        &self.taxonomy
    }

    pub fn graph(&self) -> &LabeledGraph {
        &self.graph
    }
}

/// Depth-first cycle check over child→parent edges.
///
/// A concept is revisited while its own traversal is still open iff the
/// taxonomy contains a cycle through it.
fn check_acyclic(taxonomy: &TaxonomyIndex) -> Result<(), OntologyError> {
    use std::collections::BTreeMap;

    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Open,
        Closed,
    }

    enum Step<'a> {
        Enter(&'a ConceptId),
        Exit(&'a ConceptId),
    }

    let mut marks: BTreeMap<&ConceptId, Mark> = BTreeMap::new();
    for root in taxonomy.concepts() {
        if marks.contains_key(root) {
            continue;
        }
        let mut stack = vec![Step::Enter(root)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(node) => match marks.get(node) {
                    Some(Mark::Open) => {
                        tracing::warn!(concept = %node, "rejecting cyclic taxonomy");
                        return Err(OntologyError::TaxonomyCycle(node.clone()));
                    }
                    Some(Mark::Closed) => {}
                    None => {
                        marks.insert(node, Mark::Open);
                        stack.push(Step::Exit(node));
                        for parent in taxonomy.parents_of(node) {
                            stack.push(Step::Enter(parent));
                        }
                    }
                },
                Step::Exit(node) => {
                    marks.insert(node, Mark::Closed);
                }
            }
        }
    }
    Ok(())
}
