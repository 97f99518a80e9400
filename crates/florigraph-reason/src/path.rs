//! Shortest labeled derivation paths.
//!
//! Breadth-first search over the full merged multigraph, any relation. All
//! edges are unweighted, so BFS minimizes hop count; ties between
//! equal-length paths resolve by the graph's sorted edge order, making the
//! chosen path reproducible.

use florigraph_ontology::{ConceptId, EdgeLabel, Ontology};
use serde::Serialize;
use std::collections::{HashSet, VecDeque};

/// One step of a derivation path: a node and the label of the edge taken
/// out of it. The final step carries no label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathStep {
    pub node: ConceptId,
    pub label: Option<EdgeLabel>,
}

/// Shortest labeled path from `src` to `dst`, or empty if disconnected.
///
/// `src == dst` yields the trivial single-node path. A concept absent from
/// every relation has no edges and is simply unreachable; that is an
/// ordinary empty result, not an error.
pub fn find_path(ontology: &Ontology, src: &ConceptId, dst: &ConceptId) -> Vec<PathStep> {
    if src == dst {
        return vec![PathStep {
            node: src.clone(),
            label: None,
        }];
    }

    let graph = ontology.graph();
    let mut visited: HashSet<&ConceptId> = HashSet::from([src]);
    let mut queue: VecDeque<(&ConceptId, Vec<PathStep>)> = VecDeque::from([(src, Vec::new())]);

    while let Some((current, prefix)) = queue.pop_front() {
        for edge in graph.outgoing(current) {
            if visited.contains(&edge.target) {
                continue;
            }
            let mut path = prefix.clone();
            path.push(PathStep {
                node: edge.source.clone(),
                label: Some(edge.label),
            });
            if edge.target == *dst {
                path.push(PathStep {
                    node: edge.target.clone(),
                    label: None,
                });
                return path;
            }
            visited.insert(&edge.target);
            queue.push_back((&edge.target, path));
        }
    }

    Vec::new()
}
