//! Integration tests for the complete Florigraph pipeline.
//!
//! These tests verify end-to-end behavior across crates on the builtin
//! plants knowledge base: store → index/graph construction → closure,
//! path, explanation, and hypothesis queries.
//!
//! Run with: cargo test --test integration_tests

use florigraph_ontology::{normalize, EdgeLabel, Ontology, OntologyError, RelationStore};
use florigraph_reason::{
    explain, find_path, grows_in, is_part_of, is_subclass_of, render_path, HypothesisEvaluator,
    HypothesisIntent, HypothesisOutcome, NO_RELATIONSHIP,
};
use std::io::Write;

// ============================================================================
// Taxonomy closure and the eight-node derivation
// ============================================================================

#[test]
fn rose_is_an_organism_with_the_full_chain() {
    let ontology = Ontology::plants();
    assert!(is_subclass_of(
        &ontology,
        &normalize("rose"),
        &normalize("organism")
    ));

    let path = find_path(&ontology, &normalize("rose"), &normalize("entity"));
    let nodes: Vec<&str> = path.iter().map(|s| s.node.as_str()).collect();
    assert_eq!(
        nodes,
        vec![
            "rose",
            "rosaceae",
            "dicot",
            "flowering",
            "seedplant",
            "plant",
            "organism",
            "entity"
        ]
    );
    assert_eq!(path.len(), 8);
}

#[test]
fn pine_is_not_a_rose_but_shares_its_habitat() {
    // The fixture connects pine and rose non-taxonomically: both grow in
    // the temperate forest, so the path is the 2-hop habitat route rather
    // than empty.
    let ontology = Ontology::plants();
    assert!(!is_subclass_of(
        &ontology,
        &normalize("pine"),
        &normalize("rose")
    ));

    let path = find_path(&ontology, &normalize("pine"), &normalize("rose"));
    let nodes: Vec<&str> = path.iter().map(|s| s.node.as_str()).collect();
    assert_eq!(nodes, vec!["pine", "temperate_forest", "rose"]);
    assert_eq!(path[0].label, Some(EdgeLabel::GrowsIn));
    assert_eq!(path[1].label, Some(EdgeLabel::HabitatOf));
}

// ============================================================================
// Part-whole closure vs. flat habitat facts
// ============================================================================

#[test]
fn part_of_closes_but_grows_in_does_not() {
    let ontology = Ontology::plants();
    // seed part_of fruit, fruit part_of plant: two-hop closure.
    assert!(is_part_of(
        &ontology,
        &normalize("seed"),
        &normalize("plant")
    ));
    // No direct habitat fact for seed, even though pine has one.
    assert!(grows_in(
        &ontology,
        &normalize("pine"),
        &normalize("temperate_forest")
    ));
    assert!(!grows_in(
        &ontology,
        &normalize("seed"),
        &normalize("temperate_forest")
    ));
}

// ============================================================================
// Explanations
// ============================================================================

#[test]
fn explain_reconstructs_the_find_path_sequence() {
    let ontology = Ontology::plants();
    let path = find_path(&ontology, &normalize("seed"), &normalize("plant"));
    assert!(!path.is_empty());

    let rendered = render_path(&path);
    let chain: Vec<&str> = rendered
        .lines()
        .next()
        .unwrap()
        .trim_start_matches("Path: ")
        .split(" → ")
        .collect();
    let expected: Vec<&str> = path.iter().map(|s| s.node.as_str()).collect();
    assert_eq!(chain, expected);

    let negative = explain(&ontology, "seed", "granite");
    assert!(negative.contains(NO_RELATIONSHIP));
}

// ============================================================================
// Hypotheses
// ============================================================================

#[test]
fn hypothesis_two_hops_up_the_hierarchy() {
    let ontology = Ontology::plants();
    let evaluator = HypothesisEvaluator::new();

    match evaluator.evaluate(&ontology, "rose is a dicot") {
        HypothesisOutcome::Verdict {
            intent,
            truth,
            explanation,
        } => {
            assert_eq!(intent, HypothesisIntent::IsA);
            assert!(truth);
            assert!(explanation.unwrap().contains("rose → rosaceae → dicot"));
        }
        HypothesisOutcome::NotUnderstood { .. } => unreachable!("should match the is_a rule"),
    }
}

#[test]
fn unmatched_hypothesis_is_not_understood_never_a_panic() {
    let ontology = Ontology::plants();
    let evaluator = HypothesisEvaluator::new();
    let outcome = evaluator.evaluate(&ontology, "do roses dream of electric bees");
    assert!(!outcome.understood());
    match outcome {
        HypothesisOutcome::NotUnderstood { examples } => assert!(!examples.is_empty()),
        HypothesisOutcome::Verdict { .. } => unreachable!(),
    }
}

// ============================================================================
// Knowledge-base configuration
// ============================================================================

#[test]
fn kb_document_round_trips_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "is_a": [["oak", "tree"], ["tree", "plant"]],
            "grows_in": [["oak", "forest"]],
            "instances": {{"oak_1": "oak"}}
        }}"#
    )
    .unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    let ontology = Ontology::from_json_str(&text).unwrap();
    assert!(is_subclass_of(
        &ontology,
        &normalize("oak"),
        &normalize("plant")
    ));
    assert!(grows_in(&ontology, &normalize("oak"), &normalize("forest")));
}

#[test]
fn cyclic_taxonomy_is_rejected_at_construction() {
    let store =
        RelationStore::from_json_str(r#"{"is_a": [["a", "b"], ["b", "c"], ["c", "a"]]}"#).unwrap();
    let err = Ontology::new(store).unwrap_err();
    assert!(matches!(err, OntologyError::TaxonomyCycle(_)));
}
