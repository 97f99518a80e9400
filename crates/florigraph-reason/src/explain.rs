//! Human-readable derivations.
//!
//! Pure rendering over paths from [`crate::path`]: the node chain joined by
//! arrows plus a numbered step list, one line per hop, each hop stated with
//! the natural-language phrase of its edge label. Rendering never fails;
//! the empty path renders as a fixed negative statement.

use crate::path::{find_path, PathStep};
use florigraph_ontology::{normalize, ConceptId, Ontology};
use std::fmt::Write;

/// Fixed statement for the empty path.
pub const NO_RELATIONSHIP: &str = "No relationship found.";

/// Render a derivation path as a chain plus numbered steps.
///
/// The empty path yields [`NO_RELATIONSHIP`].
pub fn render_path(path: &[PathStep]) -> String {
    if path.is_empty() {
        return NO_RELATIONSHIP.to_string();
    }

    let chain = path
        .iter()
        .map(|step| step.node.as_str())
        .collect::<Vec<_>>()
        .join(" → ");

    let mut out = format!("Path: {chain}");
    if path.len() > 1 {
        out.push_str("\nSteps:");
        for (i, window) in path.windows(2).enumerate() {
            let phrase = match window[0].label {
                Some(label) => label.phrase(),
                // A missing label mid-path cannot arise from find_path, but
                // the formatter stays total anyway.
                None => "relates to",
            };
            let _ = write!(
                out,
                "\n  {}) {} -({phrase})-> {}",
                i + 1,
                window[0].node,
                window[1].node
            );
        }
    }
    out
}

/// Answer "is `a` related to `b` at all?" with a derivation.
///
/// Wraps [`find_path`] and [`render_path`]; operands are normalized first.
pub fn explain(ontology: &Ontology, a: &str, b: &str) -> String {
    let src = normalize(a);
    let dst = normalize(b);
    let path = find_path(ontology, &src, &dst);
    explain_path(&src, &dst, &path)
}

fn explain_path(src: &ConceptId, dst: &ConceptId, path: &[PathStep]) -> String {
    if path.is_empty() {
        return format!("Is \"{src}\" related to \"{dst}\"? — False. {NO_RELATIONSHIP}");
    }
    format!(
        "Is \"{src}\" related to \"{dst}\"? — True.\n{}",
        render_path(path)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_chain_and_numbered_steps() {
        let ontology = Ontology::plants();
        let path = find_path(&ontology, &normalize("seed"), &normalize("plant"));
        let text = render_path(&path);
        assert!(text.starts_with("Path: seed → fruit → plant"));
        assert!(text.contains("1) seed -(is part of)-> fruit"));
        assert!(text.contains("2) fruit -(is part of)-> plant"));
    }

    #[test]
    fn chain_matches_find_path_nodes() {
        let ontology = Ontology::plants();
        let path = find_path(&ontology, &normalize("rose"), &normalize("entity"));
        let text = render_path(&path);
        let chain_line = text.lines().next().unwrap();
        let rendered: Vec<&str> = chain_line
            .trim_start_matches("Path: ")
            .split(" → ")
            .collect();
        let expected: Vec<&str> = path.iter().map(|s| s.node.as_str()).collect();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn empty_path_is_the_fixed_negative_statement() {
        assert_eq!(render_path(&[]), NO_RELATIONSHIP);
        let ontology = Ontology::plants();
        let text = explain(&ontology, "rose", "granite");
        assert!(text.contains("False"));
        assert!(text.contains(NO_RELATIONSHIP));
    }

    #[test]
    fn trivial_path_renders_without_steps() {
        let ontology = Ontology::plants();
        let text = explain(&ontology, "rose", "Rose");
        assert!(text.contains("True"));
        assert!(text.contains("Path: rose"));
        assert!(!text.contains("Steps:"));
    }
}
