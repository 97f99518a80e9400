//! Free-text hypothesis evaluation.
//!
//! A small set of deterministic textual templates, not an LLM parser: each
//! rule is a whole-input pattern with two captured operand phrases, bound to
//! one relation intent. The first matching rule wins.
//!
//! Rule order is a hard invariant, not a stylistic choice: the generic
//! `is a` connective is a substring of how the other intents are phrased
//! (`is part of`, `is an instance…`), so the `IsA` rules must come last.
//! Reordering silently changes which relation a sentence is read as.

use crate::closure::{grows_in, has_part, is_kind_of, is_part_of};
use crate::explain::explain;
use florigraph_ontology::{normalize, Ontology};
use regex::Regex;
use serde::Serialize;

/// The four relation intents a statement can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HypothesisIntent {
    PartOf,
    HasPart,
    GrowsIn,
    IsA,
}

impl HypothesisIntent {
    pub fn as_str(self) -> &'static str {
        match self {
            HypothesisIntent::PartOf => "part_of",
            HypothesisIntent::HasPart => "has_part",
            HypothesisIntent::GrowsIn => "grows_in",
            HypothesisIntent::IsA => "is_a",
        }
    }
}

/// Outcome of evaluating a statement. Never an error: an unmatched sentence
/// is an ordinary [`HypothesisOutcome::NotUnderstood`] value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum HypothesisOutcome {
    /// The statement matched a rule and was checked against the ontology.
    /// `explanation` is present only for true verdicts.
    Verdict {
        intent: HypothesisIntent,
        truth: bool,
        explanation: Option<String>,
    },
    /// No rule matched; `examples` shows phrasings that would.
    NotUnderstood { examples: Vec<String> },
}

impl HypothesisOutcome {
    pub fn understood(&self) -> bool {
        matches!(self, HypothesisOutcome::Verdict { .. })
    }

    pub fn truth(&self) -> Option<bool> {
        match self {
            HypothesisOutcome::Verdict { truth, .. } => Some(*truth),
            HypothesisOutcome::NotUnderstood { .. } => None,
        }
    }

    pub fn intent(&self) -> Option<HypothesisIntent> {
        match self {
            HypothesisOutcome::Verdict { intent, .. } => Some(*intent),
            HypothesisOutcome::NotUnderstood { .. } => None,
        }
    }
}

/// Example phrasings returned with a not-understood outcome.
pub const EXAMPLE_HYPOTHESES: &[&str] = &[
    "rose is a dicot",
    "seed is part of fruit",
    "apple has part flower",
    "wheat grows in steppe",
    "rose is living",
];

/// Ordered template table. Evaluate rules top to bottom; `IsA` last.
pub struct HypothesisEvaluator {
    rules: Vec<(Regex, HypothesisIntent)>,
}

impl HypothesisEvaluator {
    pub fn new() -> Self {
        // Case-insensitive, anchored to the whole input, two non-greedy
        // operand captures. The patterns are literals; compilation cannot
        // fail on them.
        let table: &[(&str, HypothesisIntent)] = &[
            (
                r"(?i)^\s*(.+?)\s+is\s+(?:a\s+)?part\s+of\s+(.+?)\s*$",
                HypothesisIntent::PartOf,
            ),
            (
                r"(?i)^\s*(.+?)\s+has\s+(?:a\s+)?part\s+(.+?)\s*$",
                HypothesisIntent::HasPart,
            ),
            (r"(?i)^\s*(.+?)\s+contains\s+(.+?)\s*$", HypothesisIntent::HasPart),
            (
                r"(?i)^\s*(.+?)\s+grows\s+in\s+(.+?)\s*$",
                HypothesisIntent::GrowsIn,
            ),
            // Generic connective: must stay last (see module docs).
            (r"(?i)^\s*(.+?)\s+is\s+an?\s+(.+?)\s*$", HypothesisIntent::IsA),
            (r"(?i)^\s*(.+?)\s+is\s+(.+?)\s*$", HypothesisIntent::IsA),
        ];

        let rules = table
            .iter()
            .map(|&(pattern, intent)| {
                (
                    Regex::new(pattern).expect("builtin hypothesis pattern"),
                    intent,
                )
            })
            .collect();
        Self { rules }
    }

    /// Classify a statement, check it, and attach a derivation when true.
    pub fn evaluate(&self, ontology: &Ontology, text: &str) -> HypothesisOutcome {
        for (pattern, intent) in &self.rules {
            let Some(caps) = pattern.captures(text) else {
                continue;
            };
            let subject = normalize(&caps[1]);
            let mut object = normalize(&caps[2]);

            let truth = match intent {
                HypothesisIntent::PartOf => is_part_of(ontology, &subject, &object),
                HypothesisIntent::HasPart => has_part(ontology, &subject, &object),
                HypothesisIntent::GrowsIn => grows_in(ontology, &subject, &object),
                HypothesisIntent::IsA => {
                    // Descriptive aliases apply to the class side only, and
                    // only is_a questions resolve an instance subject.
                    object = ontology.store().resolve_alias(&object).clone();
                    is_kind_of(ontology, &subject, &object)
                }
            };

            tracing::debug!(intent = intent.as_str(), %subject, %object, truth, "hypothesis checked");

            // Explain against the operands actually checked, so an aliased
            // class still gets a real derivation.
            let explanation = truth.then(|| explain(ontology, subject.as_str(), object.as_str()));
            return HypothesisOutcome::Verdict {
                intent: *intent,
                truth,
                explanation,
            };
        }

        HypothesisOutcome::NotUnderstood {
            examples: EXAMPLE_HYPOTHESES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for HypothesisEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
