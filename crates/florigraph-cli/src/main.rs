//! Florigraph CLI
//!
//! Thin front end over the reasoning engines: collects operand text or a
//! free-text hypothesis, invokes the core, and renders the result. All
//! decision logic lives in `florigraph-reason`; the knowledge base is fixed
//! configuration chosen at startup (builtin plants ontology, or a JSON
//! document via `--kb`).

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use florigraph_ontology::{normalize, ConceptId, Ontology};
use florigraph_reason::{
    audit, explain, find_path, grows_in, has_part, is_kind_of, is_part_of, render_path,
    HypothesisEvaluator, HypothesisOutcome,
};

mod repl;

#[derive(Parser)]
#[command(name = "florigraph")]
#[command(
    author,
    version,
    about = "Relationship queries over a plant ontology, with derivation paths"
)]
struct Cli {
    /// Knowledge-base document (JSON). Defaults to the builtin plants
    /// ontology.
    #[arg(long, global = true)]
    kb: Option<PathBuf>,

    /// Emit machine-readable JSON where the command supports it.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Explain the shortest derivation connecting two concepts, across any
    /// relation.
    Explain { a: String, b: String },

    /// Check one specific relation between two concepts.
    Check {
        #[command(subcommand)]
        relation: CheckCommands,
    },

    /// Shortest labeled path between two concepts, as raw steps.
    Path { a: String, b: String },

    /// Evaluate a free-text hypothesis (e.g. `rose is a dicot`).
    Hypothesis {
        /// The statement; multiple words are joined with spaces.
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Structural requirements report for the loaded knowledge base.
    Report,

    /// Interactive shell.
    Repl,
}

#[derive(Subcommand)]
enum CheckCommands {
    /// Is A a subclass (or an instance) of class B?
    IsA { a: String, b: String },
    /// Is A transitively a part of B?
    PartOf { a: String, b: String },
    /// Does A transitively have part B?
    HasPart { a: String, b: String },
    /// Does A grow in habitat B? (direct facts only)
    GrowsIn { a: String, b: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ontology = load_ontology(cli.kb.as_deref())?;

    match cli.command {
        Commands::Explain { a, b } => {
            let (a, b) = operands(&a, &b)?;
            println!("{}", explain(&ontology, a.as_str(), b.as_str()));
        }
        Commands::Check { relation } => run_check(&ontology, relation)?,
        Commands::Path { a, b } => {
            let (a, b) = operands(&a, &b)?;
            let path = find_path(&ontology, &a, &b);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&path)?);
            } else {
                println!("{}", render_path(&path));
            }
        }
        Commands::Hypothesis { text } => {
            let statement = text.join(" ");
            if statement.trim().is_empty() {
                bail!("empty hypothesis; try e.g. `rose is a dicot`");
            }
            let outcome = HypothesisEvaluator::new().evaluate(&ontology, &statement);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print_outcome(&statement, &outcome);
            }
        }
        Commands::Report => {
            let report = audit(&ontology, &normalize("plant"));
            println!("{}", report.render());
        }
        Commands::Repl => repl::cmd_repl(&ontology)?,
    }

    Ok(())
}

fn run_check(ontology: &Ontology, relation: CheckCommands) -> Result<()> {
    let (question, truth, a, b) = match &relation {
        CheckCommands::IsA { a, b } => {
            let (a, b) = operands(a, b)?;
            // Descriptive aliases (`living` → `organism`) apply to the
            // class side of is_a checks only.
            let b = ontology.store().resolve_alias(&b).clone();
            let truth = is_kind_of(ontology, &a, &b);
            (format!("{a} is a {b}"), truth, a, b)
        }
        CheckCommands::PartOf { a, b } => {
            let (a, b) = operands(a, b)?;
            let truth = is_part_of(ontology, &a, &b);
            (format!("{a} is part of {b}"), truth, a, b)
        }
        CheckCommands::HasPart { a, b } => {
            let (a, b) = operands(a, b)?;
            let truth = has_part(ontology, &a, &b);
            (format!("{a} has part {b}"), truth, a, b)
        }
        CheckCommands::GrowsIn { a, b } => {
            let (a, b) = operands(a, b)?;
            let truth = grows_in(ontology, &a, &b);
            (format!("{a} grows in {b}"), truth, a, b)
        }
    };

    print_verdict(&question, truth);
    if truth {
        // The derivation may use any relation, not just the one checked.
        println!("{}", explain(ontology, a.as_str(), b.as_str()));
    }
    Ok(())
}

fn print_verdict(question: &str, truth: bool) {
    let verdict = if truth {
        "true".green().bold()
    } else {
        "false".red().bold()
    };
    println!("{}: {verdict}", question.bold());
}

fn print_outcome(statement: &str, outcome: &HypothesisOutcome) {
    match outcome {
        HypothesisOutcome::Verdict {
            intent,
            truth,
            explanation,
        } => {
            print_verdict(&format!("hypothesis ({intent})", intent = intent.as_str()), *truth);
            println!("  {statement}");
            if let Some(explanation) = explanation {
                println!("{explanation}");
            }
        }
        HypothesisOutcome::NotUnderstood { examples } => {
            println!(
                "{} could not read that as a hypothesis. Examples:",
                "note:".yellow().bold()
            );
            for example in examples {
                println!("  {example}");
            }
        }
    }
}

/// Normalize both operands, rejecting empty input before it reaches the
/// core.
fn operands(a: &str, b: &str) -> Result<(ConceptId, ConceptId)> {
    let a = normalize(a);
    let b = normalize(b);
    if a.is_empty() || b.is_empty() {
        bail!("operands must be non-empty concept names");
    }
    Ok((a, b))
}

fn load_ontology(kb: Option<&Path>) -> Result<Ontology> {
    match kb {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading knowledge base {}", path.display()))?;
            let ontology = Ontology::from_json_str(&text)
                .with_context(|| format!("loading knowledge base {}", path.display()))?;
            tracing::debug!(kb = %path.display(), "loaded knowledge base");
            Ok(ontology)
        }
        None => Ok(Ontology::plants()),
    }
}
