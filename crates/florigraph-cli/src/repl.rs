//! A small interactive shell over the reasoning engines.
//!
//! By default we use `rustyline` for line editing and history. A minimal
//! stdin-based fallback exists behind `--no-default-features`.
//!
//! Plain lines are evaluated as free-text hypotheses; `:`-prefixed commands
//! hit the individual engines directly.

use anyhow::Result;
use colored::Colorize;
use florigraph_ontology::{normalize, Ontology};
use florigraph_reason::{
    audit, explain, find_path, render_path, HypothesisEvaluator, HypothesisOutcome,
};
#[cfg(not(feature = "repl-rustyline"))]
use std::io::{self, Write};

pub fn cmd_repl(ontology: &Ontology) -> Result<()> {
    #[cfg(feature = "repl-rustyline")]
    {
        cmd_repl_rustyline(ontology)
    }
    #[cfg(not(feature = "repl-rustyline"))]
    {
        cmd_repl_simple(ontology)
    }
}

#[cfg(feature = "repl-rustyline")]
fn cmd_repl_rustyline(ontology: &Ontology) -> Result<()> {
    banner();
    let mut editor = rustyline::DefaultEditor::new()?;
    loop {
        match editor.readline(&format!("{} ", "florigraph>".cyan().bold())) {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);
                if !dispatch(ontology, &line) {
                    break;
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted)
            | Err(rustyline::error::ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

#[cfg(not(feature = "repl-rustyline"))]
fn cmd_repl_simple(ontology: &Ontology) -> Result<()> {
    banner();
    let stdin = io::stdin();
    loop {
        print!("{} ", "florigraph>".cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !dispatch(ontology, line) {
            break;
        }
    }
    Ok(())
}

fn banner() {
    println!("{}", "Florigraph REPL".green().bold());
    println!("Type a hypothesis (e.g. `rose is a dicot`), `help`, or `exit`.\n");
}

/// Handle one line. Returns false when the shell should exit.
fn dispatch(ontology: &Ontology, line: &str) -> bool {
    match line {
        "exit" | "quit" | ":q" => return false,
        "help" | "?" => {
            print_help();
            return true;
        }
        ":report" => {
            println!("{}", audit(ontology, &normalize("plant")).render());
            return true;
        }
        _ => {}
    }

    if let Some(rest) = line.strip_prefix(':') {
        let tokens: Vec<&str> = rest.split_whitespace().collect();
        match tokens.as_slice() {
            ["explain", a, b] => println!("{}", explain(ontology, a, b)),
            ["path", a, b] => {
                let path = find_path(ontology, &normalize(a), &normalize(b));
                println!("{}", render_path(&path));
            }
            _ => {
                eprintln!(
                    "{} unknown command; multi-word concepts use underscores (see `help`)",
                    "error:".red().bold()
                );
            }
        }
        return true;
    }

    let outcome = HypothesisEvaluator::new().evaluate(ontology, line);
    match outcome {
        HypothesisOutcome::Verdict {
            intent,
            truth,
            explanation,
        } => {
            let verdict = if truth {
                "true".green().bold()
            } else {
                "false".red().bold()
            };
            println!("{} ({}): {verdict}", "hypothesis".bold(), intent.as_str());
            if let Some(explanation) = explanation {
                println!("{explanation}");
            }
        }
        HypothesisOutcome::NotUnderstood { examples } => {
            println!("{} not a hypothesis I can read. Examples:", "note:".yellow().bold());
            for example in examples {
                println!("  {example}");
            }
        }
    }
    true
}

fn print_help() {
    println!("Commands:");
    println!("  <free text>      evaluate a hypothesis (e.g. `seed is part of fruit`)");
    println!("  :explain A B     shortest derivation between two concepts");
    println!("  :path A B        raw labeled path between two concepts");
    println!("  :report          knowledge-base requirements report");
    println!("  help, exit");
}
