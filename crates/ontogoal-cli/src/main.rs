//! Ontogoal CLI
//!
//! Command-line front end for the goal-driven relation evaluator:
//! - `query`: evaluate one goal literal against a `.onto` taxonomy and an
//!   optional N-Triples fact file
//! - `relations`: list the relations the standard dispatch table answers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use ontogoal_dl::TaxonomyEngine;
use ontogoal_model::Binding;
use ontogoal_reasoner::{GoalReasoner, RelationTable};
use ontogoal_store::{load_ntriples, MemoryGraph, PrefixMap};

mod literal;

#[derive(Parser)]
#[command(name = "ontogoal")]
#[command(
    author,
    version,
    about = "Goal-driven relation queries over a taxonomy and a fact graph"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one goal literal, e.g. `dfl:hasDisposition(dfl:Cup1, ?d)`.
    ///
    /// Arguments starting with `?` are variables; each solution binds every
    /// variable in the goal. A fully-bound goal prints `yes` or `no`.
    Query {
        /// Goal literal (quote it in your shell).
        goal: String,

        /// Taxonomy declarations (`.onto` file).
        #[arg(long)]
        taxonomy: PathBuf,

        /// Facts as N-Triples (`rdf:type` assertions and plain triples).
        #[arg(long)]
        facts: Option<PathBuf>,

        /// Emit solutions as a JSON array instead of text.
        #[arg(long)]
        json: bool,
    },

    /// List the relations the standard dispatch table answers.
    Relations,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Query {
            goal,
            taxonomy,
            facts,
            json,
        } => cmd_query(&goal, &taxonomy, facts.as_deref(), json),
        Commands::Relations => {
            cmd_relations();
            Ok(())
        }
    }
}

fn cmd_query(literal: &str, taxonomy: &Path, facts: Option<&Path>, json: bool) -> Result<()> {
    let goal = literal::parse_literal(literal)?;

    let resolver = PrefixMap::standard();
    let text = fs::read_to_string(taxonomy)
        .with_context(|| format!("reading taxonomy {}", taxonomy.display()))?;
    let dl = TaxonomyEngine::from_onto(&text, &resolver)
        .with_context(|| format!("loading taxonomy {}", taxonomy.display()))?;

    let mut graph = MemoryGraph::new();
    if let Some(path) = facts {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading facts {}", path.display()))?;
        let loaded = load_ntriples(&mut graph, &text)
            .with_context(|| format!("loading facts {}", path.display()))?;
        tracing::debug!(triples = loaded, "loaded fact graph");
    }

    let reasoner = GoalReasoner::new(graph, dl, resolver)?;
    let mut solutions: Vec<Binding> = Vec::new();
    reasoner.evaluate(&goal, &mut |binding| solutions.push(binding))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&solutions)?);
        return Ok(());
    }

    // A fully-bound goal yields at most one empty binding.
    if solutions.len() == 1 && solutions[0].is_empty() {
        println!("{}", "yes".green().bold());
    } else if solutions.is_empty() {
        println!("{}", "no solutions".red());
    } else {
        for binding in &solutions {
            let mut pairs: Vec<_> = binding
                .iter()
                .map(|(var, value)| format!("{} = {}", var, value.as_str()))
                .collect();
            pairs.sort();
            println!("{}", pairs.join("  "));
        }
        println!(
            "{}",
            format!("{} solution(s)", solutions.len()).dimmed()
        );
    }
    Ok(())
}

fn cmd_relations() {
    let table = RelationTable::standard();
    let mut relations: Vec<_> = table.relations().map(|iri| iri.as_str()).collect();
    relations.sort_unstable();
    for relation in relations {
        println!("{relation}");
    }
}
