//! Query a tool's action syntax from the command line.
//!
//! Usage:
//!   syntax-index --app ./moose-opt is-path Executioner/TimeStepper
//!   syntax-index --app ./moose-opt get-path /Variables/u/InitialCondition
//!   syntax-index has-star Variables            # executable from SYNTAX_INDEX_APP
//!   syntax-index --app ./moose-opt list --hard --json

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use syntax_index::{DumpCommand, ENV_LOG, SyntaxIndex, resolve_app_path, resolve_syntax_flag};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "syntax-index")]
#[command(about = "Classify and resolve action paths from a tool's --syntax dump")]
struct Cli {
    /// Executable to introspect; defaults to SYNTAX_INDEX_APP.
    #[arg(long, global = true)]
    app: Option<PathBuf>,
    /// Flag that makes the executable print its syntax; defaults to --syntax.
    #[arg(long, global = true, allow_hyphen_values = true)]
    syntax_flag: Option<String>,
    #[command(subcommand)]
    command: Query,
}

#[derive(Subcommand, Debug)]
enum Query {
    /// Print true/false for each path depending on whether it is a hard path.
    IsPath {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print the declared pattern each path resolves to, or "-" when none.
    GetPath {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print true/false for each prefix depending on whether it has wildcard children.
    HasStar {
        #[arg(required = true)]
        prefixes: Vec<String>,
    },
    /// List declared paths.
    List {
        /// Only list hard paths.
        #[arg(long)]
        hard: bool,
        /// Emit a JSON snapshot (catalog and hard paths) instead of one path per line.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("ERROR: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let app_path = resolve_app_path(cli.app)?;
    let command = DumpCommand::new(app_path).with_flag(resolve_syntax_flag(cli.syntax_flag));
    let index = SyntaxIndex::load_with(&command)?;

    match cli.command {
        Query::IsPath { paths } => {
            for path in paths {
                println!("{}", index.is_path(&path));
            }
        }
        Query::GetPath { paths } => {
            for path in paths {
                println!("{}", index.get_path(&path).unwrap_or("-"));
            }
        }
        Query::HasStar { prefixes } => {
            for prefix in prefixes {
                println!("{}", index.has_star(&prefix));
            }
        }
        Query::List { hard, json } => list(&index, hard, json)?,
    }
    Ok(())
}

fn list(index: &SyntaxIndex, hard: bool, json: bool) -> Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(&index.snapshot())
            .context("serializing index snapshot")?;
        println!("{rendered}");
        return Ok(());
    }

    let paths: Vec<&str> = if hard {
        index.hard_paths().collect()
    } else {
        index.paths().collect()
    };
    for path in paths {
        println!("{path}");
    }
    Ok(())
}
