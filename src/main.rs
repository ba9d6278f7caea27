// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use collatz_wormhole::config::WalkerConfig;
use collatz_wormhole::context::AnalysisContext;
use collatz_wormhole::memo::JumpTable;
use collatz_wormhole::numeric::{DEFAULT_ITERATION_CAP, DEFAULT_MAX_INPUT};
use collatz_wormhole::report;

/// Collatz total stopping time, accelerated by a table of known suffixes.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Jump table JSON file (defaults to the embedded dataset)
    #[arg(long, global = true, value_name = "PATH")]
    table: Option<PathBuf>,

    /// Maximum steps computed one at a time per walk
    #[arg(long, global = true, default_value_t = DEFAULT_ITERATION_CAP)]
    iteration_cap: usize,

    /// Largest accepted input
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_INPUT)]
    max_input: u64,

    /// Also look up the input value itself in the jump table
    #[arg(long, global = true)]
    lookup_input: bool,

    /// Scan on the current thread only
    #[arg(long, global = true)]
    sequential: bool,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a single number (integer, float or string)
    Analyze {
        /// The number to analyze, e.g. 27, "100" or 42.0
        #[arg(allow_hyphen_values = true)]
        n: String,
    },

    /// Compare both algorithms for every number in 1..=MAX_N
    #[command(alias = "test-sequences")]
    Scan {
        #[arg(value_name = "MAX_N")]
        max_n: u64,
    },

    /// Re-derive every jump table entry
    VerifyTable,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn context(cli: &Cli) -> Result<AnalysisContext> {
    ensure!(cli.iteration_cap > 0, "--iteration-cap must be positive");
    ensure!(cli.max_input > 0, "--max-input must be positive");

    let table = match &cli.table {
        Some(path) => JumpTable::from_path(path)
            .with_context(|| format!("loading jump table from {}", path.display()))?,
        None => JumpTable::embedded().context("loading embedded jump table")?,
    };
    let config = WalkerConfig::builder()
        .iteration_cap(cli.iteration_cap)
        .max_input(cli.max_input)
        .lookup_input(cli.lookup_input)
        .parallel(!cli.sequential)
        .build();
    debug!(?config, entries = table.len(), "context ready");
    Ok(AnalysisContext::with_config(Arc::new(table), config))
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("serializing result")?
    );
    Ok(())
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();
    let ctx = context(&cli)?;

    let success = match &cli.command {
        Command::Analyze { n } => {
            let naive = ctx.analyze_naive(n.as_str());
            let accelerated = ctx.analyze(n.as_str());
            if cli.json {
                print_json(&json!({ "naive": naive, "accelerated": accelerated }))?;
            } else {
                print!("{}", report::analysis_report(&naive, &accelerated));
            }
            naive.is_ok() && accelerated.is_ok()
        }
        Command::Scan { max_n } => {
            let stats = ctx.scan(*max_n);
            if cli.json {
                print_json(&stats)?;
            } else {
                print!("{}", report::scan_report(&stats));
            }
            stats.all_identical()
        }
        Command::VerifyTable => {
            let results = ctx.verify_table();
            if cli.json {
                print_json(&results)?;
            } else {
                print!("{}", report::table_report(&results));
            }
            results.iter().all(|r| r.valid)
        }
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
