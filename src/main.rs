//! Wikipath main entry point
//!
//! This is the command-line interface for the Wikipath link-graph search.

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use wikipath::config::{load_config_with_hash, validate, Config};
use wikipath::output::{print_statistics, write_outcome};
use wikipath::{canonicalize_url, run_search, SearchRequest};

/// Wikipath: find a chain of links between two wiki articles
///
/// A pool of workers explores the link graph best-first, preferring links
/// whose article names look related to the target, and prints the first
/// path found from the start page to the target page.
#[derive(Parser, Debug)]
#[command(name = "wikipath")]
#[command(version)]
#[command(about = "Find a path of links between two wiki articles", long_about = None)]
struct Cli {
    /// Article to start from
    #[arg(value_name = "START_URL")]
    start_url: String,

    /// Article to reach
    #[arg(value_name = "TARGET_URL")]
    target_url: String,

    /// Maximum link depth to explore (positive integer)
    #[arg(value_name = "MAX_DEPTH", value_parser = clap::value_parser!(u32).range(1..))]
    max_depth: u32,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of search workers (overrides the configuration)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Always fetch pages over the network instead of using the page cache
    #[arg(long)]
    no_cache: bool,

    /// Print search statistics after the result
    #[arg(long)]
    stats: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("wikipath=info,warn"),
            1 => EnvFilter::new("wikipath=debug,info"),
            2 => EnvFilter::new("wikipath=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file, if any, and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(workers) = cli.workers {
        config.search.workers = workers;
    }
    if cli.no_cache {
        config.fetch.use_cache = false;
    }

    validate(&config).context("invalid configuration")?;
    Ok(config)
}

/// Runs the search and prints the result the way the tool always has
async fn run(cli: Cli) -> anyhow::Result<()> {
    let started = Instant::now();
    let config = build_config(&cli)?;

    let start = canonicalize_url(&cli.start_url).context("invalid start URL")?;
    let target = canonicalize_url(&cli.target_url).context("invalid target URL")?;

    println!("Finding path from {} to {}.", start, target);
    println!();

    let request = SearchRequest::new(start, target, cli.max_depth);
    let report = run_search(&config, &request).await.context("search failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_outcome(&mut out, &report.outcome, &report.start, &report.target)?;
    writeln!(out)?;
    writeln!(
        out,
        "Total runtime: {:.2} seconds",
        started.elapsed().as_secs_f64()
    )?;
    drop(out);

    if cli.stats {
        println!();
        print_statistics(&report.stats);
    }

    Ok(())
}
