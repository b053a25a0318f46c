//! Webperf main entry point
//!
//! Command-line interface for the concurrency-bounded web latency analyzer.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use webperf::analyzer::{build_http_client, run_batch, Notifier, ProgressPrinter};
use webperf::config::{load_config, validate, Config};
use webperf::input::load_urls;
use webperf::output::{print_results, print_summary, render_json, summarize};

/// Webperf: concurrency-bounded web latency analyzer
///
/// Webperf fetches every URL in the input batch, bounding how many
/// requests run at once, and reports per-URL latency and outcome along
/// with aggregate statistics.
#[derive(Parser, Debug)]
#[command(name = "webperf")]
#[command(version = "1.0.0")]
#[command(about = "Measure per-URL latency and availability with bounded concurrency", long_about = None)]
struct Cli {
    /// Path to a JSON or CSV file containing URLs
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Maximum number of concurrent requests (overrides config)
    #[arg(short, long)]
    concurrency: Option<u32>,

    /// Per-request timeout in seconds (overrides config)
    #[arg(short, long)]
    timeout: Option<f64>,

    /// Batch size above which per-completion progress lines are dropped
    /// (overrides config)
    #[arg(long)]
    progress_threshold: Option<usize>,

    /// Emit results and summary as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    // CLI flags win over file values; validate the merged result
    if let Some(concurrency) = cli.concurrency {
        config.analyzer.concurrency = concurrency;
    }
    if let Some(timeout) = cli.timeout {
        config.analyzer.timeout_secs = timeout;
    }
    if let Some(threshold) = cli.progress_threshold {
        config.analyzer.progress_threshold = threshold;
    }
    validate(&config)?;

    let urls = load_urls(&cli.input)?;
    tracing::info!("Loaded {} URLs from {}", urls.len(), cli.input.display());

    let client = build_http_client(&config.http)?;

    // Progress lines go to stdout, so keep them out of quiet and JSON runs
    let notifier: Option<Arc<dyn Notifier>> = if cli.quiet || cli.json {
        None
    } else {
        Some(Arc::new(ProgressPrinter))
    };

    let results = run_batch(&client, &urls, &config.analyzer, notifier).await?;
    let summary = summarize(&results);

    if cli.json {
        println!("{}", render_json(&results, &summary)?);
    } else {
        print_summary(&summary);
        print_results(&results);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("webperf=info,warn"),
            1 => EnvFilter::new("webperf=debug,info"),
            2 => EnvFilter::new("webperf=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
