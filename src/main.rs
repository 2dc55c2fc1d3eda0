//! nowcoder-problem main entry point
//!
//! This is the command-line interface: it fetches (or reads) a problem page
//! and prints the extracted record as JSON on stdout.

use clap::Parser;
use nowcoder_problem::config::{load_config, Config};
use nowcoder_problem::fetcher::{build_http_client, fetch_page};
use nowcoder_problem::output::render_record;
use nowcoder_problem::{ProblemParser, Registry};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// nowcoder-problem: extract problem metadata from NowCoder pages
///
/// Prints the problem title, time and memory limits and sample tests
/// as JSON.
#[derive(Parser, Debug)]
#[command(name = "nowcoder-problem")]
#[command(version)]
#[command(about = "Extract problem metadata from NowCoder pages", long_about = None)]
struct Cli {
    /// URL of the problem page
    #[arg(value_name = "URL", required_unless_present = "patterns")]
    url: Option<String>,

    /// Read the page HTML from a file instead of fetching it
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the recognized URL patterns and exit
    #[arg(long)]
    patterns: bool,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

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

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).map_err(|e| {
                tracing::error!("Failed to load configuration: {}", e);
                e
            })?
        }
        None => Config::default(),
    };

    let registry = Registry::with_defaults();

    if cli.patterns {
        for pattern in registry.patterns() {
            println!("{}", pattern);
        }
        return Ok(());
    }

    let Some(url) = cli.url.as_deref() else {
        return Err("a problem URL is required".into());
    };

    let parser = match registry.resolve(url) {
        Ok(parser) => parser,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e.into());
        }
    };

    let html = match &cli.html {
        Some(path) => {
            tracing::info!("Reading page from: {}", path.display());
            std::fs::read_to_string(path)?
        }
        None => {
            tracing::info!("Fetching {}", url);
            let client = build_http_client(&config)?;
            fetch_page(&client, url).await?
        }
    };

    tracing::debug!("Using {} parser for {}", parser.name(), url);
    let record = match parser.parse(url, &html) {
        Ok(record) => record,
        Err(e) => {
            tracing::error!("This page could not be recognized: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!(
        "Extracted \"{}\" with {} sample tests",
        record.name(),
        record.tests().len()
    );

    let pretty = config.output.pretty && !cli.compact;
    println!("{}", render_record(&record, pretty)?);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("nowcoder_problem=info,warn"),
            1 => EnvFilter::new("nowcoder_problem=debug,info"),
            2 => EnvFilter::new("nowcoder_problem=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
