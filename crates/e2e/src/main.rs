//! E2E runner entry point
//!
//! Runs the YAML specs against the Fake Store API and writes
//! `test-results.json`. Exit code is 0 when every test passes,
//! 1 when any fails and 2 when the harness itself errors.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use fakestore_client::{ClientConfig, DEFAULT_BASE_URL};
use tracing_subscriber::EnvFilter;

use fakestore_e2e::{fixtures, RunnerConfig, TestRunner};

#[derive(Parser, Debug)]
#[command(name = "fakestore-e2e")]
#[command(author, version, about = "E2E test runner for the Fake Store API")]
struct Args {
    /// Path to test specs directory
    #[arg(short, long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/specs"))]
    specs: PathBuf,

    /// Run only tests matching this tag
    #[arg(short, long)]
    tag: Option<String>,

    /// Run only a specific test by name
    #[arg(short, long, conflicts_with = "tag")]
    name: Option<String>,

    /// API base URL
    #[arg(long, env = "FAKESTORE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds (transport default when unset)
    #[arg(long, env = "FAKESTORE_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Output directory for results
    #[arg(short, long, default_value = "test-results")]
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();

    match run(args).await {
        Ok(true) => std::process::exit(0),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}

async fn run(args: Args) -> anyhow::Result<bool> {
    let client = ClientConfig {
        base_url: args.base_url,
        timeout: args.timeout_secs.map(Duration::from_secs),
        ..Default::default()
    }
    .validate()?;

    let runner = TestRunner::with_config(RunnerConfig {
        client,
        credentials: fixtures::valid_credentials(),
        specs_dir: args.specs,
        output_dir: args.output,
    });

    let results = if let Some(name) = args.name {
        runner.run_named(&name).await?
    } else if let Some(tag) = args.tag {
        runner.run_tagged(&tag).await?
    } else {
        runner.run_all().await?
    };

    runner.write_results(&results)?;

    Ok(results.success())
}
