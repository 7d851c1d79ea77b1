use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use triage_harness::runner::DEFAULT_CASE_TIMEOUT_SECS;
use triage_harness::{report, run_all, HarnessConfig, TEST_CASES};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the classify executable (defaults to the one next to this binary)
    #[arg(long)]
    classifier: Option<PathBuf>,

    /// Wall-clock limit per case in seconds
    #[arg(long, default_value_t = DEFAULT_CASE_TIMEOUT_SECS)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let mut config = HarnessConfig {
        case_timeout: Duration::from_secs(args.timeout_secs),
        ..HarnessConfig::default()
    };
    if let Some(path) = args.classifier {
        config.classifier = path;
    }
    info!(
        classifier = %config.classifier.display(),
        cases = TEST_CASES.len(),
        "Triage harness starting"
    );

    for line in report::header_lines() {
        println!("{line}");
    }
    let summary = run_all(&config, &TEST_CASES).await;
    for line in report::summary_lines(&summary) {
        println!("{line}");
    }

    Ok(if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
