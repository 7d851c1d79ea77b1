//! `classify`: print the routing decision for one task prompt
//!
//! The prompt comes from the trailing arguments or, if there are none, from
//! standard input. Standard output carries exactly one JSON line; logs go to
//! standard error.

use std::io::Read;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use triage::{Classifier, TriageConfig};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Task prompt; words are joined with spaces. Read from stdin when omitted.
    /// Words may start with `-`; put `--` first to pass a prompt that spells a flag.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    prompt: Vec<String>,

    /// Ollama chat endpoint (overrides TRIAGE_OLLAMA_URL)
    #[arg(long)]
    endpoint: Option<String>,

    /// Triage model (overrides TRIAGE_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Request timeout in seconds (overrides TRIAGE_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl Args {
    fn config(&self) -> TriageConfig {
        let mut config = TriageConfig::default();
        if let Some(endpoint) = &self.endpoint {
            config = config.with_endpoint(endpoint);
        }
        if let Some(model) = &self.model {
            config = config.with_model(model);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }

    fn read_prompt(&self) -> Result<String> {
        if !self.prompt.is_empty() {
            return Ok(self.prompt.join(" ").trim().to_string());
        }
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read prompt from stdin")?;
        Ok(input.trim().to_string())
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let args = Args::parse();
    let prompt = args.read_prompt()?;

    if prompt.is_empty() {
        println!("{}", json!({"error": "No input provided"}));
        return Ok(ExitCode::FAILURE);
    }

    let classifier = Classifier::new(args.config()).context("Failed to build HTTP client")?;
    let decision = classifier.route(&prompt).await;

    println!(
        "{}",
        serde_json::to_string(&decision).context("Failed to serialize routing decision")?
    );
    Ok(ExitCode::SUCCESS)
}
