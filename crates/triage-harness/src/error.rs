use std::time::Duration;

use thiserror::Error;

/// Why a harness case could not produce a classification
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("failed to run classifier: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("classifier timed out after {:.1}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("unreadable classifier output: {0}")]
    Output(#[from] serde_json::Error),
}
