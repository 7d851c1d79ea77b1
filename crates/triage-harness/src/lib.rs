//! Triage acceptance harness
//!
//! Replays the fixed regression table against the `classify` binary and
//! reports per-case results plus overall accuracy. Requires a reachable
//! triage endpoint with the triage model pulled.
//!
//! ```bash
//! triage-harness
//! triage-harness --classifier ./target/release/classify --timeout-secs 20
//! ```

#![allow(clippy::uninlined_format_args)]

pub mod cases;
pub mod error;
pub mod report;
pub mod runner;

pub use cases::{TestCase, TEST_CASES};
pub use error::HarnessError;
pub use runner::{
    run_all, run_case, CaseOutcome, ClassifierOutput, HarnessConfig, HarnessSummary,
};
