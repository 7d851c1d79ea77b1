//! Intelli-Router Triage Library
//!
//! Classifies a free-text task prompt into one of four complexity tiers using
//! a small local model served by Ollama, then maps the tier to the downstream
//! model that should handle the task.
//!
//! # Pipeline
//!
//! ```text
//! prompt → /api/chat → strip fences → parse JSON → normalize tier → model id
//! ```
//!
//! Every failure along the way degrades to the `moderate` tier so a routing
//! decision is always produced.
//!
//! # Usage
//!
//! ```bash
//! classify "Write a Python script that scrapes product prices from a URL"
//! echo "Hello!" | classify
//! TRIAGE_OLLAMA_URL=http://gpu-box:11434/api/chat classify "Explain how DNS works"
//! ```

#![allow(clippy::uninlined_format_args)]

pub mod classifier;
pub mod config;
pub mod error;
pub mod extract;
pub mod ollama;
pub mod prompts;
pub mod tier;

pub use classifier::{Classification, Classifier, RouteDecision, PARSE_FAILED_REASON};
pub use config::TriageConfig;
pub use error::{TriageError, TriageResult};
pub use extract::{extract_json, strip_code_fences};
pub use tier::Tier;
