//! Natural-language interpretation of analysis results through an
//! OpenAI-compatible chat-completions API, with a templated fallback.

pub mod config;
pub mod interpreter;
pub mod prompt;

use thiserror::Error;

pub use config::InterpreterConfig;
pub use interpreter::{Interpretation, InterpretationSource, Interpreter};
pub use prompt::{build_prompt, fallback_interpretation, InterpretationInput};

/// Failure of one completion call. Never leaves the crate through
/// [`Interpreter::interpret`], which falls back instead.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("No API key configured")]
    NotConfigured,
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Could not decode API response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("API response did not contain choices[0].message.content")]
    EmptyResponse,
}
