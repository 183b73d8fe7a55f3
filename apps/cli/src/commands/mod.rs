pub mod analyze;
pub mod catalog;
pub mod status;

use thiserror::Error;

/// Problems with what the user supplied, as opposed to failures of the tool.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("No record with id '{0}' in the input")]
    RecordNotFound(String),
    #[error("Either --sequence or --input is required")]
    MissingSequence,
    #[error("Minimum length {min} is greater than maximum length {max}")]
    InvalidLimits { min: usize, max: usize },
}
