use thiserror::Error;

/// Input rejected before it reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputShapeError {
    #[error("Sequence is empty")]
    EmptySequence,
    #[error("Sequence is too short: {length} bp (minimum {min})")]
    SequenceTooShort { length: usize, min: usize },
    #[error("Sequence is too long: {length} bp (maximum {max})")]
    SequenceTooLong { length: usize, max: usize },
    #[error("Invalid nucleotide '{symbol}' at position {position}; only A, T, G and C are allowed")]
    InvalidNucleotide { symbol: char, position: usize },
    #[error("Gene name is empty")]
    EmptyGeneName,
    #[error("Invalid gene name '{0}': expected 2-50 letters, digits, '_' or '-'")]
    MalformedGeneName(String),
    #[error("Species is empty")]
    EmptySpecies,
}

/// Failure of a single analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    InputShape(#[from] InputShapeError),
    #[error("Internal analysis fault: {0}")]
    InternalFault(String),
}

impl AnalysisError {
    pub fn is_input_error(&self) -> bool {
        matches!(self, AnalysisError::InputShape(_))
    }
}
