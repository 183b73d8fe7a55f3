pub mod detect;
pub mod fasta;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Input is empty")]
    EmptyInput,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Fasta,
    Raw,
    Unknown,
}

/// One named nucleotide sequence read from input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub id: String,
    #[serde(default)]
    pub description: String,
    /// Uppercase residues with whitespace and numbering removed.
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            sequence: sequence.into().to_uppercase(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Id given to a sequence pasted without a FASTA header.
pub const RAW_RECORD_ID: &str = "input";

/// Parse input text based on detected format. Text that is not FASTA is read
/// as one bare sequence; residues are not validated here.
pub fn parse_input(content: &str) -> Result<Vec<SequenceRecord>, ParseError> {
    match detect::detect_format(content) {
        InputFormat::Fasta => fasta::parse(content),
        InputFormat::Raw => Ok(vec![SequenceRecord::new(RAW_RECORD_ID, join_raw_lines(content))]),
        InputFormat::Unknown => Err(ParseError::EmptyInput),
    }
}

/// Outer whitespace of each line is dropped and the lines are joined. Spaces
/// and digits inside a line stay, so validation rejects them.
fn join_raw_lines(content: &str) -> String {
    content.lines().map(str::trim).collect()
}

/// Read and parse a sequence file.
pub fn read_input(path: impl AsRef<Path>) -> Result<Vec<SequenceRecord>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_input(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_input_keeps_inner_symbols() {
        let records = parse_input("  ATGC 1234 ATGC \n").unwrap();
        assert_eq!(records[0].sequence, "ATGC 1234 ATGC");
    }

    #[test]
    fn test_raw_input_joins_lines() {
        let records = parse_input("atgcatgc\r\n  ttaa\n").unwrap();
        assert_eq!(records[0].id, RAW_RECORD_ID);
        assert_eq!(records[0].sequence, "ATGCATGCTTAA");
    }
}
