use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::{analyze_with, AnalysisResult};
use crate::composition::Nucleotide;
use crate::config::{AnalysisConfig, ValidationLimits};
use crate::error::{AnalysisError, InputShapeError};

/// Accepted gene names: 2-50 ASCII letters, digits, `_` or `-`.
pub const GENE_NAME_PATTERN: &str = r"^[A-Za-z0-9_-]{2,50}$";

/// Well-studied genes offered as suggestions; any valid name is accepted.
pub const COMMON_GENES: &[&str] = &[
    "BRCA1", "BRCA2", "TP53", "EGFR", "KRAS", "BRAF", "ALK", "MYC", "HER2", "PTEN", "APC", "RB1",
    "NF1", "VHL", "WT1", "MEN1", "RET", "MET",
];

/// Model organisms offered as suggestions; any non-empty species is accepted.
pub const COMMON_SPECIES: &[&str] = &[
    "Homo sapiens",
    "Mus musculus",
    "Rattus norvegicus",
    "Drosophila melanogaster",
    "Caenorhabditis elegans",
    "Danio rerio",
    "Arabidopsis thaliana",
    "Saccharomyces cerevisiae",
    "Escherichia coli",
];

fn gene_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(GENE_NAME_PATTERN).expect("gene name pattern is a valid regex"))
}

/// A validated analysis request: trimmed metadata and an uppercase A/T/G/C
/// sequence within the length limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    sequence: String,
    gene_name: String,
    species: String,
}

impl AnalysisRequest {
    pub fn new(
        sequence: impl AsRef<str>,
        gene_name: impl AsRef<str>,
        species: impl AsRef<str>,
    ) -> Result<Self, InputShapeError> {
        Self::with_limits(sequence, gene_name, species, &ValidationLimits::default())
    }

    pub fn with_limits(
        sequence: impl AsRef<str>,
        gene_name: impl AsRef<str>,
        species: impl AsRef<str>,
        limits: &ValidationLimits,
    ) -> Result<Self, InputShapeError> {
        let sequence = validate_sequence(sequence.as_ref(), limits)?;
        let gene_name = validate_gene_name(gene_name.as_ref())?;

        let species = species.as_ref().trim();
        if species.is_empty() {
            return Err(InputShapeError::EmptySpecies);
        }

        Ok(Self {
            sequence,
            gene_name,
            species: species.to_string(),
        })
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn gene_name(&self) -> &str {
        &self.gene_name
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Run the engine with the default configuration.
    pub fn analyze(&self) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_with(&AnalysisConfig::default())
    }

    pub fn analyze_with(&self, config: &AnalysisConfig) -> Result<AnalysisResult, AnalysisError> {
        analyze_with(&self.sequence, &self.gene_name, &self.species, config)
    }
}

fn validate_sequence(raw: &str, limits: &ValidationLimits) -> Result<String, InputShapeError> {
    let sequence = raw.trim().to_uppercase();
    if sequence.is_empty() {
        return Err(InputShapeError::EmptySequence);
    }

    if let Some((position, symbol)) = sequence
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii() || Nucleotide::from_byte(*c as u8).is_none())
    {
        return Err(InputShapeError::InvalidNucleotide { symbol, position });
    }

    let length = sequence.len();
    if length < limits.min_length {
        return Err(InputShapeError::SequenceTooShort {
            length,
            min: limits.min_length,
        });
    }
    if length > limits.max_length {
        return Err(InputShapeError::SequenceTooLong {
            length,
            max: limits.max_length,
        });
    }

    Ok(sequence)
}

fn validate_gene_name(raw: &str) -> Result<String, InputShapeError> {
    let gene_name = raw.trim();
    if gene_name.is_empty() {
        return Err(InputShapeError::EmptyGeneName);
    }
    if !gene_name_regex().is_match(gene_name) {
        return Err(InputShapeError::MalformedGeneName(gene_name.to_string()));
    }
    Ok(gene_name.to_string())
}
