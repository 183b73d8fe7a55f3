//! Rule-based functional and disease remarks.
//!
//! Each text is assembled from an ordered table of `(predicate, text)` rules.
//! The order of the tables is the order of the output.

use serde::{Deserialize, Serialize};

use crate::motif::contains_tandem_repeat;

pub const LONG_SEQUENCE_TEXT: &str =
    "This is a long gene sequence that may encode a complex protein.";
pub const SHORT_SEQUENCE_TEXT: &str = "This is a relatively short gene sequence.";
pub const GC_RICH_TEXT: &str =
    "High GC content suggests the gene may lie in a GC-rich region of the genome.";
pub const GC_POOR_TEXT: &str = "Low GC content may affect regulation of gene expression.";
pub const CODING_REGIONS_TEXT: &str =
    "Sequence analysis indicates possible coding regions and regulatory elements.";

pub const BRCA_TEXT: &str = "This gene is associated with breast and ovarian cancer risk.";
pub const CYSTIC_FIBROSIS_TEXT: &str = "This gene is associated with cystic fibrosis.";
pub const HUNTINGTON_TEXT: &str = "This gene is associated with Huntington's disease.";
pub const UNKNOWN_DISEASE_TEXT: &str =
    "Further research is needed to determine the disease associations of this gene.";
pub const REPEAT_EXPANSION_TEXT: &str =
    "A CAG repeat expansion was detected, which may be associated with neurodegenerative disease.";

/// Thresholds used by the rule tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationConfig {
    /// Sequences longer than this get the long-sequence remark.
    pub long_sequence_length: usize,
    /// GC percentage above which the GC-rich remark applies.
    pub gc_rich_above: f64,
    /// GC percentage below which the GC-poor remark applies.
    pub gc_poor_below: f64,
    /// Motif searched for as a tandem repeat.
    pub repeat_motif: String,
    /// Consecutive copies of `repeat_motif` needed for the expansion remark.
    pub repeat_min_copies: usize,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            long_sequence_length: 1000,
            gc_rich_above: 60.0,
            gc_poor_below: 40.0,
            repeat_motif: "CAG".to_string(),
            repeat_min_copies: 40,
        }
    }
}

/// Already-computed facts about a sequence that the functional rules read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceFeatures {
    pub length: usize,
    /// GC percentage, 0 to 100.
    pub gc_content: f64,
}

/// Both remark texts for one sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub functional_analysis: String,
    pub disease_associations: String,
}

struct FunctionalRule {
    applies: fn(&SequenceFeatures, &AnnotationConfig) -> bool,
    text: &'static str,
}

/// Every matching rule contributes, in table order.
const FUNCTIONAL_RULES: &[FunctionalRule] = &[
    FunctionalRule {
        applies: |f, c| f.length > c.long_sequence_length,
        text: LONG_SEQUENCE_TEXT,
    },
    FunctionalRule {
        applies: |f, c| f.length <= c.long_sequence_length,
        text: SHORT_SEQUENCE_TEXT,
    },
    FunctionalRule {
        applies: |f, c| f.gc_content > c.gc_rich_above,
        text: GC_RICH_TEXT,
    },
    FunctionalRule {
        applies: |f, c| f.gc_content < c.gc_poor_below,
        text: GC_POOR_TEXT,
    },
    FunctionalRule {
        applies: |_, _| true,
        text: CODING_REGIONS_TEXT,
    },
];

/// Only the first matching rule contributes. Needles are lowercase.
const GENE_NAME_RULES: &[(&str, &str)] = &[
    ("brca", BRCA_TEXT),
    ("cf", CYSTIC_FIBROSIS_TEXT),
    ("huntingtin", HUNTINGTON_TEXT),
];

/// Functional remarks from length and GC content.
pub fn functional_analysis(features: &SequenceFeatures, config: &AnnotationConfig) -> String {
    let texts: Vec<&str> = FUNCTIONAL_RULES
        .iter()
        .filter(|rule| (rule.applies)(features, config))
        .map(|rule| rule.text)
        .collect();
    texts.join(" ")
}

/// Disease remark for the gene name, followed by the repeat-expansion remark
/// when `sequence` carries a long enough tandem run of the configured motif.
pub fn disease_associations(gene_name: &str, sequence: &str, config: &AnnotationConfig) -> String {
    let lower_name = gene_name.to_lowercase();
    let mut texts = vec![GENE_NAME_RULES
        .iter()
        .find(|(needle, _)| lower_name.contains(needle))
        .map(|(_, text)| *text)
        .unwrap_or(UNKNOWN_DISEASE_TEXT)];

    if contains_tandem_repeat(
        sequence.as_bytes(),
        config.repeat_motif.as_bytes(),
        config.repeat_min_copies,
    ) {
        texts.push(REPEAT_EXPANSION_TEXT);
    }

    texts.join(" ")
}

/// Run both rule tables.
pub fn annotate(
    gene_name: &str,
    sequence: &str,
    features: &SequenceFeatures,
    config: &AnnotationConfig,
) -> Annotation {
    Annotation {
        functional_analysis: functional_analysis(features, config),
        disease_associations: disease_associations(gene_name, sequence, config),
    }
}
