use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::annotate::{annotate, SequenceFeatures};
use crate::codon::{is_start_codon, is_stop_codon};
use crate::composition::{count_nucleotides, NucleotideComposition};
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::orf::{find_orfs_with, Orf};

/// Everything the engine reports about one sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub gene_name: String,
    pub species: String,
    pub sequence_length: usize,
    /// GC percentage, unrounded.
    pub gc_content: f64,
    pub nucleotide_composition: NucleotideComposition,
    /// Candidate ORFs in ascending start order.
    pub potential_proteins: Vec<Orf>,
    pub functional_analysis: String,
    pub disease_associations: String,
}

impl AnalysisResult {
    /// GC content rounded to two decimals for display.
    pub fn gc_content_display(&self) -> String {
        format!("{:.2}", self.gc_content)
    }
}

/// Analyze with the default configuration.
pub fn analyze(
    sequence: &str,
    gene_name: &str,
    species: &str,
) -> Result<AnalysisResult, AnalysisError> {
    analyze_with(sequence, gene_name, species, &AnalysisConfig::default())
}

/// Composition, then ORFs, then annotation (which reads the computed GC
/// content). `gene_name` and `species` are copied through unchanged.
///
/// The engine accepts any input without panicking; shape checks belong to
/// [`crate::AnalysisRequest`]. An `Err` here means the result broke one of
/// its own invariants.
pub fn analyze_with(
    sequence: &str,
    gene_name: &str,
    species: &str,
    config: &AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    let normalized = sequence.to_ascii_uppercase();
    let sequence_length = normalized.len();

    let composition = count_nucleotides(&normalized);
    let gc_content = composition.gc_percent(sequence_length);
    debug!(gene = gene_name, sequence_length, gc_content, "composition counted");

    let orfs = find_orfs_with(&normalized, &config.orf);
    debug!(gene = gene_name, orfs = orfs.len(), "ORF scan finished");

    let features = SequenceFeatures {
        length: sequence_length,
        gc_content,
    };
    let annotation = annotate(gene_name, &normalized, &features, &config.annotation);
    debug!(gene = gene_name, "annotation finished");

    let result = AnalysisResult {
        gene_name: gene_name.to_string(),
        species: species.to_string(),
        sequence_length,
        gc_content,
        nucleotide_composition: composition,
        potential_proteins: orfs,
        functional_analysis: annotation.functional_analysis,
        disease_associations: annotation.disease_associations,
    };

    if let Err(fault) = check_invariants(&result, config) {
        error!(gene = gene_name, %fault, "analysis produced an inconsistent result");
        return Err(AnalysisError::InternalFault(fault));
    }

    Ok(result)
}

fn check_invariants(result: &AnalysisResult, config: &AnalysisConfig) -> Result<(), String> {
    if !(0.0..=100.0).contains(&result.gc_content) {
        return Err(format!("GC content {} outside [0, 100]", result.gc_content));
    }
    if result.nucleotide_composition.total() > result.sequence_length {
        return Err(format!(
            "composition counts {} bases in a sequence of {}",
            result.nucleotide_composition.total(),
            result.sequence_length
        ));
    }
    if result.potential_proteins.len() > config.orf.max_orfs {
        return Err(format!(
            "{} ORFs reported, cap is {}",
            result.potential_proteins.len(),
            config.orf.max_orfs
        ));
    }

    let mut previous_start = None;
    for orf in &result.potential_proteins {
        let bases = orf.sequence.as_bytes();
        let well_formed = bases.len() == orf.len()
            && bases.len() >= config.orf.min_length
            && bases.len() % 3 == 0
            && bases.len() >= 6
            && is_start_codon(&bases[..3])
            && is_stop_codon(&bases[bases.len() - 3..]);
        if !well_formed {
            return Err(format!("malformed ORF at {}..{}", orf.start, orf.end));
        }
        if previous_start.is_some_and(|prev| orf.start <= prev) {
            return Err(format!("ORF at {} is out of scan order", orf.start));
        }
        previous_start = Some(orf.start);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{GC_POOR_TEXT, REPEAT_EXPANSION_TEXT, UNKNOWN_DISEASE_TEXT};
    use crate::orf::OrfScanConfig;

    #[test]
    fn test_all_a_sequence() {
        let seq = "A".repeat(100);
        let result = analyze(&seq, "TEST1", "Mus musculus").unwrap();
        assert_eq!(result.sequence_length, 100);
        assert_eq!(result.nucleotide_composition.a, 100);
        assert_eq!(result.nucleotide_composition.gc_count(), 0);
        assert!((result.gc_content - 0.0).abs() < f64::EPSILON);
        assert!(result.potential_proteins.is_empty());
        assert!(result.functional_analysis.contains(GC_POOR_TEXT));
    }

    #[test]
    fn test_metadata_passed_through() {
        let result = analyze("ACGTACGTAC", "  odd name ", " species ").unwrap();
        assert_eq!(result.gene_name, "  odd name ");
        assert_eq!(result.species, " species ");
    }

    #[test]
    fn test_tiny_inputs_do_not_panic() {
        for seq in ["", "A", "AT", "ATG"] {
            let result = analyze(seq, "XX", "yy").unwrap();
            assert_eq!(result.sequence_length, seq.len());
            assert!(result.potential_proteins.is_empty());
        }
    }

    #[test]
    fn test_unexpected_symbols_tolerated() {
        let result = analyze("NNNNGGCC\u{e9}", "XX", "yy").unwrap();
        assert_eq!(result.nucleotide_composition.total(), 4);
        assert!(result.gc_content < 100.0);
    }

    #[test]
    fn test_cag_repeat() {
        let seq = "CAG".repeat(42);
        let result = analyze(&seq, "HTT", "Homo sapiens").unwrap();
        assert!(result.disease_associations.contains(UNKNOWN_DISEASE_TEXT));
        assert!(result.disease_associations.contains(REPEAT_EXPANSION_TEXT));
    }

    #[test]
    fn test_gc_display_rounding() {
        let result = analyze("GAA", "XX", "yy").unwrap();
        assert_eq!(result.gc_content_display(), "33.33");
    }

    #[test]
    fn test_invariant_violation_is_internal_fault() {
        let config = AnalysisConfig::default();
        let mut result = analyze(&format!("ATG{}TAA", "GCT".repeat(10)), "XX", "yy").unwrap();
        result.potential_proteins[0].sequence.replace_range(0..3, "CCC");
        let fault = check_invariants(&result, &config).unwrap_err();
        assert!(fault.contains("malformed ORF"));
    }

    #[test]
    fn test_custom_config_flows_through() {
        let seq = format!("ATG{}TAA", "GCT".repeat(2));
        let config = AnalysisConfig {
            orf: OrfScanConfig {
                min_length: 12,
                max_orfs: 5,
            },
            ..Default::default()
        };
        let result = analyze_with(&seq, "XX", "yy", &config).unwrap();
        assert_eq!(result.potential_proteins.len(), 1);
    }
}
