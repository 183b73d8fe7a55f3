use anyhow::Context;
use geneinsight_core::{AnalysisConfig, AnalysisRequest, OrfScanConfig, ValidationLimits};
use geneinsight_formats::{parse_input, read_input, SequenceRecord};
use geneinsight_llm::{InterpretationInput, Interpreter};
use tracing::info;

use super::UsageError;
use crate::cli::{AnalyzeArgs, OutputFormat};
use crate::dto::ReportDto;
use crate::render::render_markdown;

/// Validate, analyze, optionally interpret, and render one sequence.
pub fn run(args: &AnalyzeArgs) -> anyhow::Result<String> {
    if args.min_length > args.max_length {
        return Err(UsageError::InvalidLimits {
            min: args.min_length,
            max: args.max_length,
        }
        .into());
    }

    let (record_id, sequence) = load_sequence(args)?;
    let limits = ValidationLimits {
        min_length: args.min_length,
        max_length: args.max_length,
    };
    let request = AnalysisRequest::with_limits(&sequence, &args.gene, &args.species, &limits)?;

    let config = AnalysisConfig {
        orf: OrfScanConfig {
            min_length: args.min_orf_length,
            max_orfs: args.max_orfs,
        },
        ..Default::default()
    };
    let analysis = request.analyze_with(&config)?;
    info!(
        gene = request.gene_name(),
        length = analysis.sequence_length,
        orfs = analysis.potential_proteins.len(),
        "analysis complete"
    );

    let interpretation = args.interpret.then(|| {
        let interpreter = Interpreter::new(args.llm.to_config());
        interpreter.interpret(&InterpretationInput::from(&analysis))
    });

    let report = ReportDto::new(analysis, interpretation.as_ref(), record_id);
    match args.format {
        OutputFormat::Markdown => Ok(render_markdown(&report)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&report).context("serializing report")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Inline sequence, or the selected record of the input file.
fn load_sequence(args: &AnalyzeArgs) -> anyhow::Result<(Option<String>, String)> {
    match (&args.sequence, &args.input) {
        (Some(text), _) => {
            let record = select_record(parse_input(text)?, None)?;
            Ok((None, record.sequence))
        }
        (None, Some(path)) => {
            let records = read_input(path)
                .with_context(|| format!("reading sequence input {}", path.display()))?;
            let record = select_record(records, args.record.as_deref())?;
            Ok((Some(record.id), record.sequence))
        }
        (None, None) => Err(UsageError::MissingSequence.into()),
    }
}

fn select_record(
    records: Vec<SequenceRecord>,
    id: Option<&str>,
) -> Result<SequenceRecord, UsageError> {
    match id {
        Some(id) => records
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| UsageError::RecordNotFound(id.to_string())),
        None => records
            .into_iter()
            .next()
            .ok_or_else(|| UsageError::RecordNotFound("<first>".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use geneinsight_core::InputShapeError;
    use std::path::PathBuf;

    fn fixture() -> PathBuf {
        PathBuf::from(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../crates/geneinsight-formats/tests/fixtures/genes.fa"
        ))
    }

    fn parse_args(extra: &[&str]) -> AnalyzeArgs {
        let mut argv = vec!["geneinsight", "analyze"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Analyze(args) => args,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_inline_markdown() {
        let seq = "A".repeat(100);
        let args = parse_args(&["-g", "TEST1", "-s", "Mus musculus", "--sequence", &seq]);
        let text = run(&args).unwrap();
        assert!(text.contains("| GC content | 0.00% |"));
        assert!(text.contains("| A | 100 | 100.00% |"));
    }

    #[test]
    fn test_fasta_record_json() {
        let path = fixture();
        let args = parse_args(&[
            "-g", "HTT", "-s", "Homo sapiens", "-i", path.to_str().unwrap(), "--record",
            "HTT_fragment", "-f", "json",
        ]);
        let text = run(&args).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["recordId"], "HTT_fragment");
        assert_eq!(json["analysis"]["sequenceLength"], 135);
        assert!(json["analysis"]["diseaseAssociations"]
            .as_str()
            .unwrap()
            .contains("CAG repeat expansion"));
        assert!(json["interpretation"].is_null());
    }

    #[test]
    fn test_first_record_by_default() {
        let path = fixture();
        let args = parse_args(&["-g", "GENE1", "-s", "synthetic", "-i", path.to_str().unwrap(), "-f", "json"]);
        let json: serde_json::Value = serde_json::from_str(&run(&args).unwrap()).unwrap();
        assert_eq!(json["recordId"], "GENE1");
        assert_eq!(json["analysis"]["potentialProteins"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_record() {
        let path = fixture();
        let args = parse_args(&["-g", "GENE1", "-s", "x", "-i", path.to_str().unwrap(), "--record", "nope"]);
        let err = run(&args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<UsageError>(),
            Some(UsageError::RecordNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_sequence_is_input_error() {
        let args = parse_args(&["-g", "BRCA1", "-s", "human", "--sequence", "ATGCNNATGCAT"]);
        let err = run(&args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputShapeError>(),
            Some(InputShapeError::InvalidNucleotide { symbol: 'N', position: 4 })
        ));
    }

    #[test]
    fn test_inline_digits_and_spaces_rejected() {
        let args = parse_args(&["-g", "BRCA1", "-s", "human", "--sequence", "ATGC 1234 ATGC 99 ATGC"]);
        let err = run(&args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputShapeError>(),
            Some(InputShapeError::InvalidNucleotide { symbol: ' ', position: 4 })
        ));
    }

    #[test]
    fn test_interpret_without_key_uses_template() {
        let args = parse_args(&[
            "-g", "BRCA1", "-s", "human", "--sequence", "ACGTACGTACGT", "--interpret", "-f", "json",
            "--api-key", "",
        ]);
        let json: serde_json::Value = serde_json::from_str(&run(&args).unwrap()).unwrap();
        assert_eq!(json["interpretation"]["fromModel"], false);
        assert!(json["interpretation"]["text"]
            .as_str()
            .unwrap()
            .starts_with("## BRCA1 gene interpretation (human)"));
    }

    #[test]
    fn test_bad_limits() {
        let args = parse_args(&[
            "-g", "BRCA1", "-s", "human", "--sequence", "ACGT", "--min-length", "50", "--max-length", "10",
        ]);
        assert!(run(&args).unwrap_err().downcast_ref::<UsageError>().is_some());
    }
}
