//! JSON-friendly report envelope for output.

use chrono::{DateTime, Utc};
use geneinsight_core::AnalysisResult;
use geneinsight_llm::{Interpretation, InterpretationSource};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDto {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Input record the sequence was taken from, if it came from a file.
    #[serde(default)]
    pub record_id: Option<String>,
    pub analysis: AnalysisResult,
    #[serde(default)]
    pub interpretation: Option<InterpretationDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretationDto {
    pub text: String,
    pub from_model: bool,
}

impl ReportDto {
    pub fn new(
        analysis: AnalysisResult,
        interpretation: Option<&Interpretation>,
        record_id: Option<String>,
    ) -> Self {
        Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            record_id,
            analysis,
            interpretation: interpretation.map(InterpretationDto::from),
        }
    }
}

impl From<&Interpretation> for InterpretationDto {
    fn from(i: &Interpretation) -> Self {
        InterpretationDto {
            text: i.text.clone(),
            from_model: i.source == InterpretationSource::Model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_json_shape() {
        let analysis = geneinsight_core::analyze("ACGTACGTAC", "TP53", "Homo sapiens").unwrap();
        let interpretation = Interpretation {
            text: "Fallback".to_string(),
            source: InterpretationSource::Fallback,
        };
        let report = ReportDto::new(analysis, Some(&interpretation), Some("seq1".to_string()));
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["reportId"].is_string());
        assert!(json["generatedAt"].is_string());
        assert_eq!(json["recordId"], "seq1");
        assert_eq!(json["analysis"]["geneName"], "TP53");
        assert_eq!(json["interpretation"]["fromModel"], false);
    }

    #[test]
    fn test_report_ids_differ() {
        let analysis = geneinsight_core::analyze("ACGTACGTAC", "TP53", "Homo sapiens").unwrap();
        let a = ReportDto::new(analysis.clone(), None, None);
        let b = ReportDto::new(analysis, None, None);
        assert_ne!(a.report_id, b.report_id);
        assert_eq!(a.analysis, b.analysis);
    }
}
