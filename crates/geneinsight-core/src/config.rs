use serde::{Deserialize, Serialize};

use crate::annotate::AnnotationConfig;
use crate::orf::OrfScanConfig;

/// Knobs for one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub orf: OrfScanConfig,
    #[serde(default)]
    pub annotation: AnnotationConfig,
}

/// Sequence length bounds enforced by request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationLimits {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_length: 10,
            max_length: 10_000,
        }
    }
}
