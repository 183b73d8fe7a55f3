//! Sequence analysis engine: base composition, GC content, ORF scanning and
//! heuristic annotation of a single nucleotide sequence.

pub mod analysis;
pub mod annotate;
pub mod codon;
pub mod composition;
pub mod config;
pub mod error;
pub mod motif;
pub mod orf;
pub mod request;

pub use analysis::{analyze, analyze_with, AnalysisResult};
pub use composition::{count_nucleotides, gc_content, Nucleotide, NucleotideComposition};
pub use config::{AnalysisConfig, ValidationLimits};
pub use error::{AnalysisError, InputShapeError};
pub use orf::{find_orfs, find_orfs_with, Orf, OrfScanConfig};
pub use request::{AnalysisRequest, COMMON_GENES, COMMON_SPECIES};
