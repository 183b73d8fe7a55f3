use serde::{Deserialize, Serialize};

use crate::codon::{is_stop_codon, CodonTable, START_CODON, STOP_SYMBOL};
use crate::motif::find_motif;

/// Shortest ORF reported, in nucleotides (10 codons).
pub const DEFAULT_MIN_ORF_LENGTH: usize = 30;

/// Most ORFs reported per sequence.
pub const DEFAULT_MAX_ORFS: usize = 5;

const CODON_LEN: usize = 3;

/// Open reading frame result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orf {
    /// Offset of the start codon (0-based, inclusive).
    pub start: usize,
    /// End of the stop codon (0-based, exclusive).
    pub end: usize,
    /// Forward reading frame, 1 to 3.
    pub frame: u8,
    /// Nucleotides from the start codon through the stop codon.
    pub sequence: String,
    /// Translation without the terminal stop.
    pub protein: String,
    pub length_aa: usize,
}

impl Orf {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tuning for [`find_orfs_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrfScanConfig {
    /// Minimum ORF length in nucleotides, stop codon included.
    pub min_length: usize,
    /// Cap on the number of ORFs returned.
    pub max_orfs: usize,
}

impl Default for OrfScanConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_ORF_LENGTH,
            max_orfs: DEFAULT_MAX_ORFS,
        }
    }
}

/// Find open reading frames with the default length floor and cap.
pub fn find_orfs(seq: &str) -> Vec<Orf> {
    find_orfs_with(seq, &OrfScanConfig::default())
}

/// Find ATG-anchored ORFs on the forward strand.
///
/// Every ATG counts as a start, overlapping ones included. From each start the
/// scan walks in-frame codons until the first stop; the span is kept if it is
/// at least `min_length` long and dropped otherwise, and either way the scan
/// for that start ends there. Starts that run off the end without a stop yield
/// nothing. Results are in ascending start order, truncated to `max_orfs`.
/// Identical spans reached from different starts are all reported.
pub fn find_orfs_with(seq: &str, config: &OrfScanConfig) -> Vec<Orf> {
    let upper = seq.to_ascii_uppercase();
    let bases = upper.as_bytes();
    if bases.len() < CODON_LEN {
        return Vec::new();
    }

    let table = CodonTable::standard();
    let mut orfs = Vec::new();

    for start in find_motif(bases, START_CODON) {
        let Some(end) = first_in_frame_stop(bases, start) else {
            continue;
        };
        if end - start < config.min_length {
            continue;
        }

        let coding = &bases[start..end];
        let mut protein = table.translate(coding);
        if protein.ends_with(STOP_SYMBOL) {
            protein.pop();
        }

        orfs.push(Orf {
            start,
            end,
            frame: (start % CODON_LEN) as u8 + 1,
            // Both bounds sit on ASCII bytes, so they are char boundaries.
            sequence: upper[start..end].to_string(),
            length_aa: protein.chars().count(),
            protein,
        });
    }

    orfs.truncate(config.max_orfs);
    orfs
}

/// End offset (exclusive) of the first stop codon in frame with `start`,
/// looking from the codon after the start codon.
fn first_in_frame_stop(bases: &[u8], start: usize) -> Option<usize> {
    let mut pos = start + CODON_LEN;
    while pos + CODON_LEN <= bases.len() {
        if is_stop_codon(&bases[pos..pos + CODON_LEN]) {
            return Some(pos + CODON_LEN);
        }
        pos += CODON_LEN;
    }
    None
}
