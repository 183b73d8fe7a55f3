//! Fixed-window motif scanning over byte buffers.

/// A run of back-to-back copies of a motif.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TandemRepeat {
    /// Offset of the first copy (0-based).
    pub start: usize,
    /// Number of consecutive copies.
    pub copies: usize,
    /// Length of one copy.
    pub unit_len: usize,
}

impl TandemRepeat {
    /// End of the last copy (0-based, exclusive).
    pub fn end(&self) -> usize {
        self.start + self.copies * self.unit_len
    }
}

/// Offsets of every occurrence of `motif` in `seq`, overlapping occurrences
/// included. Comparison is exact (callers normalize case).
pub fn find_motif(seq: &[u8], motif: &[u8]) -> Vec<usize> {
    if motif.is_empty() || seq.len() < motif.len() {
        return Vec::new();
    }
    seq.windows(motif.len())
        .enumerate()
        .filter(|(_, window)| *window == motif)
        .map(|(pos, _)| pos)
        .collect()
}

/// The longest tandem run of `motif` anywhere in `seq`. Ties keep the
/// leftmost run.
///
/// Every run lies on one of `motif.len()` phases, so each phase is walked once
/// in steps of the motif length.
pub fn longest_tandem_run(seq: &[u8], motif: &[u8]) -> Option<TandemRepeat> {
    let unit = motif.len();
    if unit == 0 || seq.len() < unit {
        return None;
    }

    let mut best: Option<TandemRepeat> = None;
    for phase in 0..unit {
        let mut run_start = phase;
        let mut copies = 0usize;
        let mut pos = phase;
        while pos + unit <= seq.len() {
            if &seq[pos..pos + unit] == motif {
                if copies == 0 {
                    run_start = pos;
                }
                copies += 1;
                let better = match best {
                    Some(b) => copies > b.copies || (copies == b.copies && run_start < b.start),
                    None => true,
                };
                if better {
                    best = Some(TandemRepeat {
                        start: run_start,
                        copies,
                        unit_len: unit,
                    });
                }
            } else {
                copies = 0;
            }
            pos += unit;
        }
    }
    best
}

/// Whether `seq` holds at least `min_copies` consecutive copies of `motif`.
/// Scattered copies do not count.
pub fn contains_tandem_repeat(seq: &[u8], motif: &[u8], min_copies: usize) -> bool {
    if min_copies == 0 {
        return true;
    }
    longest_tandem_run(seq, motif).is_some_and(|run| run.copies >= min_copies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_motif_overlapping() {
        assert_eq!(find_motif(b"ATGATG", b"ATG"), vec![0, 3]);
        assert_eq!(find_motif(b"AAAA", b"AA"), vec![0, 1, 2]);
        assert!(find_motif(b"AT", b"ATG").is_empty());
        assert!(find_motif(b"ATG", b"").is_empty());
    }

    #[test]
    fn test_longest_tandem_run() {
        let run = longest_tandem_run(b"TTCAGCAGCAGTTCAGCAG", b"CAG").unwrap();
        assert_eq!(run.start, 2);
        assert_eq!(run.copies, 3);
        assert_eq!(run.end(), 11);
    }

    #[test]
    fn test_longest_tandem_run_off_phase() {
        // Run starts at offset 1, not a multiple of the motif length.
        let run = longest_tandem_run(b"ACAGCAG", b"CAG").unwrap();
        assert_eq!(run.start, 1);
        assert_eq!(run.copies, 2);
    }

    #[test]
    fn test_no_run() {
        assert!(longest_tandem_run(b"AAAAAA", b"CAG").is_none());
        assert!(longest_tandem_run(b"", b"CAG").is_none());
    }

    #[test]
    fn test_contains_tandem_repeat_requires_consecutive() {
        let consecutive = "CAG".repeat(40);
        assert!(contains_tandem_repeat(consecutive.as_bytes(), b"CAG", 40));

        let scattered = "CAGT".repeat(50);
        assert!(!contains_tandem_repeat(scattered.as_bytes(), b"CAG", 40));

        let short = "CAG".repeat(39);
        assert!(!contains_tandem_repeat(short.as_bytes(), b"CAG", 40));
    }

    #[test]
    fn test_contains_tandem_repeat_embedded() {
        let seq = format!("ATATAT{}GGGG", "CAG".repeat(45));
        assert!(contains_tandem_repeat(seq.as_bytes(), b"CAG", 40));
    }
}
