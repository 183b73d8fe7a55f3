use std::collections::HashMap;

/// The start codon anchoring every open reading frame.
pub const START_CODON: &[u8; 3] = b"ATG";

/// Stop codons of the standard genetic code.
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

/// Amino acid symbol for a stop codon.
pub const STOP_SYMBOL: char = '*';

/// Amino acid symbol for a codon that is not in the table.
pub const UNKNOWN_SYMBOL: char = 'X';

pub fn is_start_codon(codon: &[u8]) -> bool {
    codon.eq_ignore_ascii_case(START_CODON)
}

pub fn is_stop_codon(codon: &[u8]) -> bool {
    STOP_CODONS
        .iter()
        .any(|stop| codon.eq_ignore_ascii_case(&stop[..]))
}

/// Codon to amino acid lookup (NCBI table 1).
pub struct CodonTable {
    pub name: String,
    pub id: u8,
    table: HashMap<[u8; 3], char>,
}

impl CodonTable {
    /// Standard genetic code (NCBI table 1)
    pub fn standard() -> Self {
        let codons: [(&[u8; 3], char); 64] = [
            (b"TTT", 'F'), (b"TTC", 'F'), (b"TTA", 'L'), (b"TTG", 'L'),
            (b"CTT", 'L'), (b"CTC", 'L'), (b"CTA", 'L'), (b"CTG", 'L'),
            (b"ATT", 'I'), (b"ATC", 'I'), (b"ATA", 'I'), (b"ATG", 'M'),
            (b"GTT", 'V'), (b"GTC", 'V'), (b"GTA", 'V'), (b"GTG", 'V'),
            (b"TCT", 'S'), (b"TCC", 'S'), (b"TCA", 'S'), (b"TCG", 'S'),
            (b"CCT", 'P'), (b"CCC", 'P'), (b"CCA", 'P'), (b"CCG", 'P'),
            (b"ACT", 'T'), (b"ACC", 'T'), (b"ACA", 'T'), (b"ACG", 'T'),
            (b"GCT", 'A'), (b"GCC", 'A'), (b"GCA", 'A'), (b"GCG", 'A'),
            (b"TAT", 'Y'), (b"TAC", 'Y'), (b"TAA", '*'), (b"TAG", '*'),
            (b"CAT", 'H'), (b"CAC", 'H'), (b"CAA", 'Q'), (b"CAG", 'Q'),
            (b"AAT", 'N'), (b"AAC", 'N'), (b"AAA", 'K'), (b"AAG", 'K'),
            (b"GAT", 'D'), (b"GAC", 'D'), (b"GAA", 'E'), (b"GAG", 'E'),
            (b"TGT", 'C'), (b"TGC", 'C'), (b"TGA", '*'), (b"TGG", 'W'),
            (b"CGT", 'R'), (b"CGC", 'R'), (b"CGA", 'R'), (b"CGG", 'R'),
            (b"AGT", 'S'), (b"AGC", 'S'), (b"AGA", 'R'), (b"AGG", 'R'),
            (b"GGT", 'G'), (b"GGC", 'G'), (b"GGA", 'G'), (b"GGG", 'G'),
        ];

        CodonTable {
            name: "Standard".to_string(),
            id: 1,
            table: codons.iter().map(|(codon, aa)| (**codon, *aa)).collect(),
        }
    }

    /// Translate a single codon to an amino acid. Anything that is not a
    /// three-symbol A/T/G/C codon maps to `X`.
    pub fn translate_codon(&self, codon: &[u8]) -> char {
        let Ok(key) = <[u8; 3]>::try_from(codon) else {
            return UNKNOWN_SYMBOL;
        };
        self.table
            .get(&key.map(|b| b.to_ascii_uppercase()))
            .copied()
            .unwrap_or(UNKNOWN_SYMBOL)
    }

    /// Translate codon by codon from the first base. A trailing partial codon
    /// is ignored.
    pub fn translate(&self, seq: &[u8]) -> String {
        seq.chunks_exact(3)
            .map(|codon| self.translate_codon(codon))
            .collect()
    }
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::standard()
    }
}
