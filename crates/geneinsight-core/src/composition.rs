use serde::{Deserialize, Serialize};

/// One of the four DNA bases accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nucleotide {
    A,
    T,
    G,
    C,
}

impl Nucleotide {
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::T, Nucleotide::G, Nucleotide::C];

    /// Case-insensitive conversion; `None` for anything outside A/T/G/C.
    pub fn from_byte(b: u8) -> Option<Self> {
        match b.to_ascii_uppercase() {
            b'A' => Some(Nucleotide::A),
            b'T' => Some(Nucleotide::T),
            b'G' => Some(Nucleotide::G),
            b'C' => Some(Nucleotide::C),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::T => 'T',
            Nucleotide::G => 'G',
            Nucleotide::C => 'C',
        }
    }

    pub fn is_gc(&self) -> bool {
        matches!(self, Nucleotide::G | Nucleotide::C)
    }
}

impl std::fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Occurrence count of each base. Serialized as `{"A": n, "T": n, "G": n, "C": n}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NucleotideComposition {
    #[serde(rename = "A")]
    pub a: usize,
    #[serde(rename = "T")]
    pub t: usize,
    #[serde(rename = "G")]
    pub g: usize,
    #[serde(rename = "C")]
    pub c: usize,
}

impl NucleotideComposition {
    pub fn get(&self, base: Nucleotide) -> usize {
        match base {
            Nucleotide::A => self.a,
            Nucleotide::T => self.t,
            Nucleotide::G => self.g,
            Nucleotide::C => self.c,
        }
    }

    fn increment(&mut self, base: Nucleotide) {
        match base {
            Nucleotide::A => self.a += 1,
            Nucleotide::T => self.t += 1,
            Nucleotide::G => self.g += 1,
            Nucleotide::C => self.c += 1,
        }
    }

    /// Number of counted bases. Equals the sequence length when the sequence
    /// holds nothing but A/T/G/C.
    pub fn total(&self) -> usize {
        self.a + self.t + self.g + self.c
    }

    pub fn gc_count(&self) -> usize {
        self.g + self.c
    }

    /// GC percentage against `length`, which may exceed [`Self::total`] when
    /// the sequence contained uncounted symbols.
    pub fn gc_percent(&self, length: usize) -> f64 {
        if length == 0 {
            return 0.0;
        }
        self.gc_count() as f64 / length as f64 * 100.0
    }

    /// `(base, count)` pairs in A, T, G, C order.
    pub fn iter(&self) -> impl Iterator<Item = (Nucleotide, usize)> + '_ {
        Nucleotide::ALL.into_iter().map(move |base| (base, self.get(base)))
    }
}

/// Count each base. Symbols outside A/T/G/C are skipped rather than rejected.
pub fn count_nucleotides(seq: &str) -> NucleotideComposition {
    let mut composition = NucleotideComposition::default();
    for base in seq.bytes().filter_map(Nucleotide::from_byte) {
        composition.increment(base);
    }
    composition
}

/// GC content as a percentage (0.0 to 100.0), unrounded.
pub fn gc_content(seq: &str) -> f64 {
    count_nucleotides(seq).gc_percent(seq.len())
}
