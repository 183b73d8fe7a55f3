use crate::InputFormat;

/// Auto-detect input format from content
pub fn detect_format(content: &str) -> InputFormat {
    let trimmed = content.trim_start();

    if trimmed.starts_with('>') || trimmed.starts_with(';') {
        InputFormat::Fasta
    } else if trimmed.is_empty() {
        InputFormat::Unknown
    } else {
        InputFormat::Raw
    }
}

/// Detect format from file extension
pub fn detect_format_from_extension(path: &str) -> InputFormat {
    let lower = path.to_lowercase();
    if lower.ends_with(".fa")
        || lower.ends_with(".fasta")
        || lower.ends_with(".fna")
        || lower.ends_with(".fsa")
        || lower.ends_with(".ffn")
    {
        InputFormat::Fasta
    } else if lower.ends_with(".txt") || lower.ends_with(".seq") {
        InputFormat::Raw
    } else {
        InputFormat::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_fasta() {
        assert_eq!(detect_format(">seq1\nATCGATCG"), InputFormat::Fasta);
        assert_eq!(detect_format("\n\n  >seq1\nATCG"), InputFormat::Fasta);
    }

    #[test]
    fn test_detect_raw() {
        assert_eq!(detect_format("ATCGATCG\nGGCC"), InputFormat::Raw);
    }

    #[test]
    fn test_detect_empty() {
        assert_eq!(detect_format("  \n\t"), InputFormat::Unknown);
    }

    #[test]
    fn test_detect_from_extension() {
        assert_eq!(detect_format_from_extension("brca1.FASTA"), InputFormat::Fasta);
        assert_eq!(detect_format_from_extension("test.fa"), InputFormat::Fasta);
        assert_eq!(detect_format_from_extension("paste.txt"), InputFormat::Raw);
        assert_eq!(detect_format_from_extension("pUC19.gb"), InputFormat::Unknown);
    }
}
