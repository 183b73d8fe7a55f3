use crate::{ParseError, SequenceRecord};

/// Residue line width used by [`serialize`].
pub const LINE_WIDTH: usize = 80;

/// Strip whitespace and position numbers from residue text and uppercase it.
/// Every other symbol is kept so that validation can report it.
pub fn clean_residues(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && !c.is_ascii_digit())
        .collect::<String>()
        .to_uppercase()
}

/// Parse a FASTA format string into one or more records
pub fn parse(input: &str) -> Result<Vec<SequenceRecord>, ParseError> {
    let mut records = Vec::new();
    let mut current: Option<SequenceRecord> = None;

    for line in input.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with(';') {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('>') {
            if let Some(record) = current.take() {
                push_record(&mut records, record);
            }

            let mut parts = header.trim().splitn(2, char::is_whitespace);
            let id = parts.next().unwrap_or_default().to_string();
            let description = parts.next().map(|s| s.trim().to_string()).unwrap_or_default();
            current = Some(SequenceRecord {
                id,
                description,
                sequence: String::new(),
            });
        } else if let Some(record) = current.as_mut() {
            record.sequence.push_str(&clean_residues(trimmed));
        } else {
            return Err(ParseError::InvalidFormat(
                "Sequence data before the first '>' header".to_string(),
            ));
        }
    }

    // Don't forget the last record
    if let Some(record) = current {
        push_record(&mut records, record);
    }

    if records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA input".to_string(),
        ));
    }

    Ok(records)
}

/// Headers without residues are dropped.
fn push_record(records: &mut Vec<SequenceRecord>, record: SequenceRecord) {
    if !record.sequence.is_empty() {
        records.push(record);
    }
}

/// Serialize records to FASTA format
pub fn serialize(records: &[SequenceRecord]) -> String {
    let mut out = String::new();

    for record in records {
        out.push('>');
        out.push_str(&record.id);
        if !record.description.is_empty() {
            out.push(' ');
            out.push_str(&record.description);
        }
        out.push('\n');

        for chunk in record.sequence.as_bytes().chunks(LINE_WIDTH) {
            out.push_str(&String::from_utf8_lossy(chunk));
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_sequence() {
        let input = ">seq1 A test sequence\nATCGATCG\nggcctTAA\n";
        let records = parse(input).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "seq1");
        assert_eq!(records[0].description, "A test sequence");
        assert_eq!(records[0].sequence, "ATCGATCGGGCCTTAA");
    }

    #[test]
    fn test_parse_multi_sequence() {
        let input = ">seq1\nATCG\n>seq2\nGGCC\n;comment\n>seq3\nTTAA\n";
        let records = parse(input).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].sequence, "ATCG");
        assert_eq!(records[1].sequence, "GGCC");
        assert_eq!(records[2].sequence, "TTAA");
    }

    #[test]
    fn test_numbered_lines() {
        let input = ">seq1\n1 atgc atgc\n9 ttaa\n";
        let records = parse(input).unwrap();
        assert_eq!(records[0].sequence, "ATGCATGCTTAA");
    }

    #[test]
    fn test_invalid_symbols_kept() {
        let records = parse(">seq1\nATGN-X\n").unwrap();
        assert_eq!(records[0].sequence, "ATGN-X");
    }

    #[test]
    fn test_roundtrip() {
        let long = "ACGT".repeat(50);
        let input = format!(">test A test\n{long}\n");
        let records = parse(&input).unwrap();
        let serialized = serialize(&records);
        assert!(serialized.lines().skip(1).all(|l| l.len() <= LINE_WIDTH));
        let reparsed = parse(&serialized).unwrap();
        assert_eq!(records, reparsed);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_err());
        assert!(parse("> \n").is_err());
    }

    #[test]
    fn test_data_before_header() {
        assert!(matches!(
            parse("ATGC\n>seq1\nATGC\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
