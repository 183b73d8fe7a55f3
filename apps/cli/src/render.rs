//! Markdown rendering of a report.

use geneinsight_core::Orf;

use crate::dto::ReportDto;

/// ORF sequences longer than this are shortened in the listing.
const MAX_SHOWN_BASES: usize = 60;

pub fn render_markdown(report: &ReportDto) -> String {
    let analysis = &report.analysis;
    let mut out = String::new();

    out.push_str(&format!("# {} ({})\n\n", analysis.gene_name, analysis.species));
    if let Some(record) = &report.record_id {
        out.push_str(&format!("Record: `{record}`\n\n"));
    }

    out.push_str("| Property | Value |\n|---|---|\n");
    out.push_str(&format!("| Sequence length | {} bp |\n", analysis.sequence_length));
    out.push_str(&format!("| GC content | {}% |\n", analysis.gc_content_display()));
    out.push_str(&format!("| ORFs found | {} |\n\n", analysis.potential_proteins.len()));

    out.push_str("## Nucleotide composition\n\n| Base | Count | Percent |\n|---|---|---|\n");
    for (base, count) in analysis.nucleotide_composition.iter() {
        out.push_str(&format!(
            "| {base} | {count} | {:.2}% |\n",
            percent(count, analysis.sequence_length)
        ));
    }
    out.push('\n');

    out.push_str("## Potential open reading frames\n\n");
    if analysis.potential_proteins.is_empty() {
        out.push_str("_None found._\n");
    } else {
        for (i, orf) in analysis.potential_proteins.iter().enumerate() {
            out.push_str(&render_orf(i + 1, orf));
        }
    }
    out.push('\n');

    out.push_str(&format!("## Functional analysis\n\n{}\n\n", analysis.functional_analysis));
    out.push_str(&format!("## Disease associations\n\n{}\n", analysis.disease_associations));

    if let Some(interpretation) = &report.interpretation {
        out.push_str("\n## Interpretation\n\n");
        if !interpretation.from_model {
            out.push_str("_Language model unavailable; templated summary._\n\n");
        }
        out.push_str(interpretation.text.trim_end());
        out.push('\n');
    }

    out
}

fn render_orf(index: usize, orf: &Orf) -> String {
    let shown = if orf.sequence.len() > MAX_SHOWN_BASES {
        format!("{}...", &orf.sequence[..MAX_SHOWN_BASES])
    } else {
        orf.sequence.clone()
    };
    format!(
        "{index}. `{}..{}` frame {}, {} bp, {} aa\n   - DNA: `{shown}`\n   - Protein: `{}`\n",
        orf.start,
        orf.end,
        orf.frame,
        orf.len(),
        orf.length_aa,
        orf.protein
    )
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::InterpretationDto;

    fn report(seq: &str) -> ReportDto {
        let analysis = geneinsight_core::analyze(seq, "BRCA1", "Homo sapiens").unwrap();
        ReportDto::new(analysis, None, None)
    }

    #[test]
    fn test_render_basic_sections() {
        let text = render_markdown(&report("GAA"));
        assert!(text.starts_with("# BRCA1 (Homo sapiens)\n"));
        assert!(text.contains("| GC content | 33.33% |"));
        assert!(text.contains("| A | 2 | 66.67% |"));
        assert!(text.contains("_None found._"));
        assert!(text.contains("## Disease associations"));
        assert!(!text.contains("## Interpretation"));
    }

    #[test]
    fn test_render_orfs() {
        let seq = format!("ATG{}TAA", "GCT".repeat(30));
        let text = render_markdown(&report(&seq));
        assert!(text.contains("1. `0..96` frame 1, 96 bp, 31 aa"));
        assert!(text.contains("..."));
        assert!(text.contains("Protein: `MAAAA"));
    }

    #[test]
    fn test_render_interpretation() {
        let mut r = report("ACGTACGTAC");
        r.interpretation = Some(InterpretationDto {
            text: "Some prose.\n\n".to_string(),
            from_model: false,
        });
        let text = render_markdown(&r);
        assert!(text.contains("## Interpretation\n\n_Language model unavailable"));
        assert!(text.ends_with("Some prose.\n"));
    }
}
