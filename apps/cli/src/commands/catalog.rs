use geneinsight_core::{COMMON_GENES, COMMON_SPECIES};

/// One suggested gene name per line.
pub fn genes() -> String {
    list(COMMON_GENES)
}

/// One suggested species per line.
pub fn species() -> String {
    list(COMMON_SPECIES)
}

fn list(names: &[&str]) -> String {
    names.iter().map(|name| format!("{name}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genes_listing() {
        let text = genes();
        assert_eq!(text.lines().count(), COMMON_GENES.len());
        assert!(text.starts_with("BRCA1\nBRCA2\n"));
        assert!(text.ends_with("MET\n"));
    }

    #[test]
    fn test_species_listing() {
        let text = species();
        assert_eq!(text.lines().next(), Some("Homo sapiens"));
        assert!(text.contains("Escherichia coli\n"));
    }
}
