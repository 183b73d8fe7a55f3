use geneinsight_core::AnalysisResult;
use serde::{Deserialize, Serialize};

/// The four fields the interpreter sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretationInput {
    pub gene_name: String,
    pub species: String,
    pub functional_analysis: String,
    pub disease_associations: String,
}

impl From<&AnalysisResult> for InterpretationInput {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            gene_name: result.gene_name.clone(),
            species: result.species.clone(),
            functional_analysis: result.functional_analysis.clone(),
            disease_associations: result.disease_associations.clone(),
        }
    }
}

/// User prompt sent to the model.
pub fn build_prompt(input: &InterpretationInput) -> String {
    format!(
        "You are an expert bioinformatician. Explain the following gene analysis \
         results in clear, accessible language.\n\n\
         ## Gene information\n\
         - **Gene name**: {gene}\n\
         - **Species**: {species}\n\n\
         ## Analysis results\n\
         - **Functional analysis**: {functional}\n\
         - **Disease associations**: {disease}\n\n\
         ## Please explain:\n\
         1. What is the likely main function of this gene?\n\
         2. What role does it play in the organism?\n\
         3. What do the disease associations mean?\n\
         4. Why is research on this gene important?\n\n\
         Keep the answer professional but understandable for students with a \
         biology background.",
        gene = input.gene_name,
        species = input.species,
        functional = input.functional_analysis,
        disease = input.disease_associations,
    )
}

/// Markdown used when the model is not configured or the call fails.
pub fn fallback_interpretation(input: &InterpretationInput) -> String {
    format!(
        "## {gene} gene interpretation ({species})\n\n\
         ### Gene function overview\n\
         Based on bioinformatic analysis of {gene}: {functional}\n\n\
         ### Clinical significance\n\
         {disease}\n\n\
         ### Research value\n\
         Studying this gene helps to understand the related biological processes \
         and disease mechanisms, and may point to targets for future gene therapy \
         and drug development.\n",
        gene = input.gene_name,
        species = input.species,
        functional = input.functional_analysis,
        disease = input.disease_associations,
    )
}
