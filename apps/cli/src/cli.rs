use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use geneinsight_core::orf::{DEFAULT_MAX_ORFS, DEFAULT_MIN_ORF_LENGTH};
use geneinsight_llm::config::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use geneinsight_llm::InterpreterConfig;

#[derive(Parser, Debug)]
#[command(name = "geneinsight", version, about = "Heuristic gene sequence analysis", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one nucleotide sequence
    Analyze(AnalyzeArgs),

    /// Show whether the language model interpreter is configured
    Status(LlmArgs),

    /// List commonly analyzed gene names
    Genes,

    /// List common species
    Species,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Json,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Gene name, 2-50 letters, digits, '_' or '-' (see `geneinsight genes`)
    #[arg(short, long)]
    pub gene: String,

    /// Species the sequence comes from (see `geneinsight species`)
    #[arg(short, long)]
    pub species: String,

    /// Nucleotide sequence given inline
    #[arg(long, conflicts_with = "input", required_unless_present = "input")]
    pub sequence: Option<String>,

    /// FASTA or plain sequence file
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Record id to analyze when the file holds several records
    #[arg(long, requires = "input")]
    pub record: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Ask the language model for an interpretation
    #[arg(long)]
    pub interpret: bool,

    /// Shortest accepted sequence
    #[arg(long, default_value_t = 10)]
    pub min_length: usize,

    /// Longest accepted sequence
    #[arg(long, default_value_t = 10_000)]
    pub max_length: usize,

    /// Shortest reported ORF in nucleotides
    #[arg(long, default_value_t = DEFAULT_MIN_ORF_LENGTH)]
    pub min_orf_length: usize,

    /// Most ORFs reported
    #[arg(long, default_value_t = DEFAULT_MAX_ORFS)]
    pub max_orfs: usize,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Args, Debug)]
pub struct LlmArgs {
    /// API key for the chat-completions endpoint
    #[arg(long, env = "DEEPSEEK_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the chat-completions API
    #[arg(long, env = "DEEPSEEK_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Model name
    #[arg(long, env = "DEEPSEEK_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 60)]
    pub timeout_secs: u64,
}

impl LlmArgs {
    pub fn to_config(&self) -> InterpreterConfig {
        InterpreterConfig {
            api_key: self.api_key.clone(),
            base_url: self.api_url.clone(),
            model: self.model.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..InterpreterConfig::default()
        }
    }
}
