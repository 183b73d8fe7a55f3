use geneinsight_llm::Interpreter;

use crate::cli::LlmArgs;

/// Describe the interpreter configuration.
pub fn run(args: &LlmArgs) -> String {
    let interpreter = Interpreter::new(args.to_config());
    let config = interpreter.config();
    if interpreter.is_available() {
        format!(
            "Language model: configured\nEndpoint: {}\nModel: {}\n",
            config.completions_url(),
            config.model
        )
    } else {
        "Language model: not configured (set DEEPSEEK_API_KEY); interpretations use the built-in template\n"
            .to_string()
    }
}
