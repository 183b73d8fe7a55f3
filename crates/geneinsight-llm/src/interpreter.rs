use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::InterpreterConfig;
use crate::prompt::{build_prompt, fallback_interpretation, InterpretationInput};
use crate::LlmError;

/// Where an interpretation text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpretationSource {
    Model,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub text: String,
    pub source: InterpretationSource,
}

impl Interpretation {
    fn fallback(input: &InterpretationInput) -> Self {
        Self {
            text: fallback_interpretation(input),
            source: InterpretationSource::Fallback,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Turns analysis remarks into prose. Whether the model is used is decided
/// once, from the configuration given to [`Interpreter::new`].
#[derive(Debug, Clone)]
pub struct Interpreter {
    config: InterpreterConfig,
    available: bool,
}

impl Interpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        let available = config.has_api_key();
        if available {
            info!(base_url = %config.base_url, model = %config.model, "language model configured");
        } else {
            info!("no language model API key configured, using templated interpretations");
        }
        Self { config, available }
    }

    pub fn from_env() -> Self {
        Self::new(InterpreterConfig::from_env())
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Model text when available, otherwise the template. Call failures are
    /// logged and replaced by the template.
    pub fn interpret(&self, input: &InterpretationInput) -> Interpretation {
        if !self.available {
            return Interpretation::fallback(input);
        }

        match self.request_completion(&build_prompt(input)) {
            Ok(text) => Interpretation {
                text,
                source: InterpretationSource::Model,
            },
            Err(e) => {
                warn!(gene = %input.gene_name, error = %e, "language model call failed, using fallback");
                Interpretation::fallback(input)
            }
        }
    }

    /// One chat-completions round trip.
    pub fn request_completion(&self, prompt: &str) -> Result<String, LlmError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(LlmError::NotConfigured)?;

        let body = ChatRequest {
            model: &self.config.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            stream: false,
        };

        let url = self.config.completions_url();
        debug!(%url, "sending chat completion request");

        let client = reqwest::blocking::Client::builder()
            .timeout(self.config.timeout)
            .build()?;
        let response = client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
                body: text.trim().to_string(),
            });
        }

        extract_completion_text(&text)
    }
}

/// `choices[0].message.content` of a chat-completions response body.
fn extract_completion_text(body: &str) -> Result<String, LlmError> {
    let response: ChatResponse = serde_json::from_str(body)?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(LlmError::EmptyResponse)
}
