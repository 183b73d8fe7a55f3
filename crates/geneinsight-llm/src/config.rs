use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";
pub const DEFAULT_MODEL: &str = "deepseek-chat";

pub const API_KEY_ENV: &str = "DEEPSEEK_API_KEY";
pub const BASE_URL_ENV: &str = "DEEPSEEK_API_URL";
pub const MODEL_ENV: &str = "DEEPSEEK_MODEL";

/// Connection settings for the chat-completions endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpreterConfig {
    /// Bearer token. `None` or blank means the model is not used.
    pub api_key: Option<String>,
    /// Base URL; `/chat/completions` is appended.
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 1000,
            temperature: 0.7,
            timeout: Duration::from_secs(60),
        }
    }
}

impl InterpreterConfig {
    /// Defaults overridden by `DEEPSEEK_API_KEY`, `DEEPSEEK_API_URL` and
    /// `DEEPSEEK_MODEL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_key: non_blank(API_KEY_ENV),
            base_url: non_blank(BASE_URL_ENV).unwrap_or(defaults.base_url),
            model: non_blank(MODEL_ENV).unwrap_or(defaults.model),
            ..defaults
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
