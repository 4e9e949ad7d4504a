//! LLM provider abstraction and implementations.
//!
//! Supports Google Gemini, Anthropic Claude, and `OpenAI` via a common trait.

pub mod anthropic;
pub mod gemini;
pub mod openai;

use serde::{Deserialize, Serialize};

use crate::AiError;

/// Who authored a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    /// The model. Accepts `"model"` on input, as Gemini-style histories
    /// name it.
    #[serde(alias = "model")]
    Assistant,
}

/// A prior turn of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// Trait for LLM providers.
#[async_trait::async_trait]
pub trait LlmProvider: Send + Sync {
    /// Sends a single completion request and returns the model's text
    /// reply, which may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`AiError`] if the request fails.
    async fn complete(&self, system_prompt: &str, messages: &[Message]) -> Result<String, AiError>;
}

/// Creates an LLM provider based on environment variables.
///
/// If `AI_PROVIDER` is explicitly set, uses that provider. Otherwise
/// auto-detects from available credentials:
///
/// 1. `GEMINI_API_KEY` or `API_KEY` set -> Google Gemini
/// 2. `ANTHROPIC_API_KEY` set -> Anthropic Claude
/// 3. `OPENAI_API_KEY` set -> `OpenAI`
///
/// `AI_MODEL` overrides the provider's default model.
///
/// # Errors
///
/// Returns [`AiError::Config`] if no credentials are found or the
/// explicitly requested provider is not configured.
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, AiError> {
    let provider = std::env::var("AI_PROVIDER")
        .ok()
        .or_else(detect_provider)
        .ok_or_else(|| AiError::Config {
            message: "No AI credentials configured".to_string(),
        })?;

    match provider.to_lowercase().as_str() {
        "gemini" | "google" => {
            let api_key = std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("API_KEY"))
                .map_err(|_| AiError::Config {
                    message: "GEMINI_API_KEY environment variable not set".to_string(),
                })?;
            let model = std::env::var("AI_MODEL")
                .unwrap_or_else(|_| gemini::DEFAULT_MODEL.to_string());
            Ok(Box::new(gemini::GeminiProvider::new(api_key, model)))
        }
        "anthropic" | "claude" => {
            let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| AiError::Config {
                message: "ANTHROPIC_API_KEY environment variable not set".to_string(),
            })?;
            let model = std::env::var("AI_MODEL")
                .unwrap_or_else(|_| anthropic::DEFAULT_MODEL.to_string());
            Ok(Box::new(anthropic::AnthropicProvider::new(api_key, model)))
        }
        "openai" | "gpt" => {
            let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| AiError::Config {
                message: "OPENAI_API_KEY environment variable not set".to_string(),
            })?;
            let model =
                std::env::var("AI_MODEL").unwrap_or_else(|_| openai::DEFAULT_MODEL.to_string());
            Ok(Box::new(openai::OpenAiProvider::new(api_key, model)))
        }
        other => Err(AiError::Config {
            message: format!(
                "Unknown AI provider: {other}. Use 'gemini', 'anthropic', or 'openai'."
            ),
        }),
    }
}

/// Auto-detects which provider to use based on available credentials.
///
/// Returns a provider name that matches the arms in
/// [`create_provider_from_env`], or `None` when nothing is configured.
fn detect_provider() -> Option<String> {
    if std::env::var("GEMINI_API_KEY").is_ok() || std::env::var("API_KEY").is_ok() {
        log::info!("Auto-detected AI provider: Gemini (GEMINI_API_KEY/API_KEY found)");
        return Some("gemini".to_string());
    }

    if std::env::var("ANTHROPIC_API_KEY").is_ok() {
        log::info!("Auto-detected AI provider: Anthropic (ANTHROPIC_API_KEY found)");
        return Some("anthropic".to_string());
    }

    if std::env::var("OPENAI_API_KEY").is_ok() {
        log::info!("Auto-detected AI provider: OpenAI (OPENAI_API_KEY found)");
        return Some("openai".to_string());
    }

    log::warn!(
        "No AI credentials detected. Set one of: GEMINI_API_KEY (or API_KEY), \
         ANTHROPIC_API_KEY, OPENAI_API_KEY. You can also set AI_PROVIDER explicitly."
    );
    None
}
