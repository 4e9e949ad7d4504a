//! Executive summary and chat assistant over region statistics.
//!
//! Neither entry point fails. Every provider error is logged and replaced
//! with a fixed reply so the dashboard always has something to render.

use std::time::Duration;

use chrono::SecondsFormat;
use serde::Serialize;
use uzcrime_analytics_models::RegionStats;
use uzcrime_crime_models::{CrimeType, Language};
use uzcrime_incidents_models::CrimeIncident;

use crate::AiError;
use crate::providers::{LlmProvider, Message, create_provider_from_env};

/// Reply when no provider credentials are configured.
pub const MISSING_KEY_MESSAGE: &str =
    "API Key Configuration Missing. Please check your environment variables.";

/// Reply when the summary request fails.
pub const UNAVAILABLE_MESSAGE: &str = "AI Analysis service is temporarily unavailable.";

/// Reply when the model returns an empty summary.
pub const EMPTY_ANALYSIS_MESSAGE: &str = "Analysis unavailable.";

/// Reply when the model returns an empty chat answer.
pub const EMPTY_CHAT_MESSAGE: &str = "I couldn't process that request.";

/// Incidents included in the chat context.
pub const CHAT_SAMPLE_SIZE: usize = 20;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Localized chat reply for a failed request.
#[must_use]
pub const fn chat_error_message(language: Language) -> &'static str {
    match language {
        Language::En => "Sorry, I could not reach the analysis service. Please try again later.",
        Language::Uz => "Kechirasiz, tahlil xizmatiga ulanib bo'lmadi. Keyinroq qayta urinib ko'ring.",
        Language::Ru => "Извините, не удалось связаться с сервисом анализа. Попробуйте позже.",
    }
}

/// Localized opening message of the chat assistant.
#[must_use]
pub const fn chat_greeting(language: Language) -> &'static str {
    match language {
        Language::En => {
            "Hello. I am Sentinel, your AI Crime Analyst. How can I assist you with the Tashkent dataset?"
        }
        Language::Uz => {
            "Assalomu alaykum. Men Sentinel, sizning AI jinoyat tahlilchingizman. Toshkent ma'lumotlari bo'yicha qanday yordam bera olaman?"
        }
        Language::Ru => {
            "Здравствуйте. Я Sentinel, ваш ИИ-аналитик по преступности. Чем могу помочь с данными по Ташкенту?"
        }
    }
}

/// One line per region: name, total, risk, and top category.
#[must_use]
pub fn stats_digest(stats: &[RegionStats]) -> String {
    stats
        .iter()
        .map(|s| {
            format!(
                "{}: {} crimes, Risk Score {}, Top Issue: {}",
                s.region_name, s.total_crimes, s.risk_score, s.top_crime_type
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt asking for an executive summary with three recommendations.
#[must_use]
pub fn summary_prompt(stats: &[RegionStats], language: Language) -> String {
    format!(
        "As a Senior Crime Analyst for Tashkent, Uzbekistan, provide a brief executive summary \
         and 3 actionable tactical recommendations based on this district data:\n\
         {digest}\n\n\
         Focus on resource allocation and predictive risks. Keep it concise (under 200 words).\n\
         IMPORTANT: Provide the response in {lang}.",
        digest = stats_digest(stats),
        lang = language.english_name(),
    )
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatContext<'a> {
    stats: &'a [RegionStats],
    recent_sample: Vec<IncidentSample<'a>>,
}

#[derive(Serialize)]
struct IncidentSample<'a> {
    #[serde(rename = "type")]
    crime_type: CrimeType,
    district: &'a str,
    date: String,
}

/// System instruction for the chat assistant, embedding `stats` and the
/// first [`CHAT_SAMPLE_SIZE`] incidents as JSON.
///
/// # Errors
///
/// Returns [`AiError::Json`] if the context cannot be serialized.
pub fn chat_system_instruction<'a>(
    stats: &[RegionStats],
    incidents: impl IntoIterator<Item = &'a CrimeIncident>,
    language: Language,
) -> Result<String, AiError> {
    let context = ChatContext {
        stats,
        recent_sample: incidents
            .into_iter()
            .take(CHAT_SAMPLE_SIZE)
            .map(|incident| IncidentSample {
                crime_type: incident.crime_type,
                district: &incident.district,
                date: incident.date.to_rfc3339_opts(SecondsFormat::Millis, true),
            })
            .collect(),
    };
    let context = serde_json::to_string(&context)?;

    Ok(format!(
        "You are 'Sentinel', an advanced AI Crime Analytics Assistant for Uzbekistan.\n\
         You have access to a dataset of crime statistics in JSON format.\n\
         Current Data Context: {context}\n\n\
         Rules:\n\
         1. Answer specifically about the provided data.\n\
         2. Be professional, concise, and objective.\n\
         3. If asked about future trends, use the data to make a logical inference but state it is a prediction.\n\
         4. Do not make up crimes that are not in the context.\n\
         5. Always reply in {lang}.",
        lang = language.english_name(),
    ))
}

/// Crime analyst backed by an optional LLM provider.
pub struct Analyst {
    provider: Option<Box<dyn LlmProvider>>,
}

impl Analyst {
    /// Wraps a configured provider.
    #[must_use]
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// An analyst with no provider. Every request gets
    /// [`MISSING_KEY_MESSAGE`] or the localized chat error.
    #[must_use]
    pub const fn unconfigured() -> Self {
        Self { provider: None }
    }

    /// Builds the provider from the environment (see
    /// [`create_provider_from_env`]). Missing or invalid configuration is
    /// logged and yields an unconfigured analyst.
    #[must_use]
    pub fn from_env() -> Self {
        match create_provider_from_env() {
            Ok(provider) => Self::new(provider),
            Err(e) => {
                log::warn!("AI analyst disabled: {e}");
                Self::unconfigured()
            }
        }
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Executive summary of `stats` in `language`.
    pub async fn summarize(&self, stats: &[RegionStats], language: Language) -> String {
        let Some(provider) = &self.provider else {
            log::error!("AI summary requested without configured credentials");
            return MISSING_KEY_MESSAGE.to_string();
        };

        let prompt = summary_prompt(stats, language);
        match request(provider.as_ref(), "", &[Message::user(prompt)]).await {
            Ok(text) if text.trim().is_empty() => EMPTY_ANALYSIS_MESSAGE.to_string(),
            Ok(text) => text,
            Err(e) => {
                log::error!("AI analysis failed: {e}");
                UNAVAILABLE_MESSAGE.to_string()
            }
        }
    }

    /// Answers `message` given the current statistics, a sample of
    /// `incidents`, and the prior conversation.
    pub async fn chat<'a>(
        &self,
        message: &str,
        stats: &[RegionStats],
        incidents: impl IntoIterator<Item = &'a CrimeIncident>,
        history: &[Message],
        language: Language,
    ) -> String {
        let Some(provider) = &self.provider else {
            log::error!("AI chat requested without configured credentials");
            return chat_error_message(language).to_string();
        };

        let system = match chat_system_instruction(stats, incidents, language) {
            Ok(system) => system,
            Err(e) => {
                log::error!("Failed to build chat context: {e}");
                return chat_error_message(language).to_string();
            }
        };

        let mut messages = history.to_vec();
        messages.push(Message::user(message));

        match request(provider.as_ref(), &system, &messages).await {
            Ok(text) if text.trim().is_empty() => EMPTY_CHAT_MESSAGE.to_string(),
            Ok(text) => text,
            Err(e) => {
                log::error!("AI chat failed: {e}");
                chat_error_message(language).to_string()
            }
        }
    }
}

async fn request(
    provider: &dyn LlmProvider,
    system: &str,
    messages: &[Message],
) -> Result<String, AiError> {
    tokio::time::timeout(REQUEST_TIMEOUT, provider.complete(system, messages))
        .await
        .map_err(|_| AiError::Provider {
            message: format!("request timed out after {}s", REQUEST_TIMEOUT.as_secs()),
        })?
}
