#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the uzcrime server.
//!
//! These types are serialized to JSON for the REST API. Incidents, totals
//! and statistics are returned in their domain shape; only the envelopes
//! and query parameters live here.

use serde::{Deserialize, Serialize};
use uzcrime_analytics_models::IncidentQuery;
use uzcrime_crime_models::{CrimeFilterKey, DatasetKey, Language};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiHealth {
    pub healthy: bool,
    pub version: String,
}

/// A filter key with its translated label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFilterKey {
    pub key: CrimeFilterKey,
    pub label: String,
}

/// A dataset as listed by `GET /api/datasets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDataset {
    pub key: DatasetKey,
    pub label: String,
    pub filter_keys: Vec<ApiFilterKey>,
}

impl ApiDataset {
    /// Describes `dataset` with labels in `language`.
    #[must_use]
    pub fn new(dataset: DatasetKey, language: Language) -> Self {
        Self {
            key: dataset,
            label: dataset.label(language).to_string(),
            filter_keys: dataset
                .filter_keys()
                .iter()
                .map(|key| ApiFilterKey {
                    key: *key,
                    label: key.label(language).to_string(),
                })
                .collect(),
        }
    }
}

/// Query parameters shared by the dataset-scoped endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetQueryParams {
    /// Dataset to read. Defaults to [`DEFAULT_DATASET`].
    pub dataset: Option<DatasetKey>,
    /// Case-insensitive search text.
    pub search: Option<String>,
    /// Fine-grained label filter.
    pub filter: Option<CrimeFilterKey>,
}

/// Dataset selected when a request names none.
pub const DEFAULT_DATASET: DatasetKey = DatasetKey::Aniqlanadigan;

impl DatasetQueryParams {
    #[must_use]
    pub fn dataset(&self) -> DatasetKey {
        self.dataset.unwrap_or(DEFAULT_DATASET)
    }

    /// The incident filter these parameters describe.
    #[must_use]
    pub fn query(&self) -> IncidentQuery {
        IncidentQuery {
            search: self.search.clone().filter(|s| !s.is_empty()),
            filter: self.filter,
        }
    }
}

/// Query parameters for endpoints that only need a UI language.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LanguageParams {
    pub lang: Option<Language>,
}

/// Query parameters for `GET /api/classify/{id}`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ClassifyParams {
    pub dataset: Option<DatasetKey>,
    pub lang: Option<Language>,
}

/// Classifier output for one incident id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiClassification {
    pub id: String,
    pub dataset: DatasetKey,
    pub filter_key: CrimeFilterKey,
    pub label: String,
}

/// Who authored a chat turn. `"model"` is accepted for the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiChatRole {
    User,
    #[serde(alias = "model")]
    Assistant,
}

/// A prior chat turn sent back by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiChatTurn {
    pub role: ApiChatRole,
    pub text: String,
}

/// Body of `POST /api/ai/analysis`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(flatten)]
    pub scope: DatasetQueryParams,
    #[serde(default)]
    pub language: Language,
}

/// Body of `POST /api/ai/chat`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ApiChatTurn>,
    #[serde(flatten)]
    pub scope: DatasetQueryParams,
    #[serde(default)]
    pub language: Language,
}

/// Plain text reply from the analyst.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiText {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_listing_carries_translated_filter_labels() {
        let dataset = ApiDataset::new(DatasetKey::Kiber, Language::En);
        let json = serde_json::to_value(&dataset).unwrap();

        assert_eq!(json["key"], "kiber");
        assert_eq!(json["label"], DatasetKey::Kiber.label(Language::En));
        assert_eq!(
            json["filterKeys"].as_array().unwrap().len(),
            DatasetKey::Kiber.filter_keys().len()
        );
    }

    #[test]
    fn empty_search_is_ignored_and_dataset_defaults() {
        let params = DatasetQueryParams {
            search: Some(String::new()),
            ..DatasetQueryParams::default()
        };
        assert_eq!(params.dataset(), DEFAULT_DATASET);
        assert_eq!(params.query(), IncidentQuery::default());
    }

    #[test]
    fn chat_request_flattens_scope_and_defaults_language() {
        let request: ChatRequest = serde_json::from_value(serde_json::json!({
            "message": "Eng xavfli hudud?",
            "history": [{ "role": "model", "text": "Salom" }],
            "dataset": "oldini_olish",
            "filter": "robbery",
        }))
        .unwrap();

        assert_eq!(request.scope.dataset(), DatasetKey::OldiniOlish);
        assert_eq!(request.scope.filter, Some(CrimeFilterKey::Robbery));
        assert_eq!(request.history[0].role, ApiChatRole::Assistant);
        assert_eq!(request.language, Language::Uz);
    }
}
