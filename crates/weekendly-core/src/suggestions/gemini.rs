//! Suggestion source backed by the Gemini `generateContent` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde_json::{Value, json};

use super::{SuggestionSource, or_empty, parse_suggestions, prompt_for};
use crate::{
    error::{Result, WeekendlyError},
    models::{Category, Suggestion},
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API credential; without one no request is made
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl GeminiConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// HTTP client for Gemini suggestions.
pub struct GeminiClient {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| WeekendlyError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(Self { config, http })
    }

    pub fn has_credential(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn try_fetch(&self, api_key: &str, theme_name: &str) -> Result<Vec<Suggestion>> {
        debug!("Requesting suggestions for '{theme_name}' from {}", self.config.model);

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request_body(theme_name))
            .send()
            .await
            .map_err(WeekendlyError::suggestion)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeekendlyError::suggestion(format!("HTTP {status}")));
        }

        let body: GenerateContentResponse =
            response.json().await.map_err(WeekendlyError::suggestion)?;
        parse_suggestions(&body.text())
    }
}

#[async_trait]
impl SuggestionSource for GeminiClient {
    async fn fetch_suggestions(&self, theme_name: &str) -> Vec<Suggestion> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            debug!("No API key configured, suggestions disabled");
            return Vec::new();
        };
        or_empty(theme_name, self.try_fetch(api_key, theme_name).await)
    }
}

/// Request asking for JSON constrained to the suggestions schema.
fn request_body(theme_name: &str) -> Value {
    let categories: Vec<&str> = Category::SUGGESTABLE.iter().map(Category::as_str).collect();
    json!({
        "contents": [{ "parts": [{ "text": prompt_for(theme_name) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "suggestions": {
                        "type": "ARRAY",
                        "description": "An array of 3 activity suggestions.",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "name": {
                                    "type": "STRING",
                                    "description": "A creative and engaging name for the activity. Should be 3-5 words."
                                },
                                "description": {
                                    "type": "STRING",
                                    "description": "A brief, one-sentence description of the activity."
                                },
                                "category": {
                                    "type": "STRING",
                                    "enum": categories,
                                    "description": "The best-fitting category for this activity."
                                }
                            },
                            "required": ["name", "description", "category"]
                        }
                    }
                }
            }
        }
    })
}

#[derive(Deserialize, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Default)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize, Default)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts concatenated.
    fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| c.content.parts.iter().map(|p| p.text.as_str()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_counts_as_missing() {
        assert!(GeminiConfig::new(Some("  ".to_string())).api_key.is_none());
        assert!(GeminiConfig::new(None).api_key.is_none());
        assert!(GeminiConfig::new(Some("k".to_string())).api_key.is_some());
    }

    #[test]
    fn test_endpoint_format() {
        let client = GeminiClient::new(
            GeminiConfig::new(None)
                .with_base_url("http://localhost:8080/")
                .with_model("test-model"),
        )
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:8080/v1beta/models/test-model:generateContent"
        );
    }

    #[test]
    fn test_request_body_excludes_ai_category() {
        let body = request_body("Adventure Time");
        let categories = &body["generationConfig"]["responseSchema"]["properties"]["suggestions"]
            ["items"]["properties"]["category"]["enum"];
        let categories: Vec<&str> = categories
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(categories.len(), 6);
        assert!(!categories.contains(&"AI Generated"));
        assert!(
            body["contents"][0]["parts"][0]["text"]
                .as_str()
                .unwrap()
                .contains("Adventure Time")
        );
    }

    #[test]
    fn test_response_text_extraction() {
        let body: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"suggestions\":" }, { "text": "[]}" }] } }]
        }))
        .unwrap();
        assert_eq!(body.text(), "{\"suggestions\":[]}");
        assert_eq!(GenerateContentResponse::default().text(), "");
    }

    #[tokio::test]
    async fn test_missing_key_returns_empty_without_request() {
        let client = GeminiClient::new(GeminiConfig::new(None).with_base_url("http://127.0.0.1:9"))
            .unwrap();
        assert!(!client.has_credential());
        assert!(client.fetch_suggestions("Anything").await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_returns_empty() {
        let client = GeminiClient::new(
            GeminiConfig::new(Some("key".to_string())).with_base_url("http://127.0.0.1:9"),
        )
        .unwrap();
        assert!(client.fetch_suggestions("Anything").await.is_empty());
    }
}
