//! Activity suggestions from a generative text service.
//!
//! A [`SuggestionSource`] never fails from the caller's point of view: a
//! missing credential, a network error or a response of the wrong shape all
//! come back as an empty list, with the cause logged as a warning.

use async_trait::async_trait;
use log::warn;
use serde::Deserialize;

use crate::{
    error::{Result, WeekendlyError},
    models::{Category, Suggestion},
};

mod gemini;

pub use gemini::{GeminiClient, GeminiConfig};

/// Most suggestions kept from a single response.
pub const MAX_SUGGESTIONS: usize = 3;

/// Something that can propose activities for a theme.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Up to [`MAX_SUGGESTIONS`] ideas for `theme_name`; empty on any failure.
    async fn fetch_suggestions(&self, theme_name: &str) -> Vec<Suggestion>;
}

/// Source used when no credential is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSuggestions;

#[async_trait]
impl SuggestionSource for NoSuggestions {
    async fn fetch_suggestions(&self, _theme_name: &str) -> Vec<Suggestion> {
        Vec::new()
    }
}

/// Prompt sent for a theme.
pub fn prompt_for(theme_name: &str) -> String {
    format!("Generate 3 unique and creative weekend activity ideas for a '{theme_name}' themed weekend.")
}

#[derive(Deserialize)]
struct RawSuggestions {
    #[serde(default)]
    suggestions: Option<Vec<RawSuggestion>>,
}

#[derive(Deserialize)]
struct RawSuggestion {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: Option<String>,
}

/// Parses the model's JSON answer, `{"suggestions": [...]}`.
///
/// Blank text means no suggestions. Categories outside the known set fall
/// back to [`Category::AiGenerated`], as do missing ones.
pub fn parse_suggestions(text: &str) -> Result<Vec<Suggestion>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let raw: RawSuggestions = serde_json::from_str(text)?;
    let Some(items) = raw.suggestions else {
        return Err(WeekendlyError::suggestion("response has no suggestions array"));
    };

    Ok(items
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|item| Suggestion {
            category: Some(
                item.category
                    .as_deref()
                    .and_then(|c| c.parse::<Category>().ok())
                    .unwrap_or(Category::AiGenerated),
            ),
            name: item.name,
            description: item.description,
        })
        .collect())
}

/// Collapses a failed fetch into an empty result, logging the cause.
pub(crate) fn or_empty(theme_name: &str, result: Result<Vec<Suggestion>>) -> Vec<Suggestion> {
    result.unwrap_or_else(|e| {
        warn!("Error fetching suggestions for '{theme_name}': {e}");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suggestions() {
        let text = r#"{"suggestions":[
            {"name":"Sunrise Paddle","description":"Kayak at dawn.","category":"Outdoor"},
            {"name":"Pasta From Scratch","description":"Roll your own.","category":"Creative"}
        ]}"#;
        let parsed = parse_suggestions(text).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].name, "Sunrise Paddle");
        assert_eq!(parsed[0].category, Some(Category::Outdoor));
        assert_eq!(parsed[1].category, Some(Category::Creative));
    }

    #[test]
    fn test_parse_defaults_odd_categories() {
        let text = r#"{"suggestions":[
            {"name":"Jam Session","description":"Bring a guitar."},
            {"name":"Karaoke","description":"Sing.","category":"Music"}
        ]}"#;
        let parsed = parse_suggestions(text).unwrap();
        assert!(parsed.iter().all(|s| s.category == Some(Category::AiGenerated)));
    }

    #[test]
    fn test_parse_caps_at_three() {
        let item = r#"{"name":"X","description":"Y","category":"Food"}"#;
        let text = format!(r#"{{"suggestions":[{item},{item},{item},{item},{item}]}}"#);
        assert_eq!(parse_suggestions(&text).unwrap().len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_parse_rejects_wrong_shapes() {
        assert!(parse_suggestions("   ").unwrap().is_empty());
        assert!(parse_suggestions("{}").is_err());
        assert!(parse_suggestions(r#"{"suggestions":"many"}"#).is_err());
        assert!(parse_suggestions("<html>").is_err());
    }

    #[test]
    fn test_or_empty_swallows_errors() {
        let failed = or_empty("Anything", Err(WeekendlyError::suggestion("timeout")));
        assert!(failed.is_empty());
    }

    #[test]
    fn test_prompt_mentions_theme() {
        assert!(prompt_for("Foodie Fiesta").contains("'Foodie Fiesta' themed weekend"));
    }

    #[tokio::test]
    async fn test_no_suggestions_source() {
        assert!(NoSuggestions.fetch_suggestions("Anything").await.is_empty());
    }
}
