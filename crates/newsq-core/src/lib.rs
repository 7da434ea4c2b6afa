//! Shared domain types and application configuration for the newsq workspace.

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod app_config;
mod config;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};

/// Default logical queue name used when an invocation does not name one.
pub const DEFAULT_QUEUE_NAME: &str = "guardian-content";

/// A normalized news article, the unit that crosses the fetch→publish
/// boundary.
///
/// Field names on the wire match the Guardian content API
/// (`webPublicationDate`, `webTitle`, `webUrl`) so that queue consumers see
/// the upstream vocabulary; `summary` and `content_preview` are the local
/// projections of the trail text and body. `content_preview` is always at
/// most 1000 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "webPublicationDate")]
    pub web_publication_date: String,
    #[serde(rename = "webTitle")]
    pub web_title: String,
    #[serde(rename = "webUrl")]
    pub web_url: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content_preview: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_serializes_with_upstream_field_names() {
        let article = Article {
            web_publication_date: "2024-04-05T12:34:56Z".to_string(),
            web_title: "Test Article".to_string(),
            web_url: "https://www.theguardian.com/test".to_string(),
            summary: String::new(),
            content_preview: "Preview text".to_string(),
        };

        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(value["webPublicationDate"], "2024-04-05T12:34:56Z");
        assert_eq!(value["webTitle"], "Test Article");
        assert_eq!(value["webUrl"], "https://www.theguardian.com/test");
        assert_eq!(value["summary"], "");
        assert_eq!(value["content_preview"], "Preview text");
    }

    #[test]
    fn article_round_trips_through_json() {
        let article = Article {
            web_publication_date: "2024-04-05T12:34:56Z".to_string(),
            web_title: "Round Trip".to_string(),
            web_url: "https://www.theguardian.com/rt".to_string(),
            summary: "A trail".to_string(),
            content_preview: "Body".to_string(),
        };

        let json = serde_json::to_string(&article).unwrap();
        let back: Article = serde_json::from_str(&json).unwrap();
        assert_eq!(back, article);
    }
}
