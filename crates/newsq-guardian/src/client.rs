//! HTTP client for the Guardian content API search endpoint.
//!
//! Wraps `reqwest` with API key management, query construction, and typed
//! response deserialization, then applies the local relevance re-filter
//! before handing back normalized [`Article`] records.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::{Client, Url};

use newsq_core::{AppConfig, Article};

use crate::error::GuardianError;
use crate::filter::RelevanceMatcher;
use crate::normalize::to_article;
use crate::types::SearchEnvelope;

const DEFAULT_PAGE_SIZE: u32 = 10;

/// Client for the Guardian content API.
///
/// Manages the HTTP client, API key, base URL, and page size. Use
/// [`GuardianClient::from_config`] for production or
/// [`GuardianClient::with_base_url`] to point at a mock server in tests.
pub struct GuardianClient {
    client: Client,
    api_key: String,
    base_url: Url,
    page_size: u32,
}

impl GuardianClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GuardianError::MissingApiKey`] when no API key is
    /// configured (checked before any request can be issued), or
    /// [`GuardianError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, GuardianError> {
        let api_key = config
            .guardian_api_key
            .as_deref()
            .ok_or(GuardianError::MissingApiKey)?;

        let mut client = Self::with_base_url(
            api_key,
            config.request_timeout_secs,
            &config.guardian_base_url,
        )?;
        client.page_size = config.page_size;
        Ok(client)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GuardianError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GuardianError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GuardianError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("newsq/0.1 (article-ingestion)")
            .build()?;

        let base_url = Url::parse(base_url)
            .map_err(|_| GuardianError::InvalidBaseUrl(base_url.to_owned()))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Searches for articles matching `search_term`, newest first.
    ///
    /// The upstream query asks for an exact phrase match (the term is
    /// quote-wrapped) and requests trail text and body alongside each
    /// result. Results are then re-filtered locally: a result survives only
    /// if the term occurs as a whole word in its title, trail text, or
    /// body. Survivors are projected into [`Article`] records in upstream
    /// order.
    ///
    /// # Errors
    ///
    /// - [`GuardianError::EmptySearchTerm`] if `search_term` is blank; the
    ///   API is not called.
    /// - [`GuardianError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GuardianError::Deserialize`] if the response does not match the
    ///   expected envelope.
    pub async fn search_articles(
        &self,
        search_term: &str,
        date_from: Option<NaiveDate>,
    ) -> Result<Vec<Article>, GuardianError> {
        let term = search_term.trim();
        if term.is_empty() {
            return Err(GuardianError::EmptySearchTerm);
        }

        let url = self.build_url(term, date_from);
        let body = self.request_json(&url).await?;

        let envelope: SearchEnvelope =
            serde_json::from_value(body).map_err(|e| GuardianError::Deserialize {
                context: format!("search(q={term})"),
                source: e,
            })?;

        let matcher = RelevanceMatcher::new(term);
        let articles: Vec<Article> = envelope
            .response
            .results
            .iter()
            .filter(|r| matcher.matches_any([&*r.web_title, &*r.fields.trail_text, &*r.fields.body]))
            .map(to_article)
            .collect();

        tracing::info!(
            count = articles.len(),
            search_term = %term,
            "retrieved articles from the Guardian content API"
        );

        Ok(articles)
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters. The search term is quote-wrapped so the upstream query
    /// matches the exact phrase.
    fn build_url(&self, term: &str, date_from: Option<NaiveDate>) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", &format!("\"{term}\""));
            pairs.append_pair("api-key", &self.api_key);
            pairs.append_pair("show-fields", "trailText,body");
            pairs.append_pair("page-size", &self.page_size.to_string());
            pairs.append_pair("order-by", "newest");
            if let Some(date) = date_from {
                pairs.append_pair("from-date", &date.format("%Y-%m-%d").to_string());
            }
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GuardianError::Http`] on network failure or a non-2xx
    /// status, or [`GuardianError::Deserialize`] if the body is not valid
    /// JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, GuardianError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GuardianError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}
