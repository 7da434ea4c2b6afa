//! Guardian content API response types.
//!
//! The API wraps search results in a `{"response": {"results": [...]}}`
//! envelope. Individual result fields are tolerated as absent (`#[serde(default)]`)
//! but the envelope itself must be present on a successful response.

use serde::Deserialize;

/// Top-level envelope: `{ "response": { ... } }`.
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    pub response: SearchResponse,
}

/// The inner response carrying the result list.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<RawSearchResult>,
}

/// One search result as returned by the API, before local filtering.
#[derive(Debug, Deserialize)]
pub struct RawSearchResult {
    #[serde(rename = "webPublicationDate", default)]
    pub web_publication_date: String,
    #[serde(rename = "webTitle", default)]
    pub web_title: String,
    #[serde(rename = "webUrl", default)]
    pub web_url: String,
    /// Extra fields requested via `show-fields=trailText,body`.
    #[serde(default)]
    pub fields: ResultFields,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResultFields {
    #[serde(rename = "trailText", default)]
    pub trail_text: String,
    #[serde(default)]
    pub body: String,
}
