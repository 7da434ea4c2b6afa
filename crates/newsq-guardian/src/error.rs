use thiserror::Error;

/// Errors returned by the Guardian content API client.
#[derive(Debug, Error)]
pub enum GuardianError {
    /// No API key was configured. Raised at construction time, before any
    /// request can be issued.
    #[error("GUARDIAN_API_KEY is not configured")]
    MissingApiKey,

    /// The search term was empty after trimming; the upstream API is never
    /// called for an empty query.
    #[error("search term must not be empty")]
    EmptySearchTerm,

    /// The configured base URL could not be parsed.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// Network or TLS failure, or a non-2xx HTTP status, from the underlying
    /// HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
