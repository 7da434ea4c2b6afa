use thiserror::Error;

/// Errors returned by the SQS client.
#[derive(Debug, Error)]
pub enum SqsError {
    /// The configured endpoint could not be parsed as a URL.
    #[error("invalid SQS endpoint '{0}'")]
    InvalidEndpoint(String),

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The named queue does not exist upstream.
    #[error("SQS queue '{queue_name}' does not exist")]
    QueueDoesNotExist { queue_name: String },

    /// The service returned a structured error other than queue-not-found.
    #[error("SQS API error {kind}: {message}")]
    Api { kind: String, message: String },

    /// Non-2xx status with a body that was not a structured AWS error.
    #[error("unexpected HTTP status {status} from SQS endpoint for {target}")]
    UnexpectedStatus { status: u16, target: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
