use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by article sinks.
///
/// Per-message delivery faults are contained inside the queue sink and never
/// appear here; only outcomes the caller must act on are represented.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The logical queue name did not resolve to an existing queue. Kept
    /// distinct so callers can tell "queue missing" from "nothing delivered".
    #[error("SQS queue '{queue_name}' does not exist")]
    QueueNotFound { queue_name: String },

    /// The article batch could not be serialized for the file artifact.
    #[error("failed to serialize article batch: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The file artifact could not be written.
    #[error("failed to write artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
