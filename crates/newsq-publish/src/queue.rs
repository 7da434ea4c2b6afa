//! Queue-backed article sink.

use async_trait::async_trait;

use newsq_core::{AppConfig, Article};
use newsq_sqs::{SqsClient, SqsError};

use crate::error::PublishError;
use crate::sink::ArticleSink;

/// Delivers each article as one JSON message to a named queue.
///
/// The queue name is resolved once per publish call. Delivery is strictly
/// sequential, one attempt per message: a failed send is logged and skipped,
/// and the remaining messages are still attempted. The returned count covers
/// acknowledged messages only.
pub struct SqsSink {
    client: SqsClient,
    queue_name: String,
}

impl SqsSink {
    pub fn new(client: SqsClient, queue_name: impl Into<String>) -> Self {
        Self {
            client,
            queue_name: queue_name.into(),
        }
    }

    /// Creates a sink from application configuration and a queue name.
    ///
    /// # Errors
    ///
    /// Returns [`SqsError`] if the endpoint is invalid or the HTTP client
    /// cannot be constructed.
    pub fn from_config(config: &AppConfig, queue_name: impl Into<String>) -> Result<Self, SqsError> {
        Ok(Self::new(SqsClient::from_config(config)?, queue_name))
    }

    #[must_use]
    pub fn queue_name(&self) -> &str {
        &self.queue_name
    }
}

#[async_trait]
impl ArticleSink for SqsSink {
    async fn publish(&self, articles: &[Article]) -> Result<usize, PublishError> {
        // Fast path: no resolution, no network traffic.
        if articles.is_empty() {
            return Ok(0);
        }

        let queue_url = match self.client.get_queue_url(&self.queue_name).await {
            Ok(url) => url,
            Err(SqsError::QueueDoesNotExist { queue_name }) => {
                return Err(PublishError::QueueNotFound { queue_name });
            }
            Err(e) => {
                tracing::error!(
                    queue = %self.queue_name,
                    error = %e,
                    "failed to resolve queue, nothing delivered"
                );
                return Ok(0);
            }
        };

        let mut delivered = 0usize;
        for article in articles {
            let body = match serde_json::to_string(article) {
                Ok(body) => body,
                Err(e) => {
                    tracing::error!(
                        title = %article.web_title,
                        error = %e,
                        "failed to serialize article, skipping"
                    );
                    continue;
                }
            };

            match self.client.send_message(&queue_url, &body).await {
                Ok(message_id) => {
                    tracing::debug!(%message_id, title = %article.web_title, "sent message");
                    delivered += 1;
                }
                Err(e) => {
                    tracing::error!(
                        title = %article.web_title,
                        error = %e,
                        "failed to deliver article, continuing with the rest"
                    );
                }
            }
        }

        if delivered > 0 {
            tracing::info!(
                queue = %self.queue_name,
                delivered,
                "published articles to queue"
            );
        }

        Ok(delivered)
    }
}
