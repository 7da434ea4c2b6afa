use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};

use newsq_core::AppConfig;

use crate::error::SqsError;
use crate::types::{
    AwsErrorBody, GetQueueUrlRequest, GetQueueUrlResponse, SendMessageRequest, SendMessageResponse,
};

const AMZ_JSON: &str = "application/x-amz-json-1.0";

/// Client for an SQS-compatible queue service.
///
/// All operations POST to the configured endpoint with an `X-Amz-Target`
/// header selecting the operation, per the SQS JSON protocol.
pub struct SqsClient {
    client: Client,
    endpoint: Url,
}

impl SqsClient {
    /// Creates a client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SqsError::InvalidEndpoint`] if `endpoint` is not a valid
    /// URL, or [`SqsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(endpoint: &str, timeout_secs: u64) -> Result<Self, SqsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("newsq/0.1 (article-ingestion)")
            .build()?;

        let endpoint =
            Url::parse(endpoint).map_err(|_| SqsError::InvalidEndpoint(endpoint.to_owned()))?;

        Ok(Self { client, endpoint })
    }

    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`SqsClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, SqsError> {
        Self::new(&config.sqs_endpoint, config.request_timeout_secs)
    }

    /// Resolves a logical queue name to its URL.
    ///
    /// # Errors
    ///
    /// - [`SqsError::QueueDoesNotExist`] when the service reports the queue
    ///   missing; the queue name is embedded in the error.
    /// - [`SqsError::Http`] / [`SqsError::Api`] / [`SqsError::UnexpectedStatus`]
    ///   on any other failure.
    pub async fn get_queue_url(&self, queue_name: &str) -> Result<String, SqsError> {
        let request = GetQueueUrlRequest { queue_name };
        let body = self.post("AmazonSQS.GetQueueUrl", &request).await;

        let body = match body {
            Err(SqsError::Api { ref kind, .. }) if is_queue_missing(kind) => {
                return Err(SqsError::QueueDoesNotExist {
                    queue_name: queue_name.to_owned(),
                })
            }
            other => other?,
        };

        let response: GetQueueUrlResponse =
            serde_json::from_value(body).map_err(|e| SqsError::Deserialize {
                context: format!("GetQueueUrl(name={queue_name})"),
                source: e,
            })?;

        Ok(response.queue_url)
    }

    /// Sends one message with the given opaque body, returning the
    /// service-assigned message ID.
    ///
    /// # Errors
    ///
    /// [`SqsError::Http`] / [`SqsError::Api`] / [`SqsError::UnexpectedStatus`]
    /// on delivery failure.
    pub async fn send_message(&self, queue_url: &str, message_body: &str) -> Result<String, SqsError> {
        let request = SendMessageRequest {
            queue_url,
            message_body,
        };
        let body = self.post("AmazonSQS.SendMessage", &request).await?;

        let response: SendMessageResponse =
            serde_json::from_value(body).map_err(|e| SqsError::Deserialize {
                context: format!("SendMessage(queue_url={queue_url})"),
                source: e,
            })?;

        Ok(response.message_id)
    }

    /// POSTs one JSON-protocol operation and parses the response body,
    /// classifying structured AWS errors on non-2xx statuses.
    async fn post<T: serde::Serialize>(
        &self,
        target: &str,
        payload: &T,
    ) -> Result<serde_json::Value, SqsError> {
        let body = serde_json::to_vec(payload).map_err(|e| SqsError::Deserialize {
            context: target.to_owned(),
            source: e,
        })?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("X-Amz-Target", target)
            .header(CONTENT_TYPE, AMZ_JSON)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            if let Ok(err) = serde_json::from_str::<AwsErrorBody>(&text) {
                return Err(SqsError::Api {
                    kind: err.kind,
                    message: err.message.unwrap_or_default(),
                });
            }
            return Err(SqsError::UnexpectedStatus {
                status: status.as_u16(),
                target: target.to_owned(),
            });
        }

        serde_json::from_str(&text).map_err(|e| SqsError::Deserialize {
            context: target.to_owned(),
            source: e,
        })
    }
}

/// True when an AWS error type names the missing-queue condition. The JSON
/// protocol uses `com.amazonaws.sqs#QueueDoesNotExist`; the older query
/// protocol used `AWS.SimpleQueueService.NonExistentQueue`.
fn is_queue_missing(kind: &str) -> bool {
    kind.ends_with("QueueDoesNotExist") || kind.ends_with("NonExistentQueue")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_queue_missing_matches_json_protocol_type() {
        assert!(is_queue_missing("com.amazonaws.sqs#QueueDoesNotExist"));
    }

    #[test]
    fn is_queue_missing_matches_query_protocol_type() {
        assert!(is_queue_missing("AWS.SimpleQueueService.NonExistentQueue"));
    }

    #[test]
    fn is_queue_missing_rejects_other_errors() {
        assert!(!is_queue_missing("com.amazonaws.sqs#AccessDeniedException"));
        assert!(!is_queue_missing("com.amazonaws.sqs#InvalidAddress"));
    }

    #[test]
    fn new_rejects_invalid_endpoint() {
        let result = SqsClient::new("not a url", 5);
        assert!(matches!(result, Err(SqsError::InvalidEndpoint(_))));
    }
}
