//! Request and response shapes for the SQS JSON protocol.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetQueueUrlRequest<'a> {
    pub queue_name: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetQueueUrlResponse {
    pub queue_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendMessageRequest<'a> {
    pub queue_url: &'a str,
    pub message_body: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendMessageResponse {
    pub message_id: String,
}

/// Structured error body returned with non-2xx statuses, e.g.
/// `{"__type": "com.amazonaws.sqs#QueueDoesNotExist", "message": "..."}`.
#[derive(Debug, Deserialize)]
pub struct AwsErrorBody {
    #[serde(rename = "__type")]
    pub kind: String,
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
}
