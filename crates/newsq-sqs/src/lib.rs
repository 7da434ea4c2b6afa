//! Minimal SQS client over the JSON wire protocol.
//!
//! Covers the two operations the pipeline needs: resolving a logical queue
//! name to its URL (`GetQueueUrl`) and delivering one opaque message body
//! (`SendMessage`). A nonexistent queue is a distinguishable
//! [`SqsError::QueueDoesNotExist`] outcome; everything else surfaces as a
//! transport or API error.
//!
//! The configured endpoint must speak the SQS JSON protocol without request
//! signing (LocalStack, ElasticMQ, or a signing proxy in front of AWS).

mod client;
mod error;
mod types;

pub use client::SqsClient;
pub use error::SqsError;
