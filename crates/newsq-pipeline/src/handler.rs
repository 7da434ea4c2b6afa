//! Event-style invocation surface.
//!
//! Mirrors a cloud-function handler: a loosely-typed input envelope in, a
//! `{statusCode, body}` envelope out. Validation problems and delivery
//! outcomes are always reported as a structured response; only client
//! construction (deployment misconfiguration) can make [`handle_event`]
//! itself fail.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use newsq_core::AppConfig;
use newsq_guardian::GuardianClient;
use newsq_publish::{PublishError, SqsSink};

use crate::run::run;
use crate::PipelineError;

/// Input envelope: `search_term` is required, the rest optional.
#[derive(Debug, Default, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub date_from: Option<String>,
    #[serde(default)]
    pub queue_name: Option<String>,
}

/// Output envelope with a numeric status and a human-readable body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl EventResponse {
    fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }
}

/// Handles one event: validate, fetch, publish to the named queue.
///
/// Responses:
/// - 400 when `search_term` is missing/blank or `date_from` is not a valid
///   `YYYY-MM-DD` date;
/// - 200 `"No articles found"` when nothing survives the fetch and filter;
/// - 200 `"<n> articles sent to SQS queue '<name>'"` otherwise;
/// - 500 naming the queue when it does not exist upstream.
///
/// # Errors
///
/// Returns [`PipelineError`] only when a client cannot be constructed
/// (missing API credential, invalid queue endpoint).
pub async fn handle_event(
    config: &AppConfig,
    event: Event,
) -> Result<EventResponse, PipelineError> {
    let Some(search_term) = event
        .search_term
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
    else {
        return Ok(EventResponse::new(400, "Missing required field: search_term"));
    };

    let date_from = match event.date_from.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                return Ok(EventResponse::new(
                    400,
                    format!("Invalid date_from '{raw}': expected YYYY-MM-DD"),
                ));
            }
        },
        None => None,
    };

    let queue_name = event
        .queue_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| config.default_queue_name.clone());

    let client = GuardianClient::from_config(config)?;
    let sink = SqsSink::from_config(config, queue_name.clone())?;

    match run(&client, &sink, search_term, date_from).await {
        Ok(outcome) if outcome.fetched == 0 => Ok(EventResponse::new(200, "No articles found")),
        Ok(outcome) => Ok(EventResponse::new(
            200,
            format!(
                "{} articles sent to SQS queue '{queue_name}'",
                outcome.delivered
            ),
        )),
        Err(PublishError::QueueNotFound { queue_name }) => Ok(EventResponse::new(
            500,
            format!("SQS queue '{queue_name}' does not exist"),
        )),
        Err(e) => Ok(EventResponse::new(500, e.to_string())),
    }
}
