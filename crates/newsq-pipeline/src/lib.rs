//! The core fetch→publish pipeline and the event-style invocation surface.
//!
//! Every wrapper (CLI, interactive prompt, HTTP server) funnels into
//! [`run`], which fetches articles fail-soft and hands the surviving batch
//! to an [`ArticleSink`](newsq_publish::ArticleSink). [`handle_event`]
//! adapts the lambda-shaped event envelope onto the same call.

mod handler;
mod run;

use thiserror::Error;

pub use handler::{handle_event, Event, EventResponse};
pub use run::{run, RunOutcome};

/// Construction-time failures of the pipeline's clients.
///
/// These represent deployment misconfiguration (missing credential, bad
/// endpoint) and are surfaced as process-level failures by the wrappers,
/// never as a structured event response.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Guardian(#[from] newsq_guardian::GuardianError),

    #[error(transparent)]
    Sqs(#[from] newsq_sqs::SqsError),
}
