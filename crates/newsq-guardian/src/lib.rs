//! Typed client for the Guardian content API.
//!
//! Issues one search request per call, re-filters the results locally for
//! whole-word relevance, and projects the survivors into [`newsq_core::Article`]
//! records. Failures are returned as [`GuardianError`] values; callers decide
//! whether to contain or propagate them.

mod client;
mod error;
mod filter;
mod normalize;
mod types;

pub use client::GuardianClient;
pub use error::GuardianError;
pub use filter::RelevanceMatcher;
