//! Delivery of normalized articles to a sink.
//!
//! [`ArticleSink`] is the capability the pipeline publishes through. The
//! queue sink delivers one message per article with per-message failure
//! isolation; the file sink writes the whole batch as a single timestamped
//! JSON artifact.

mod error;
mod file;
mod queue;
mod sink;

pub use error::PublishError;
pub use file::FileSink;
pub use queue::SqsSink;
pub use sink::ArticleSink;
