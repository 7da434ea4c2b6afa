use async_trait::async_trait;

use newsq_core::Article;

use crate::error::PublishError;

/// A destination that accepts a batch of articles and reports how many were
/// successfully delivered.
#[async_trait]
pub trait ArticleSink {
    /// Publishes `articles`, returning the number delivered. An empty batch
    /// returns 0 without contacting the destination.
    async fn publish(&self, articles: &[Article]) -> Result<usize, PublishError>;
}
