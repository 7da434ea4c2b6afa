use chrono::NaiveDate;

use newsq_guardian::GuardianClient;
use newsq_publish::{ArticleSink, PublishError};

/// What one pipeline invocation did: how many articles survived the fetch
/// and filter, and how many the sink acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub fetched: usize,
    pub delivered: usize,
}

/// Runs the pipeline once: fetch, then publish through `sink`.
///
/// Fetch failures are contained here: any [`GuardianError`] from the
/// search degrades to an empty result set with one error log line, so a
/// flaky upstream never aborts an invocation. When nothing survives the
/// fetch and filter, the sink is not invoked at all.
///
/// [`GuardianError`]: newsq_guardian::GuardianError
///
/// # Errors
///
/// Returns [`PublishError::QueueNotFound`] when the sink's queue does not
/// exist, or the sink's I/O error for file-backed sinks. Transient delivery
/// faults are contained inside the sink and reflected in the count instead.
pub async fn run<S: ArticleSink>(
    client: &GuardianClient,
    sink: &S,
    search_term: &str,
    date_from: Option<NaiveDate>,
) -> Result<RunOutcome, PublishError> {
    let articles = match client.search_articles(search_term, date_from).await {
        Ok(articles) => articles,
        Err(e) => {
            tracing::error!(
                search_term = %search_term,
                error = %e,
                "fetch failed, treating as no articles found"
            );
            Vec::new()
        }
    };

    if articles.is_empty() {
        return Ok(RunOutcome {
            fetched: 0,
            delivered: 0,
        });
    }

    let fetched = articles.len();
    let delivered = sink.publish(&articles).await?;

    Ok(RunOutcome { fetched, delivered })
}
