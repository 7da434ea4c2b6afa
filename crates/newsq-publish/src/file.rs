//! File-backed article sink.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;

use newsq_core::{AppConfig, Article};

use crate::error::PublishError;
use crate::sink::ArticleSink;

/// Writes the whole batch as one JSON array to a timestamped artifact.
///
/// Unlike the queue sink there are no partial-failure semantics: the write
/// is a single atomic operation that either lands the full batch or fails.
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.artifact_dir.clone())
    }
}

#[async_trait]
impl ArticleSink for FileSink {
    async fn publish(&self, articles: &[Article]) -> Result<usize, PublishError> {
        if articles.is_empty() {
            return Ok(0);
        }

        let name = format!("articles-{}.json", Utc::now().format("%Y%m%dT%H%M%SZ"));
        let path = self.dir.join(name);

        let json = serde_json::to_vec_pretty(articles)?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| PublishError::Io {
                path: path.clone(),
                source: e,
            })?;

        tracing::info!(
            path = %path.display(),
            count = articles.len(),
            "wrote article batch"
        );

        Ok(articles.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article {
            web_publication_date: "2024-04-05T12:34:56Z".to_string(),
            web_title: title.to_string(),
            web_url: "https://www.theguardian.com/x".to_string(),
            summary: String::new(),
            content_preview: "preview".to_string(),
        }
    }

    #[tokio::test]
    async fn empty_batch_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path());

        let written = sink.publish(&[]).await.unwrap();

        assert_eq!(written, 0);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn batch_is_written_as_one_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path());
        let articles = vec![article("First"), article("Second")];

        let written = sink.publish(&articles).await.unwrap();
        assert_eq!(written, 2);

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].extension().and_then(|s| s.to_str()), Some("json"));

        let contents = std::fs::read_to_string(&entries[0]).unwrap();
        let back: Vec<Article> = serde_json::from_str(&contents).unwrap();
        assert_eq!(back, articles);
    }

    #[tokio::test]
    async fn unwritable_directory_surfaces_io_error() {
        let sink = FileSink::new("/nonexistent/newsq-artifacts");
        let result = sink.publish(&[article("Only")]).await;
        assert!(matches!(result, Err(PublishError::Io { .. })));
    }
}
