//! Remote record import.
//!
//! Fetches paginated records from a third-party title service and folds
//! them into a [`Catalog`], one insert per record. The importer has no
//! tree logic of its own; it drives the engine through its public
//! contract.

mod http;
mod types;

pub use http::HttpRecordSource;
pub use types::{map_record, ImportSummary, RecordPage, RemoteRecord};

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::ImporterConfig;

/// Errors raised while talking to the record service.
#[derive(Debug, Error)]
pub enum ImportError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limit exceeded.
    #[error("rate limit exceeded, retry later")]
    RateLimitExceeded,

    /// Service returned an error status.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Response body did not parse.
    #[error("failed to parse response: {0}")]
    ParseError(String),

    /// Importer not configured (missing base URL, rejected API key).
    #[error("importer not configured: {0}")]
    NotConfigured(String),
}

/// A paginated source of remote records.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch one page (1-indexed).
    async fn fetch_page(&self, page: u32) -> Result<RecordPage, ImportError>;
}

/// Fetch up to `config.pages` pages from `source` and insert every mapped
/// record into `catalog`.
///
/// Stops early when the service reports fewer pages than requested. Each
/// record results in exactly one insert, so duplicate ids merge under the
/// catalog's vote-weighted rule.
pub async fn run_import<S: RecordSource + ?Sized>(
    source: &S,
    catalog: &mut Catalog,
    config: &ImporterConfig,
) -> Result<ImportSummary, ImportError> {
    let before = catalog.len();
    let mut fetched = 0usize;

    let mut page = 1u32;
    while page <= config.pages {
        let batch = source.fetch_page(page).await?;
        debug!(page, records = batch.results.len(), "fetched record page");

        fetched += batch.results.len();
        for record in batch.results {
            catalog.insert(map_record(record, config));
        }

        if page >= batch.total_pages {
            break;
        }
        page += 1;
    }

    let inserted = catalog.len() - before;
    let summary = ImportSummary {
        fetched,
        inserted,
        merged: fetched - inserted,
    };
    info!(
        fetched = summary.fetched,
        inserted = summary.inserted,
        merged = summary.merged,
        "import finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockRecordSource;

    fn remote(id: u64, rating: Option<f64>, votes: Option<u64>) -> RemoteRecord {
        RemoteRecord {
            id,
            title: format!("Record-{id}"),
            director: None,
            year: None,
            category: None,
            rating,
            votes,
        }
    }

    fn page_of(records: Vec<RemoteRecord>) -> RecordPage {
        RecordPage {
            page: 0, // overwritten by the mock
            total_pages: 0,
            results: records,
        }
    }

    #[tokio::test]
    async fn test_import_inserts_all_new_records() {
        let source = MockRecordSource::new();
        source
            .set_pages(vec![page_of(vec![
                remote(10, Some(7.0), Some(100)),
                remote(20, Some(8.0), Some(200)),
            ])])
            .await;

        let mut catalog = Catalog::new();
        let config = ImporterConfig::default();
        let summary = run_import(&source, &mut catalog, &config).await.unwrap();

        assert_eq!(
            summary,
            ImportSummary {
                fetched: 2,
                inserted: 2,
                merged: 0
            }
        );
        assert_eq!(catalog.len(), 2);
    }

    #[tokio::test]
    async fn test_import_walks_pages_until_exhausted() {
        let source = MockRecordSource::new();
        source
            .set_pages(vec![
                page_of(vec![remote(1, None, None)]),
                page_of(vec![remote(2, None, None)]),
            ])
            .await;

        let mut catalog = Catalog::new();
        let config = ImporterConfig {
            pages: 5,
            ..ImporterConfig::default()
        };
        let summary = run_import(&source, &mut catalog, &config).await.unwrap();

        // Only two pages exist; the run stops at total_pages.
        assert_eq!(summary.fetched, 2);
        assert_eq!(source.requested_pages().await, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_import_stops_at_configured_page_count() {
        let source = MockRecordSource::new();
        source
            .set_pages(vec![
                page_of(vec![remote(1, None, None)]),
                page_of(vec![remote(2, None, None)]),
                page_of(vec![remote(3, None, None)]),
            ])
            .await;

        let mut catalog = Catalog::new();
        let config = ImporterConfig {
            pages: 2,
            ..ImporterConfig::default()
        };
        run_import(&source, &mut catalog, &config).await.unwrap();

        assert_eq!(source.requested_pages().await, vec![1, 2]);
        assert_eq!(catalog.len(), 2);
    }

    #[tokio::test]
    async fn test_import_counts_merges() {
        let source = MockRecordSource::new();
        source
            .set_pages(vec![page_of(vec![
                remote(10, Some(8.0), Some(100)),
                remote(10, Some(10.0), Some(100)),
            ])])
            .await;

        let mut catalog = Catalog::new();
        let config = ImporterConfig::default();
        let summary = run_import(&source, &mut catalog, &config).await.unwrap();

        assert_eq!(
            summary,
            ImportSummary {
                fetched: 2,
                inserted: 1,
                merged: 1
            }
        );
        let merged = catalog.get(10).unwrap();
        assert_eq!(merged.votes, 200);
        assert_eq!(merged.rating, 9.0);
    }

    #[tokio::test]
    async fn test_import_error_propagates() {
        let source = MockRecordSource::new();
        source.set_next_error(ImportError::RateLimitExceeded).await;

        let mut catalog = Catalog::new();
        let config = ImporterConfig::default();
        let result = run_import(&source, &mut catalog, &config).await;

        assert!(matches!(result, Err(ImportError::RateLimitExceeded)));
        assert!(catalog.is_empty());
    }
}
