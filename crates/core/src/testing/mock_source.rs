//! Mock record source for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::importer::{ImportError, RecordPage, RecordSource};

/// Mock implementation of the [`RecordSource`] trait.
///
/// Provides controllable behavior for testing:
/// - Serve configured pages in order (page numbers are 1-indexed into the
///   configured vector; `page` and `total_pages` are filled in)
/// - Track which pages were requested, for assertions
/// - Fail the next fetch with an injected error
pub struct MockRecordSource {
    pages: Arc<RwLock<Vec<RecordPage>>>,
    requests: Arc<RwLock<Vec<u32>>>,
    next_error: Arc<RwLock<Option<ImportError>>>,
}

impl MockRecordSource {
    pub fn new() -> Self {
        Self {
            pages: Arc::new(RwLock::new(Vec::new())),
            requests: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Configure the pages to serve, in order.
    pub async fn set_pages(&self, pages: Vec<RecordPage>) {
        *self.pages.write().await = pages;
    }

    /// Fail the next fetch with the given error.
    pub async fn set_next_error(&self, error: ImportError) {
        *self.next_error.write().await = Some(error);
    }

    /// Pages requested so far.
    pub async fn requested_pages(&self) -> Vec<u32> {
        self.requests.read().await.clone()
    }
}

impl Default for MockRecordSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordSource for MockRecordSource {
    async fn fetch_page(&self, page: u32) -> Result<RecordPage, ImportError> {
        self.requests.write().await.push(page);

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        let pages = self.pages.read().await;
        let total_pages = pages.len() as u32;
        match pages.get((page as usize).saturating_sub(1)) {
            Some(stored) => Ok(RecordPage {
                page,
                total_pages,
                results: stored.results.clone(),
            }),
            None => Err(ImportError::ApiError {
                status: 404,
                message: format!("no page {page}"),
            }),
        }
    }
}
