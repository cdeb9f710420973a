//! Record service wire types and their mapping into catalog entries.

use serde::Deserialize;

use crate::catalog::Entry;
use crate::config::ImporterConfig;

/// One page of records from the service.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPage {
    /// 1-indexed page number.
    pub page: u32,
    /// Total pages available server-side.
    pub total_pages: u32,
    /// Records on this page.
    pub results: Vec<RemoteRecord>,
}

/// A raw record as the service returns it.
///
/// Everything but the key and title is optional; mapping fills the gaps.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub votes: Option<u64>,
}

/// Counters reported after an import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records fetched across all pages.
    pub fetched: usize,
    /// Records that created a new key.
    pub inserted: usize,
    /// Records folded into an existing key.
    pub merged: usize,
}

/// Map a raw record into a catalog entry.
///
/// Missing rating defaults to 0.0, missing year to the configured default,
/// missing attribution to "Unknown"; text fields are truncated to the
/// configured maxima on a character boundary.
pub fn map_record(record: RemoteRecord, config: &ImporterConfig) -> Entry {
    Entry {
        id: record.id,
        title: truncate(record.title, config.max_title_len),
        director: truncate(
            record.director.unwrap_or_else(|| "Unknown".to_string()),
            config.max_director_len,
        ),
        year: record.year.unwrap_or(config.default_year),
        category: truncate(record.category.unwrap_or_default(), config.max_category_len),
        rating: record.rating.unwrap_or(0.0),
        votes: record.votes.unwrap_or(0),
    }
}

fn truncate(text: String, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        text.chars().take(max_chars).collect()
    } else {
        text
    }
}
