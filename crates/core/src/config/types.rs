use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub importer: Option<ImporterConfig>,
}

/// Catalog persistence configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Where save/load read and write the catalog file.
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/catalog.json")
}

/// Remote importer configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImporterConfig {
    /// Record service base URL (e.g. "https://api.example.com/v1").
    pub base_url: String,
    /// API key, sent as a query parameter when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Pages to fetch per import run (default: 1).
    #[serde(default = "default_pages")]
    pub pages: u32,
    /// Year substituted when a record carries none (default: 1900).
    #[serde(default = "default_year")]
    pub default_year: i32,
    /// Titles longer than this many characters are truncated.
    #[serde(default = "default_max_title_len")]
    pub max_title_len: usize,
    /// Attribution truncation limit.
    #[serde(default = "default_max_director_len")]
    pub max_director_len: usize,
    /// Category truncation limit.
    #[serde(default = "default_max_category_len")]
    pub max_category_len: usize,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: None,
            pages: default_pages(),
            default_year: default_year(),
            max_title_len: default_max_title_len(),
            max_director_len: default_max_director_len(),
            max_category_len: default_max_category_len(),
        }
    }
}

fn default_pages() -> u32 {
    1
}

fn default_year() -> i32 {
    1900
}

fn default_max_title_len() -> usize {
    120
}

fn default_max_director_len() -> usize {
    80
}

fn default_max_category_len() -> usize {
    40
}
