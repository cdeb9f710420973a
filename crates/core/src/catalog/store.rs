//! Durable persistence for the catalog.
//!
//! The on-disk format is a JSON array of entry objects written in
//! pre-order, so replaying the file through insert reconstructs a tree of
//! identical shape. Content (ids, titles, statistics) survives any record
//! order; only shape depends on pre-order.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use super::entry::Entry;
use super::tree::Catalog;

/// Errors raised by save and load.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the catalog file failed.
    #[error("catalog file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but does not parse as a catalog.
    #[error("malformed catalog file: {0}")]
    Format(#[from] serde_json::Error),
}

/// Result of a load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and the catalog rebuilt from it.
    Loaded {
        /// Distinct keys present after the load.
        entries: usize,
    },
    /// The path does not exist; the catalog was left untouched.
    FileAbsent,
}

impl Catalog {
    /// Write the catalog to `path` as a pre-order JSON array.
    ///
    /// Missing parent directories are created; existing content at the
    /// path is overwritten.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let entries: Vec<&Entry> = self.pre_order().collect();
        let json = serde_json::to_string_pretty(&entries)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, json)?;

        info!(path = %path.display(), entries = entries.len(), "catalog saved");
        Ok(())
    }

    /// Rebuild the catalog from a file produced by [`Catalog::save`].
    ///
    /// A missing file is a normal condition ([`LoadOutcome::FileAbsent`])
    /// and leaves the catalog unchanged, as does a parse failure: the
    /// whole file is deserialized before the tree is cleared, so a
    /// malformed record never leaves a partially populated catalog.
    /// Duplicate ids in the file merge cumulatively in file order.
    pub fn load(&mut self, path: &Path) -> Result<LoadOutcome, StoreError> {
        if !path.exists() {
            info!(path = %path.display(), "no catalog file, nothing to load");
            return Ok(LoadOutcome::FileAbsent);
        }

        let json = fs::read_to_string(path)?;
        let entries: Vec<Entry> = serde_json::from_str(&json)?;

        self.clear();
        for entry in entries {
            self.insert(entry);
        }

        info!(path = %path.display(), entries = self.len(), "catalog loaded");
        Ok(LoadOutcome::Loaded {
            entries: self.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(id: u64, rating: f64, votes: u64) -> Entry {
        Entry {
            id,
            title: format!("Film-{id}"),
            director: "Someone".to_string(),
            year: 1994,
            category: "Crime".to_string(),
            rating,
            votes,
        }
    }

    fn populated() -> Catalog {
        let mut catalog = Catalog::new();
        for id in [50, 30, 70, 20, 40, 60, 80] {
            catalog.insert(entry(id, 8.0, 100));
        }
        catalog
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");

        let original = populated();
        original.save(&path).unwrap();

        let mut reloaded = Catalog::new();
        let outcome = reloaded.load(&path).unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded { entries: 7 });
        assert_eq!(reloaded.len(), original.len());

        let before: Vec<Entry> = original.in_order().cloned().collect();
        let after: Vec<Entry> = reloaded.in_order().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_reload_preserves_tree_shape() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");

        let original = populated();
        original.save(&path).unwrap();

        let mut reloaded = Catalog::new();
        reloaded.load(&path).unwrap();

        let before: Vec<u64> = original.pre_order().map(|e| e.id).collect();
        let after: Vec<u64> = reloaded.pre_order().map(|e| e.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("catalog.json");

        populated().save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");

        populated().save(&path).unwrap();

        let mut small = Catalog::new();
        small.insert(entry(1, 5.0, 10));
        small.save(&path).unwrap();

        let mut reloaded = Catalog::new();
        reloaded.load(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_load_missing_file_reports_absence() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nowhere.json");

        let mut catalog = populated();
        let outcome = catalog.load(&path).unwrap();

        assert_eq!(outcome, LoadOutcome::FileAbsent);
        // Existing content untouched.
        assert_eq!(catalog.len(), 7);
    }

    #[test]
    fn test_load_malformed_file_fails_whole_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"[{"id": 1, "title": "incomplete"}]"#).unwrap();

        let mut catalog = populated();
        let result = catalog.load(&path);

        assert!(matches!(result, Err(StoreError::Format(_))));
        // Nothing was cleared or partially inserted.
        assert_eq!(catalog.len(), 7);
    }

    #[test]
    fn test_load_merges_duplicate_ids_in_file_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");

        let records = vec![entry(10, 8.0, 100), entry(10, 10.0, 100)];
        std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

        let mut catalog = Catalog::new();
        let outcome = catalog.load(&path).unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded { entries: 1 });
        let merged = catalog.get(10).unwrap();
        assert_eq!(merged.votes, 200);
        assert_eq!(merged.rating, 9.0);
    }
}
