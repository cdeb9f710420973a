pub mod catalog;
pub mod config;
pub mod importer;
pub mod testing;

pub use catalog::{Catalog, Entry, LoadOutcome, StoreError};
pub use config::{load_config, load_config_from_str, Config, ConfigError, ImporterConfig};
pub use importer::{
    run_import, HttpRecordSource, ImportError, ImportSummary, RecordSource, RemoteRecord,
};
