mod bench;
mod menu;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinetree_core::{load_config, Catalog, Config, LoadOutcome};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config: explicit env var wins, then ./config.toml, then
    // built-in defaults so the tool runs without any file at all.
    let config = match std::env::var("CINETREE_CONFIG") {
        Ok(path) => {
            let path = PathBuf::from(path);
            info!("Loading configuration from {:?}", path);
            load_config(&path)
                .with_context(|| format!("Failed to load config from {:?}", path))?
        }
        Err(_) => {
            let default_path = PathBuf::from("config.toml");
            if default_path.exists() {
                info!("Loading configuration from {:?}", default_path);
                load_config(&default_path)?
            } else {
                info!("No configuration file found, using defaults");
                Config::default()
            }
        }
    };
    info!("Catalog file: {:?}", config.catalog.path);

    let mut catalog = Catalog::new();
    match catalog.load(&config.catalog.path)? {
        LoadOutcome::Loaded { entries } => info!("Catalog loaded: {} entries", entries),
        LoadOutcome::FileAbsent => info!("Starting with an empty catalog"),
    }

    menu::run_menu(&mut catalog, &config).await
}
