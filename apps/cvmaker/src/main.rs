mod config;
mod errors;
mod export;
mod models;
mod photo;
mod render;
mod storage;
mod store;

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::{ExportController, HtmlFileExport};
use crate::render::render_document;
use crate::storage::Storage;
use crate::store::DocumentStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Maker v{}", env!("CARGO_PKG_VERSION"));

    // Open the document store: saved CV if present, defaults otherwise.
    let storage = Storage::new(config.storage_path.clone());
    let mut store = DocumentStore::open(storage);
    info!(
        "Loaded CV for \"{}\" (template {})",
        store.document().personal.full_name,
        store.document().meta.template.as_str()
    );

    // Recompute the preview after every mutation, like the live UI does.
    store.subscribe(|doc| {
        let html = render_document(doc);
        debug!("preview re-rendered ({} bytes)", html.len());
    });

    // Export the current document.
    let controller = ExportController::new(Arc::new(HtmlFileExport::new(
        config.export_dir.clone(),
    )));
    match controller.export(store.document()).await {
        Ok(path) => info!("CV exported to {}", path.display()),
        Err(e) => {
            error!("export failed: {e}");
            eprintln!("{}", e.user_message());
        }
    }

    Ok(())
}
