//! Kulturkarte Kansas City.
//!
//! HTTP-Dienst für Einreichungen, Orte-Liste und den geschützten Admin-Bereich.

use culture_map::{server, AppOptions, MemoryStore, RecordStore, RestStore, ServerState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Kulturkarte v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut options = AppOptions::load_from_file(&AppOptions::config_path());
    options.apply_env_overrides();

    let store: Arc<dyn RecordStore> = if options.has_store_credentials() {
        Arc::new(RestStore::from_options(&options.store)?)
    } else {
        log::warn!("Kein Store konfiguriert, verwende In-Memory-Beispieldaten");
        Arc::new(MemoryStore::seeded())
    };

    let state = ServerState::new(store, options.access.clone());
    server::serve(state, &options.server).await
}
