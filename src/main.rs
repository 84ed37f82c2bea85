use kiko::server::{self, AppState};
use kiko::storage::chat::ChatStore;
use kiko::storage::settings::load_settings;
use kiko::types::config::ApiKeys;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings();
    let keys = ApiKeys::from_env();
    tracing::info!(
        addr = %settings.bind_addr(),
        allowed_origin = %settings.allowed_origin,
        gemini_model = %settings.gemini_model,
        "Loaded KIKO settings"
    );
    tracing::info!("Gemini API: {}", ApiKeys::status(&keys.gemini));
    tracing::info!("Unsplash API: {}", ApiKeys::status(&keys.unsplash));

    let store = match ChatStore::open_default() {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open chat storage: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Chat transcript at {}", store.path().display());

    let state = AppState::from_settings(&settings, keys, store);
    if let Err(e) = server::run(settings, state).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
