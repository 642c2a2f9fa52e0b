use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod store;
mod translate;
mod tts;

use api::routes::{create_router, AppState};
use config::Config;
use store::AudioStore;
use translate::{GroqTranslator, Translator};
use tts::GoogleTts;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the environment may already be set
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let addr = config.bind_addr()?;

    tracing::info!("MedSpeak Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);

    let store = AudioStore::new(&config.audio_dir);
    store.ensure_dir().await?;
    tracing::info!("Audio directory: {}", store.dir().display());

    let translator: Option<Arc<dyn Translator>> = match config.groq_api_key.clone() {
        Some(api_key) => {
            let translator = GroqTranslator::new(
                api_key,
                &config.groq_api_base,
                &config.groq_model,
                config.request_timeout,
            )?;
            tracing::info!("Translation enabled with model {}", config.groq_model);
            Some(Arc::new(translator))
        }
        None => {
            tracing::warn!("GROQ_API_KEY not set; /translate will be unavailable");
            None
        }
    };

    let tts = GoogleTts::new(&config.tts_base_url, config.request_timeout)?;

    // Create app state
    let state = Arc::new(AppState {
        translator,
        tts: Arc::new(tts),
        store,
    });

    // Create router
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
