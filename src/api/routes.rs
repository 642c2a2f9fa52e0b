use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use crate::store::AudioStore;
use crate::translate::Translator;
use crate::tts::SpeechSynthesizer;

pub struct AppState {
    /// `None` when no credential was configured.
    pub translator: Option<Arc<dyn Translator>>,
    pub tts: Arc<dyn SpeechSynthesizer>,
    pub store: AudioStore,
}

pub fn create_router(state: Arc<AppState>, static_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/languages", get(handlers::list_languages))
        .route("/health", get(handlers::health));

    Router::new()
        .route("/translate", post(handlers::translate))
        .route("/speak", post(handlers::speak))
        .route("/audio/:filename", get(handlers::serve_audio))
        .route("/cleanup", post(handlers::cleanup))
        .nest("/api", api_routes)
        .fallback_service(
            ServeDir::new(static_dir.as_ref()).append_index_html_on_directories(true),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
