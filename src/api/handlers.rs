use axum::{
    body::Body,
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tokio_util::io::ReaderStream;

use super::{
    CleanupResponse, HealthResponse, LanguagesResponse, SpeakRequest, SpeakResponse,
    TranslateRequest, TranslateResponse,
};
use crate::api::routes::AppState;
use crate::error::AppError;
use crate::store::{AUDIO_MIME_TYPE, MAX_AUDIO_AGE};
use crate::translate::Translation;
use crate::tts::{language, FALLBACK_CODE};

fn validate_text(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::BadRequest("No text provided".into()));
    }

    Ok(())
}

pub async fn translate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, AppError> {
    // Without a credential nothing about the request matters
    let translator = state
        .translator
        .as_ref()
        .ok_or(AppError::ServiceUnavailable)?;

    let Json(request) = payload?;
    validate_text(&request.text)?;

    let translated_text = translator
        .translate(Translation {
            text: &request.text,
            source_lang: &request.source_lang,
            target_lang: &request.target_lang,
        })
        .await?;

    tracing::info!(
        "Translation successful: {} -> {}",
        request.source_lang,
        request.target_lang
    );

    Ok(Json(TranslateResponse {
        translated_text,
        source_lang: request.source_lang,
        target_lang: request.target_lang,
    }))
}

pub async fn speak(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SpeakRequest>, JsonRejection>,
) -> Result<Json<SpeakResponse>, AppError> {
    let Json(request) = payload?;
    validate_text(&request.text)?;

    if language::lookup(&request.lang).is_none() {
        tracing::warn!(
            "Unsupported speech language '{}', using '{}'",
            request.lang,
            FALLBACK_CODE
        );
    }
    let engine_lang = language::engine_code(&request.lang);

    let audio = state.tts.synthesize(&request.text, engine_lang).await?;

    let filename = state
        .store
        .save(&audio)
        .await
        .map_err(|e| AppError::SynthesisFailed(format!("Failed to store audio: {}", e)))?;

    tracing::info!("Audio generated: {} for lang: {}", filename, request.lang);

    Ok(Json(SpeakResponse {
        audio_url: format!("/audio/{}", filename),
        filename,
    }))
}

pub async fn serve_audio(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    let file = state.store.open(&filename).await?;
    let body = Body::from_stream(ReaderStream::new(file));

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, AUDIO_MIME_TYPE)], body).into_response())
}

pub async fn cleanup(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CleanupResponse>, AppError> {
    let count = state.store.cleanup(MAX_AUDIO_AGE).await?;

    if count > 0 {
        tracing::info!("Removed {} audio files older than {:?}", count, MAX_AUDIO_AGE);
    }

    Ok(Json(CleanupResponse {
        message: format!("Cleaned up {} old audio files", count),
    }))
}

pub async fn list_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: language::supported(),
    })
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        translation_available: state.translator.is_some(),
    })
}
