use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] JsonRejection),

    #[error("Translation service not configured")]
    ServiceUnavailable,

    #[error("Translation failed: {0}")]
    TranslationFailed(String),

    #[error("Audio generation failed: {0}")]
    SynthesisFailed(String),

    #[error("Audio file not found: {0}")]
    AudioNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl AppError {
    /// Status, machine code and the message shown to the caller.
    ///
    /// Downstream failures carry internal detail for the log only; the
    /// caller always receives a fixed message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InvalidJson(_) => (
                StatusCode::BAD_REQUEST,
                "INVALID_JSON",
                "Request body must be a JSON object".to_string(),
            ),
            AppError::ServiceUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SERVICE_UNAVAILABLE",
                "Translation service not configured".to_string(),
            ),
            AppError::TranslationFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TRANSLATION_FAILED",
                "Translation failed".to_string(),
            ),
            AppError::SynthesisFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TTS_ERROR",
                "Audio generation failed".to_string(),
            ),
            AppError::AudioNotFound(_) => (
                StatusCode::NOT_FOUND,
                "AUDIO_NOT_FOUND",
                "Audio file not found".to_string(),
            ),
            AppError::IoError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "IO_ERROR",
                "Storage operation failed".to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            tracing::error!("Request failed: {} - {}", code, self);
        } else {
            tracing::warn!("Request rejected: {} - {}", code, self);
        }

        (
            status,
            Json(ErrorResponse {
                error: message,
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}
