pub mod google;
pub mod language;
pub mod text;

use async_trait::async_trait;

use crate::error::AppError;

pub use google::GoogleTts;
pub use language::{LanguageInfo, FALLBACK_CODE};

/// Converts text into MP3 audio.
///
/// `lang` is already an engine code (see [`language::engine_code`]).
/// Failures are reported as [`AppError::SynthesisFailed`].
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>, AppError>;
}
