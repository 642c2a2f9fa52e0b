pub mod groq;
pub mod prompt;

use async_trait::async_trait;

use crate::error::AppError;

pub use groq::GroqTranslator;

/// A single translation job.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation<'a> {
    pub text: &'a str,
    pub source_lang: &'a str,
    pub target_lang: &'a str,
}

/// Something that turns text in one language into another.
///
/// Failures are reported as [`AppError::TranslationFailed`].
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, job: Translation<'_>) -> Result<String, AppError>;
}
