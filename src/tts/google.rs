//! Google Translate speech endpoint, the engine behind gTTS.
//!
//! Text is voiced in chunks of at most [`text::MAX_CHUNK_CHARS`] characters;
//! the MP3 responses are concatenated in order.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{text, SpeechSynthesizer};
use crate::error::AppError;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct GoogleTts {
    client: Client,
    base_url: String,
}

impl GoogleTts {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::SynthesisFailed(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_chunk(
        &self,
        chunk: &str,
        lang: &str,
        idx: usize,
        total: usize,
    ) -> Result<Vec<u8>, AppError> {
        let url = format!("{}/translate_tts", self.base_url);
        let idx = idx.to_string();
        let total = total.to_string();
        let textlen = chunk.chars().count().to_string();

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("q", chunk),
                ("tl", lang),
                ("client", "tw-ob"),
                ("ttsspeed", "1"),
                ("total", total.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::SynthesisFailed(format!("Request to {} failed: {}", url, e)))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::SynthesisFailed(format!(
                "Speech endpoint error {} for lang '{}': {}",
                status, lang, body
            )));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| AppError::SynthesisFailed(format!("Failed to read audio: {}", e)))?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTts {
    async fn synthesize(&self, input: &str, lang: &str) -> Result<Vec<u8>, AppError> {
        let chunks = text::chunks(input);
        if chunks.is_empty() {
            return Err(AppError::SynthesisFailed("No text to speak".into()));
        }

        let total = chunks.len();
        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            tracing::debug!(
                "Voicing chunk {}/{} ({} chars)",
                idx + 1,
                total,
                chunk.chars().count()
            );
            audio.extend(self.fetch_chunk(chunk, lang, idx, total).await?);
        }

        Ok(audio)
    }
}
