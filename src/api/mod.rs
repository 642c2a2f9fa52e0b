pub mod handlers;
pub mod routes;

use serde::{Deserialize, Serialize};

use crate::tts::LanguageInfo;

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_target_lang() -> String {
    "es".to_string()
}

fn default_speech_lang() -> String {
    "en".to_string()
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
}

#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_speech_lang")]
    pub lang: String,
}

#[derive(Debug, Serialize)]
pub struct SpeakResponse {
    pub audio_url: String,
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct CleanupResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageInfo>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub translation_available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_request_defaults() {
        let req: TranslateRequest = serde_json::from_str(r#"{"text":"hi"}"#).unwrap();
        assert_eq!(req.source_lang, "en");
        assert_eq!(req.target_lang, "es");

        let req: TranslateRequest = serde_json::from_str("{}").unwrap();
        assert!(req.text.is_empty());
    }

    #[test]
    fn speak_request_defaults_to_english() {
        let req: SpeakRequest = serde_json::from_str(r#"{"text":"Hello"}"#).unwrap();
        assert_eq!(req.lang, "en");
    }
}
