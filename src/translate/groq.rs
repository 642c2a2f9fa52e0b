//! Groq chat-completion client (OpenAI-compatible wire format).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use super::{prompt, Translation, Translator};
use crate::error::AppError;

const TEMPERATURE: f32 = 0.3;
const MAX_TOKENS: u32 = 1000;

pub struct GroqTranslator {
    client: Client,
    api_key: Secret<String>,
    api_base: String,
    model: String,
}

impl std::fmt::Debug for GroqTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqTranslator")
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .finish()
    }
}

impl GroqTranslator {
    pub fn new(
        api_key: Secret<String>,
        api_base: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::TranslationFailed(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            api_key,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    fn request_body<'a>(&'a self, user_prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompt::SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

#[async_trait]
impl Translator for GroqTranslator {
    async fn translate(&self, job: Translation<'_>) -> Result<String, AppError> {
        let user_prompt = prompt::build(&job);
        let url = format!("{}/chat/completions", self.api_base);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&self.request_body(&user_prompt))
            .send()
            .await
            .map_err(|e| AppError::TranslationFailed(format!("Request to {} failed: {}", url, e)))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::TranslationFailed(format!(
                "Groq API error {}: {}",
                status, body
            )));
        }

        let completion: ChatResponse = resp
            .json()
            .await
            .map_err(|e| AppError::TranslationFailed(format!("Malformed completion: {}", e)))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| AppError::TranslationFailed("Completion had no content".into()))?;

        if text.is_empty() {
            return Err(AppError::TranslationFailed("Completion was empty".into()));
        }

        Ok(text)
    }
}

// ── API request/response types ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        wiremock::{
            matchers::{body_partial_json, header, method, path},
            Mock, MockServer, ResponseTemplate,
        },
    };

    fn translator(base: &str) -> GroqTranslator {
        GroqTranslator::new(
            Secret::new("test-key".into()),
            base,
            "llama-3.3-70b-versatile",
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn job() -> Translation<'static> {
        Translation {
            text: "Take two tablets daily",
            source_lang: "en",
            target_lang: "es",
        }
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let t = GroqTranslator::new(
            Secret::new("super-secret-key".into()),
            "http://localhost",
            "m",
            Duration::from_secs(1),
        )
        .unwrap();
        let debug_output = format!("{:?}", t);
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_request_body_shape() {
        let t = translator("http://localhost/");
        assert_eq!(t.api_base, "http://localhost");

        let body = serde_json::to_value(t.request_body("prompt")).unwrap();
        assert_eq!(body["model"], "llama-3.3-70b-versatile");
        assert_eq!(body["max_tokens"], 1000);
        assert!((body["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], prompt::SYSTEM_PROMPT);
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "prompt");
    }

    #[tokio::test]
    async fn test_translate_returns_trimmed_content() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({
                "model": "llama-3.3-70b-versatile",
                "max_tokens": 1000
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [
                    {"index": 0, "message": {"role": "assistant", "content": "  Tome dos tabletas al día \n"}}
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let text = translator(&mock_server.uri()).translate(job()).await.unwrap();
        assert_eq!(text, "Tome dos tabletas al día");
    }

    #[tokio::test]
    async fn test_translate_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&mock_server)
            .await;

        let err = translator(&mock_server.uri()).translate(job()).await.unwrap_err();
        assert!(matches!(err, AppError::TranslationFailed(ref msg) if msg.contains("401")));
    }

    #[tokio::test]
    async fn test_translate_without_choices() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&mock_server)
            .await;

        let err = translator(&mock_server.uri()).translate(job()).await.unwrap_err();
        assert!(matches!(err, AppError::TranslationFailed(_)));
    }

    #[tokio::test]
    async fn test_translate_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&mock_server)
            .await;

        let err = translator(&mock_server.uri()).translate(job()).await.unwrap_err();
        assert!(matches!(err, AppError::TranslationFailed(ref msg) if msg.contains("Malformed")));
    }

    #[test]
    fn test_response_parsing_null_content() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(response.choices[0].message.content.is_none());
    }
}
