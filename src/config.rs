use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use secrecy::Secret;

pub const DEFAULT_GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TTS_BASE_URL: &str = "https://translate.google.com";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    NotANumber { name: &'static str, value: String },

    #[error("Invalid bind address '{0}'")]
    InvalidAddress(String),
}

/// Server configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub audio_dir: PathBuf,
    pub static_dir: PathBuf,
    /// `None` leaves `/translate` unavailable; the server still starts.
    pub groq_api_key: Option<Secret<String>>,
    pub groq_api_base: String,
    pub groq_model: String,
    pub tts_base_url: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let or = |name: &str, default: &str| var(name).unwrap_or_else(|| default.to_string());

        let port = parse_number("PORT", var("PORT"), 5000)?;
        let timeout_secs = parse_number("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS"), 60)?;

        Ok(Self {
            host: or("HOST", "0.0.0.0"),
            port,
            audio_dir: or("AUDIO_DIR", "audio_files").into(),
            static_dir: or("STATIC_DIR", "static").into(),
            groq_api_key: var("GROQ_API_KEY").map(Secret::new),
            groq_api_base: or("GROQ_API_BASE", DEFAULT_GROQ_API_BASE),
            groq_model: or("GROQ_MODEL", DEFAULT_GROQ_MODEL),
            tts_base_url: or("TTS_BASE_URL", DEFAULT_TTS_BASE_URL),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}

fn parse_number<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::NotANumber { name, value: v }),
        None => Ok(default),
    }
}
