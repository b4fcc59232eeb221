//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Path to the serialized feature scaler
    pub scaler_path: String,

    /// Path to the serialized regression model
    pub model_path: String,

    /// Gemini API key (empty = chat unconfigured)
    pub gemini_api_key: String,

    /// Gemini model name
    pub gemini_model: String,

    /// Gemini API base URL
    pub gemini_api_url: String,

    /// Upstream chat call timeout in seconds
    pub chat_timeout_seconds: u64,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),

            scaler_path: env::var("SCALER_PATH")
                .unwrap_or_else(|_| "artifacts/scaler.json".to_string()),

            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| "artifacts/ridge_model.json".to_string()),

            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),

            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),

            gemini_api_url: env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string()),

            chat_timeout_seconds: env::var("CHAT_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Whether the external chat service has credentials
    pub fn gemini_configured(&self) -> bool {
        !self.gemini_api_key.is_empty()
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
