//! Gemini API client
//!
//! HTTP client for the generateContent REST endpoint. The assembled
//! conversation is forwarded verbatim; assistant turns map to the wire
//! role "model".

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{ChatError, ChatModel};
use crate::models::chat::{ChatMessage, ChatRole};

/// Upstream chat service configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout_seconds: u64,
}

/// Gemini API client
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: reqwest::Client,
}

// Wire types

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiClient {
    /// Create new client
    pub fn new(config: GeminiConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_url, self.config.model
        )
    }
}

fn to_wire(conversation: &[ChatMessage]) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: conversation
            .iter()
            .map(|message| Content {
                role: match message.role {
                    ChatRole::User => "user",
                    ChatRole::Assistant => "model",
                }
                .to_string(),
                parts: vec![Part {
                    text: message.text.clone(),
                }],
            })
            .collect(),
    }
}

fn extract_text(response: GenerateContentResponse) -> Result<String, ChatError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or(ChatError::EmptyResponse)
}

#[axum::async_trait]
impl ChatModel for GeminiClient {
    async fn generate(&self, conversation: &[ChatMessage]) -> Result<String, ChatError> {
        let response = self
            .http_client
            .post(self.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&to_wire(conversation))
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ChatError::Api(format!("{}: {}", status, detail)));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        extract_text(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assistant_maps_to_model_role() {
        let conversation = vec![
            ChatMessage::user("what is DC?"),
            ChatMessage::assistant("Drought Code."),
        ];

        let request = to_wire(&conversation);
        assert_eq!(request.contents.len(), 2);
        assert_eq!(request.contents[0].role, "user");
        assert_eq!(request.contents[1].role, "model");
        assert_eq!(request.contents[1].parts[0].text, "Drought Code.");
    }

    #[test]
    fn test_extract_first_candidate_text() {
        let raw = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "FWI combines ISI and BUI."}]}}
            ]
        }"#;

        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(extract_text(parsed).unwrap(), "FWI combines ISI and BUI.");
    }

    #[test]
    fn test_missing_candidates_is_empty_response() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(extract_text(parsed), Err(ChatError::EmptyResponse)));
    }
}
