//! Chat proxy
//!
//! Assembles the fixed domain-restricted preamble plus truncated caller
//! history into an upstream conversation. The vendor client sits behind
//! [`ChatModel`] so it can be swapped or stubbed in tests.

pub mod gemini;

use thiserror::Error;

use crate::models::chat::{ChatMessage, ChatTurn};

/// Most recent history turns forwarded upstream.
pub const HISTORY_WINDOW: usize = 6;

/// Domain restriction applied to every conversation.
pub const SYSTEM_PROMPT: &str = "You are an FWI (Fire Weather Index) assistant. \
You only answer questions about the Fire Weather Index system: its components \
(FFMC, DMC, DC, ISI, BUI, FWI), how the index is computed from weather and \
fuel-moisture inputs, its standard risk bands (low below 5.2, moderate 5.2 to \
11.2, high 11.2 to 21.3, very high 21.3 to 38.0, extreme above 38.0), and \
wildfire safety practices. If asked about anything unrelated, politely decline \
and steer the conversation back to fire weather topics.";

/// Canned model turn completing the preamble.
const ACKNOWLEDGMENT: &str = "Understood. I will only discuss the Fire Weather \
Index system, its components and risk levels, and wildfire safety. How can I \
help?";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("API returned {0}")]
    Api(String),

    #[error("empty response from model")]
    EmptyResponse,
}

/// Narrow upstream interface: one conversation in, generated text out.
#[axum::async_trait]
pub trait ChatModel: Send + Sync {
    async fn generate(&self, conversation: &[ChatMessage]) -> Result<String, ChatError>;
}

/// Preamble, then the last [`HISTORY_WINDOW`] history turns, then the new
/// message. The caller has already rejected blank messages.
pub fn build_conversation(history: &[ChatTurn], message: &str) -> Vec<ChatMessage> {
    let mut conversation = Vec::with_capacity(history.len().min(HISTORY_WINDOW) + 3);
    conversation.push(ChatMessage::user(SYSTEM_PROMPT));
    conversation.push(ChatMessage::assistant(ACKNOWLEDGMENT));

    let start = history.len().saturating_sub(HISTORY_WINDOW);
    for turn in &history[start..] {
        let message = if turn.is_user {
            ChatMessage::user(turn.text.clone())
        } else {
            ChatMessage::assistant(turn.text.clone())
        };
        conversation.push(message);
    }

    conversation.push(ChatMessage::user(message));
    conversation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::ChatRole;

    fn history_of(len: usize) -> Vec<ChatTurn> {
        (0..len)
            .map(|i| ChatTurn {
                is_user: i % 2 == 0,
                text: format!("turn {}", i),
            })
            .collect()
    }

    #[test]
    fn test_preamble_and_message_only() {
        let conversation = build_conversation(&[], "What is FFMC?");

        assert_eq!(conversation.len(), 3);
        assert_eq!(conversation[0].role, ChatRole::User);
        assert_eq!(conversation[0].text, SYSTEM_PROMPT);
        assert_eq!(conversation[1].role, ChatRole::Assistant);
        assert_eq!(conversation[2], ChatMessage::user("What is FFMC?"));
    }

    #[test]
    fn test_history_truncated_to_window() {
        let conversation = build_conversation(&history_of(10), "next question");

        // 2 preamble + 6 history + 1 new message
        assert_eq!(conversation.len(), 9);
        // Only the most recent turns survive
        assert_eq!(conversation[2].text, "turn 4");
        assert_eq!(conversation[7].text, "turn 9");
        assert_eq!(conversation[8].text, "next question");
    }

    #[test]
    fn test_short_history_kept_whole() {
        let conversation = build_conversation(&history_of(3), "q");

        assert_eq!(conversation.len(), 6);
        assert_eq!(conversation[2].text, "turn 0");
    }

    #[test]
    fn test_role_mapping() {
        let history = vec![
            ChatTurn {
                is_user: true,
                text: "hello".to_string(),
            },
            ChatTurn {
                is_user: false,
                text: "hi there".to_string(),
            },
        ];
        let conversation = build_conversation(&history, "q");

        assert_eq!(conversation[2].role, ChatRole::User);
        assert_eq!(conversation[3].role, ChatRole::Assistant);
    }
}
