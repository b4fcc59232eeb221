//! Chat proxy handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::chat::build_conversation;
use crate::models::chat::ChatTurn;
use crate::{AppError, AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub history: Vec<ChatTurn>,
}

/// POST /chat
///
/// Forwards the message plus truncated history upstream and echoes the
/// updated history back so stateless clients can resend it next turn.
pub async fn chat(
    State(state): State<AppState>,
    body: Option<Json<ChatRequest>>,
) -> AppResult<Json<ChatResponse>> {
    let Json(req) = body.ok_or_else(|| AppError::InvalidInput("Invalid JSON body".to_string()))?;

    let message = req.message.trim().to_string();
    if message.is_empty() {
        return Err(AppError::EmptyMessage);
    }

    let conversation = build_conversation(&req.history, &message);
    let reply = state.chat.generate(&conversation).await?;

    let mut history = req.history;
    history.push(ChatTurn {
        is_user: true,
        text: message,
    });
    history.push(ChatTurn {
        is_user: false,
        text: reply.clone(),
    });

    Ok(Json(ChatResponse {
        success: true,
        response: reply,
        history,
    }))
}

#[derive(Debug, Serialize)]
pub struct ResetChatResponse {
    pub success: bool,
    pub message: &'static str,
}

/// POST /reset_chat
///
/// The server holds no chat state; this acknowledgment lets clients clear
/// their local history through one code path.
pub async fn reset_chat() -> Json<ResetChatResponse> {
    Json(ResetChatResponse {
        success: true,
        message: "Chat history cleared",
    })
}
