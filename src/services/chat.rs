//! Chat relay: widget conversation → LLM → reply text.
//!
//! DESIGN
//! ======
//! The widget posts its whole history on every turn, so the relay is
//! stateless: validate the conversation, prepend the configured system
//! prompt, forward it, and return the reply text. No retries; a failed turn
//! is reported to the widget and the user re-sends.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ChatSettings;
use crate::llm::LlmChat;
use crate::llm::types::{LlmError, Message};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("LLM not configured")]
    LlmNotConfigured,
    #[error("conversation is empty")]
    EmptyConversation,
    #[error("last message must come from the user")]
    LastMessageNotUser,
    #[error("message {0} has unknown role {1:?}")]
    InvalidRole(usize, String),
    #[error("message {0} is blank")]
    BlankContent(usize),
    #[error("LLM returned an empty reply")]
    EmptyReply,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

/// One conversation entry as posted by the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// `POST /api/chat` body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// `POST /api/chat` success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub message: String,
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Check the conversation shape and convert it to provider messages.
///
/// # Errors
///
/// Rejects empty conversations, unknown roles, blank contents, and
/// conversations whose last turn is not the user's.
pub fn validate_conversation(messages: &[ChatMessage]) -> Result<Vec<Message>, ChatError> {
    if messages.is_empty() {
        return Err(ChatError::EmptyConversation);
    }
    for (i, m) in messages.iter().enumerate() {
        if m.role != "user" && m.role != "assistant" {
            return Err(ChatError::InvalidRole(i, m.role.clone()));
        }
        if m.content.trim().is_empty() {
            return Err(ChatError::BlankContent(i));
        }
    }
    if messages.last().is_some_and(|m| m.role != "user") {
        return Err(ChatError::LastMessageNotUser);
    }
    Ok(messages
        .iter()
        .map(|m| Message { role: m.role.clone(), content: m.content.clone() })
        .collect())
}

// =============================================================================
// RELAY
// =============================================================================

/// Forward a validated conversation to the LLM and return its reply.
///
/// # Errors
///
/// Returns a [`ChatError`] for invalid input, a missing LLM, a provider
/// failure, or an empty reply.
pub async fn relay(llm: Option<&dyn LlmChat>, settings: &ChatSettings, request: &ChatRequest) -> Result<ChatReply, ChatError> {
    let messages = validate_conversation(&request.messages)?;
    let llm = llm.ok_or(ChatError::LlmNotConfigured)?;
    let request_id = Uuid::new_v4();

    info!(%request_id, messages = messages.len(), model = llm.model(), "chat: relaying conversation");
    let response = llm
        .chat(settings.max_tokens, &settings.system_prompt, &messages)
        .await
        .inspect_err(|e| warn!(%request_id, error = %e, code = e.error_code(), "chat: LLM call failed"))?;

    let text = response.text.trim();
    if text.is_empty() {
        warn!(%request_id, stop_reason = %response.stop_reason, "chat: LLM returned empty reply");
        return Err(ChatError::EmptyReply);
    }
    info!(
        %request_id,
        model = %response.model,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "chat: reply ready"
    );
    Ok(ChatReply { message: text.to_owned() })
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
