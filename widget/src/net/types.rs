//! Wire schema for the chat endpoint.
//!
//! DESIGN
//! ======
//! The request carries the whole conversation; the reply is a JSON object with
//! a `message` string. Anything else in the reply is ignored.
//!
//! ERROR HANDLING
//! ==============
//! `ExchangeError` distinguishes HTTP-level failures from transport failures
//! because the widget shows a different fixed line for each. Status codes and
//! transport details are logged, never shown.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Line rendered when the endpoint answers with a non-success status or an
/// unusable body.
pub const FAILED_RESPONSE_TEXT: &str = "Error: Failed to fetch response.";

/// Line rendered when the request could not complete at all.
pub const NETWORK_ISSUE_TEXT: &str = "Error: Network issue, please try again.";

/// Speaker of a conversation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the conversation as sent to the endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub role: Role,
    pub content: String,
}

impl ConversationEntry {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ConversationEntry>,
}

/// Successful reply body. Extra fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    pub message: String,
}

/// Why a chat exchange produced no reply.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("chat endpoint returned status {0}")]
    Status(u16),

    /// A success status whose body had no usable `message` string.
    #[error("chat reply malformed: {0}")]
    MalformedReply(String),

    /// The request never completed (connectivity, CORS, DNS, ...).
    #[error("chat request failed: {0}")]
    Network(String),
}

impl ExchangeError {
    /// The fixed line rendered into the chat log for this failure.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Status(_) | Self::MalformedReply(_) => FAILED_RESPONSE_TEXT,
            Self::Network(_) => NETWORK_ISSUE_TEXT,
        }
    }
}

/// Classify a completed HTTP response into reply text or an error.
///
/// A 2xx status is required; the body must then be a JSON object with a
/// non-blank string `message`. The host rejects histories with blank turns.
///
/// # Errors
///
/// Returns [`ExchangeError::Status`] for non-2xx statuses and
/// [`ExchangeError::MalformedReply`] when a success body cannot be used.
pub fn reply_from_response(status: u16, body: &str) -> Result<String, ExchangeError> {
    if !(200..300).contains(&status) {
        return Err(ExchangeError::Status(status));
    }
    let reply: ChatReply = serde_json::from_str(body).map_err(|e| ExchangeError::MalformedReply(e.to_string()))?;
    if reply.message.trim().is_empty() {
        return Err(ExchangeError::MalformedReply("blank message".to_owned()));
    }
    Ok(reply.message)
}
