//! Conversation history, rendered log, and the send/resolve transitions.
//!
//! DESIGN
//! ======
//! Two sequences are kept side by side. `Conversation` is what the endpoint
//! sees: user turns and successful assistant replies, append-only, sent in
//! full on every request. `log` is what the user sees: the same turns plus
//! the fixed error lines, which never enter the conversation.
//!
//! One request at a time: `submit` refuses while `pending` is set and
//! `resolve` clears it, so replies can never be appended out of order.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{ChatRequest, ConversationEntry, ExchangeError};

/// Append-only record of the turns exchanged with the endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Conversation {
    entries: Vec<ConversationEntry>,
}

impl Conversation {
    pub fn push(&mut self, entry: ConversationEntry) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Request body carrying a copy of the full history.
    #[must_use]
    pub fn to_request(&self) -> ChatRequest {
        ChatRequest { messages: self.entries.clone() }
    }
}

/// Styling tag of a rendered row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    /// Right-aligned, accent background.
    User,
    /// Left-aligned, neutral background. Used for replies and error lines.
    Bot,
}

impl Author {
    /// CSS modifier class applied next to `message`.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// One row of the visible chat history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub author: Author,
    pub text: String,
}

/// Result of a send attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submit {
    /// Trimmed input was empty; nothing changed.
    Empty,
    /// A request is already in flight; nothing changed.
    Busy,
    /// The user turn was recorded; issue this request.
    Send(ChatRequest),
}

/// State for the chat panel.
///
/// Held in an `RwSignal` by the `ChatWidget` component.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub conversation: Conversation,
    pub log: Vec<LogEntry>,
    pub pending: bool,
}

impl ChatState {
    /// Record a user turn from raw input and build the request for it.
    ///
    /// The user row is rendered and the conversation grows before the
    /// request is returned, so the turn shows up even if the exchange fails.
    pub fn submit(&mut self, raw: &str) -> Submit {
        let text = raw.trim();
        if text.is_empty() {
            return Submit::Empty;
        }
        if self.pending {
            return Submit::Busy;
        }

        self.conversation.push(ConversationEntry::user(text));
        self.log.push(LogEntry { author: Author::User, text: text.to_owned() });
        self.pending = true;
        Submit::Send(self.conversation.to_request())
    }

    /// Log rows paired with their position. The log only grows, so the
    /// position is a stable key for keyed rendering.
    #[must_use]
    pub fn rows(&self) -> Vec<(usize, LogEntry)> {
        self.log.iter().cloned().enumerate().collect()
    }

    /// Apply the outcome of the in-flight exchange.
    ///
    /// A reply is rendered and appended as an assistant turn. A failure is
    /// rendered as its fixed line and leaves the conversation untouched.
    pub fn resolve(&mut self, outcome: Result<String, ExchangeError>) {
        self.pending = false;
        match outcome {
            Ok(reply) => {
                self.log.push(LogEntry { author: Author::Bot, text: reply.clone() });
                self.conversation.push(ConversationEntry::assistant(reply));
            }
            Err(e) => {
                self.log.push(LogEntry { author: Author::Bot, text: e.user_message().to_owned() });
            }
        }
    }
}
