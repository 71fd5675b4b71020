//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the optional LLM client and the relay settings; nothing about a
//! conversation is kept between requests because the widget sends the whole
//! history every time.

use std::sync::Arc;

use crate::config::ChatSettings;
use crate::llm::LlmChat;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no provider is configured; `/api/chat` then answers 503.
    pub llm: Option<Arc<dyn LlmChat>>,
    pub chat: Arc<ChatSettings>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>, chat: ChatSettings) -> Self {
        Self { llm, chat: Arc::new(chat) }
    }
}
