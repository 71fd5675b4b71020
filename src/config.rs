//! Host service configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` through `dotenvy` before this runs.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CHAT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant embedded in a website chat widget. \
Answer concisely in plain text.";

/// Settings for the `/api/chat` relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSettings {
    pub system_prompt: String,
    pub max_tokens: u32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self { system_prompt: DEFAULT_SYSTEM_PROMPT.to_owned(), max_tokens: DEFAULT_CHAT_MAX_TOKENS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the wasm-bindgen output of the `chat-widget` crate.
    pub widget_dir: PathBuf,
    pub chat: ChatSettings,
}

impl ServerConfig {
    /// Read config from the environment.
    ///
    /// - `PORT`: default 3000
    /// - `WIDGET_DIR`: default `widget/pkg` next to this manifest
    /// - `CHAT_SYSTEM_PROMPT`: default [`DEFAULT_SYSTEM_PROMPT`]
    /// - `CHAT_MAX_TOKENS`: default 1024
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Unparseable numbers fall
    /// back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT);
        let widget_dir = lookup("WIDGET_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_widget_dir);
        let system_prompt = lookup("CHAT_SYSTEM_PROMPT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_owned());
        let max_tokens = lookup("CHAT_MAX_TOKENS")
            .and_then(|v| v.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_CHAT_MAX_TOKENS);

        Self { port, widget_dir, chat: ChatSettings { system_prompt, max_tokens } }
    }
}

fn default_widget_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("widget/pkg")
}

/// Parse an env var, falling back to `default` when absent or invalid.
pub fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
