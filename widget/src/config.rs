//! Widget configuration supplied by the host page.
//!
//! The host tags the `<script>` that loads the widget with `data-chat-*`
//! attributes; any attribute that is absent or blank keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_ENDPOINT: &str = "/api/chat";
pub const DEFAULT_TITLE: &str = "Chatbot";
pub const DEFAULT_PLACEHOLDER: &str = "Type your message...";
pub const DEFAULT_LAUNCHER: &str = "💬";

/// Attribute that marks the configuring `<script>` element.
pub const ENDPOINT_ATTR: &str = "data-chat-endpoint";
pub const TITLE_ATTR: &str = "data-chat-title";
pub const PLACEHOLDER_ATTR: &str = "data-chat-placeholder";
pub const LAUNCHER_ATTR: &str = "data-chat-launcher";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// URL the conversation is POSTed to.
    pub endpoint: String,
    /// Panel header text.
    pub title: String,
    pub placeholder: String,
    /// Glyph shown in the collapsed launcher bubble.
    pub launcher: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            title: DEFAULT_TITLE.to_owned(),
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            launcher: DEFAULT_LAUNCHER.to_owned(),
        }
    }
}

impl WidgetConfig {
    /// Build a config from an attribute lookup, keeping defaults for anything
    /// missing or blank.
    pub fn from_attrs(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |name: &str, default: &str| {
            lookup(name)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };
        Self {
            endpoint: pick(ENDPOINT_ATTR, DEFAULT_ENDPOINT),
            title: pick(TITLE_ATTR, DEFAULT_TITLE),
            placeholder: pick(PLACEHOLDER_ATTR, DEFAULT_PLACEHOLDER),
            launcher: pick(LAUNCHER_ATTR, DEFAULT_LAUNCHER),
        }
    }

    /// Default config pointed at `endpoint`.
    #[must_use]
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self::from_attrs(|name| (name == ENDPOINT_ATTR).then(|| endpoint.to_owned()))
    }

    /// Read the config from the first `<script data-chat-endpoint>` on the page.
    /// Falls back to defaults when there is none or outside the browser.
    pub fn from_document() -> Self {
        #[cfg(feature = "csr")]
        {
            let selector = format!("script[{ENDPOINT_ATTR}]");
            let script = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten());
            match script {
                Some(el) => Self::from_attrs(|name| el.get_attribute(name)),
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}
