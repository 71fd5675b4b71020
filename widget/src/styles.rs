//! Injected stylesheet and the element identifiers it targets.
//!
//! Visibility of the panel and launcher is driven by the component through
//! inline `display`, so the sheet only carries layout and colors.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

/// Host element the widget mounts into; its presence marks the widget as mounted.
pub const ROOT_ID: &str = "chat-widget-root";
pub const STYLE_ID: &str = "chat-widget-style";
pub const PANEL_ID: &str = "chat-widget";
pub const HEADER_ID: &str = "chat-header";
pub const CLOSE_ID: &str = "close-btn";
pub const HISTORY_ID: &str = "chat-history";
pub const INPUT_ROW_ID: &str = "chat-input-container";
pub const INPUT_ID: &str = "chat-input";
pub const SEND_ID: &str = "send-btn";
pub const LAUNCHER_ID: &str = "chat-icon";

/// Stylesheet text inserted into `<head>` on mount.
pub const STYLESHEET: &str = r"
#chat-widget {
    position: fixed;
    bottom: 20px;
    right: 20px;
    width: 300px;
    height: 500px;
    border-radius: 10px;
    box-shadow: 0 0 15px rgba(0, 0, 0, 0.2);
    overflow: hidden;
    background-color: white;
    border: 1px solid #ccc;
    z-index: 1100;
}
#chat-header {
    background-color: #0078d4;
    color: white;
    padding: 10px;
    text-align: center;
    position: relative;
}
#close-btn {
    position: absolute;
    right: 10px;
    cursor: pointer;
}
#chat-history {
    padding: 10px;
    height: 400px;
    overflow-y: auto;
    border-top: 1px solid #ccc;
    display: flex;
    flex-direction: column;
}
.message.bot {
    text-align: left;
    margin: 5px 0;
    padding: 5px 10px;
    background-color: #f1f1f1;
    border-radius: 15px;
    max-width: 80%;
    align-self: flex-start;
}
.message.user {
    text-align: right;
    margin: 5px 0;
    padding: 5px 10px;
    background-color: #0078d4;
    color: white;
    border-radius: 15px;
    max-width: 80%;
    align-self: flex-end;
}
#chat-input-container {
    display: flex;
    padding: 5px;
    border-top: 1px solid #ccc;
}
#chat-input {
    flex: 1;
    padding: 5px;
    border: 1px solid #ccc;
    border-radius: 3px;
}
#send-btn {
    padding: 5px 10px;
    background-color: #0078d4;
    color: white;
    border: none;
    cursor: pointer;
    margin-left: 5px;
}
#send-btn:disabled {
    opacity: 0.6;
    cursor: default;
}
#chat-icon {
    position: fixed;
    bottom: 20px;
    right: 20px;
    font-size: 36px;
    cursor: pointer;
    z-index: 1050;
}
";

/// Inline `display` value for a surface that is `shown` or not.
#[must_use]
pub fn display(shown: bool) -> &'static str {
    if shown { "block" } else { "none" }
}
