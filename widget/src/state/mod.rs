//! Widget-local state modules.
//!
//! DESIGN
//! ======
//! `chat` holds conversation data and the send/resolve transitions, `ui`
//! holds the launcher/panel visibility. The two are orthogonal: toggling the
//! panel never touches the conversation and vice versa.

pub mod chat;
pub mod ui;
