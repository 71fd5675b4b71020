//! # chat-widget
//!
//! Embeddable Leptos + WASM chat widget. Dropped into any host page, it
//! injects its own stylesheet and markup, shows a floating launcher bubble,
//! and expands into a chat panel that relays the conversation to a remote
//! `POST /api/chat` endpoint.
//!
//! Conversation bookkeeping, visibility, and response classification live in
//! plain Rust (`state`, `net::types`) so they are testable without a browser.
//! Everything that touches the DOM or the network sits behind the `csr`
//! feature.

pub mod components;
pub mod config;
pub mod mount;
pub mod net;
pub mod state;
pub mod styles;
