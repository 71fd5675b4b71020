//! Networking for the chat endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call, `types` defines the wire schema and the
//! classification of responses into reply text or a user-facing failure.

pub mod api;
pub mod types;
