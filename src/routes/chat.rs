//! `POST /api/chat`: the endpoint the widget talks to.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::services::chat::{self, ChatError, ChatRequest};
use crate::state::AppState;

/// Relay the posted conversation and answer `{"message": reply}`.
///
/// Failures answer `{"error": ...}` with a status from
/// [`chat_error_to_status`]; the widget only looks at the status.
pub async fn post_chat(State(state): State<AppState>, body: Result<Json<ChatRequest>, JsonRejection>) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "chat: rejected request body");
            return error_response(StatusCode::BAD_REQUEST, &rejection.body_text());
        }
    };

    match chat::relay(state.llm.as_deref(), &state.chat, &request).await {
        Ok(reply) => Json(reply).into_response(),
        Err(err) => error_response(chat_error_to_status(&err), &err.to_string()),
    }
}

pub(crate) fn chat_error_to_status(err: &ChatError) -> StatusCode {
    match err {
        ChatError::EmptyConversation
        | ChatError::LastMessageNotUser
        | ChatError::InvalidRole(..)
        | ChatError::BlankContent(_) => StatusCode::BAD_REQUEST,
        ChatError::LlmNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        ChatError::EmptyReply | ChatError::Llm(_) => StatusCode::BAD_GATEWAY,
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
