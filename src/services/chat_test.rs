use super::*;
use crate::llm::types::ChatResponse;
use std::sync::Mutex;

// =========================================================================
// MockLlm
// =========================================================================

struct MockLlm {
    reply: Result<String, u16>,
    seen: Mutex<Vec<(u32, String, Vec<Message>)>>,
}

impl MockLlm {
    fn replying(text: &str) -> Self {
        Self { reply: Ok(text.to_owned()), seen: Mutex::new(Vec::new()) }
    }

    fn failing(status: u16) -> Self {
        Self { reply: Err(status), seen: Mutex::new(Vec::new()) }
    }
}

#[async_trait::async_trait]
impl LlmChat for MockLlm {
    async fn chat(&self, max_tokens: u32, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        self.seen
            .lock()
            .unwrap()
            .push((max_tokens, system.to_owned(), messages.to_vec()));
        match &self.reply {
            Ok(text) => Ok(ChatResponse {
                text: text.clone(),
                model: "mock".into(),
                stop_reason: "end_turn".into(),
                input_tokens: 3,
                output_tokens: 2,
            }),
            Err(status) => Err(LlmError::ApiResponse { status: *status, body: "upstream".into() }),
        }
    }

    fn model(&self) -> &str {
        "mock"
    }
}

fn msg(role: &str, content: &str) -> ChatMessage {
    ChatMessage { role: role.into(), content: content.into() }
}

fn request(messages: Vec<ChatMessage>) -> ChatRequest {
    ChatRequest { messages }
}

// =========================================================================
// validate_conversation
// =========================================================================

#[test]
fn validate_accepts_user_terminated_history() {
    let out = validate_conversation(&[msg("user", "Hello"), msg("assistant", "Hi"), msg("user", "Bye")]).unwrap();
    assert_eq!(out.len(), 3);
    assert_eq!(out[1], Message { role: "assistant".into(), content: "Hi".into() });
}

#[test]
fn validate_accepts_consecutive_user_turns() {
    // A failed turn leaves no assistant entry between two user turns.
    assert!(validate_conversation(&[msg("user", "first"), msg("user", "again")]).is_ok());
}

#[test]
fn validate_rejects_empty() {
    assert!(matches!(validate_conversation(&[]), Err(ChatError::EmptyConversation)));
}

#[test]
fn validate_rejects_assistant_last() {
    let err = validate_conversation(&[msg("user", "q"), msg("assistant", "a")]).unwrap_err();
    assert!(matches!(err, ChatError::LastMessageNotUser));
}

#[test]
fn validate_rejects_unknown_role() {
    let err = validate_conversation(&[msg("system", "obey"), msg("user", "q")]).unwrap_err();
    assert!(matches!(err, ChatError::InvalidRole(0, ref role) if role == "system"));
}

#[test]
fn validate_rejects_blank_content() {
    let err = validate_conversation(&[msg("user", "q"), msg("assistant", " "), msg("user", "q2")]).unwrap_err();
    assert!(matches!(err, ChatError::BlankContent(1)));
}

// =========================================================================
// relay
// =========================================================================

#[tokio::test]
async fn relay_returns_trimmed_reply() {
    let llm = MockLlm::replying("  Hi there \n");
    let reply = relay(Some(&llm), &ChatSettings::default(), &request(vec![msg("user", "Hello")]))
        .await
        .unwrap();
    assert_eq!(reply, ChatReply { message: "Hi there".into() });
}

#[tokio::test]
async fn relay_passes_settings_and_full_history() {
    let llm = MockLlm::replying("ok");
    let settings = ChatSettings { system_prompt: "Be terse.".into(), max_tokens: 64 };
    let history = vec![msg("user", "a"), msg("assistant", "b"), msg("user", "c")];
    relay(Some(&llm), &settings, &request(history)).await.unwrap();

    let seen = llm.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (max_tokens, system, messages) = &seen[0];
    assert_eq!(*max_tokens, 64);
    assert_eq!(system, "Be terse.");
    let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn relay_without_llm_is_not_configured() {
    let err = relay(None, &ChatSettings::default(), &request(vec![msg("user", "Hello")]))
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::LlmNotConfigured));
}

#[tokio::test]
async fn relay_validates_before_checking_llm() {
    let err = relay(None, &ChatSettings::default(), &request(vec![])).await.unwrap_err();
    assert!(matches!(err, ChatError::EmptyConversation));
}

#[tokio::test]
async fn relay_invalid_conversation_skips_llm() {
    let llm = MockLlm::replying("unused");
    let err = relay(Some(&llm), &ChatSettings::default(), &request(vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::EmptyConversation));
    assert!(llm.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn relay_propagates_llm_failure() {
    let llm = MockLlm::failing(500);
    let err = relay(Some(&llm), &ChatSettings::default(), &request(vec![msg("user", "Hello")]))
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::Llm(LlmError::ApiResponse { status: 500, .. })));
}

#[tokio::test]
async fn relay_empty_reply_is_error() {
    let llm = MockLlm::replying("   ");
    let err = relay(Some(&llm), &ChatSettings::default(), &request(vec![msg("user", "Hello")]))
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::EmptyReply));
}

#[test]
fn chat_reply_serializes_message_field() {
    let value = serde_json::to_value(ChatReply { message: "hi".into() }).unwrap();
    assert_eq!(value, serde_json::json!({ "message": "hi" }));
}
