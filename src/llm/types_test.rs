use super::*;

// =============================================================================
// LlmError::error_code
// =============================================================================

#[test]
fn error_code_config_parse() {
    let err = LlmError::ConfigParse("bad".into());
    assert_eq!(err.error_code(), "E_CONFIG_PARSE");
}

#[test]
fn error_code_missing_api_key() {
    let err = LlmError::MissingApiKey { var: "KEY".into() };
    assert_eq!(err.error_code(), "E_MISSING_API_KEY");
}

#[test]
fn error_code_api_request() {
    let err = LlmError::ApiRequest("timeout".into());
    assert_eq!(err.error_code(), "E_API_REQUEST");
}

#[test]
fn error_code_api_response() {
    let err = LlmError::ApiResponse { status: 500, body: "oops".into() };
    assert_eq!(err.error_code(), "E_API_RESPONSE");
}

#[test]
fn error_code_api_parse_and_client_build() {
    assert_eq!(LlmError::ApiParse("json".into()).error_code(), "E_API_PARSE");
    assert_eq!(LlmError::HttpClientBuild("tls".into()).error_code(), "E_HTTP_CLIENT_BUILD");
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_api_response_hides_body() {
    let err = LlmError::ApiResponse { status: 429, body: "secret detail".into() };
    assert_eq!(err.to_string(), "API response error: status 429");
}

#[test]
fn display_missing_api_key_names_var() {
    let err = LlmError::MissingApiKey { var: "OPENAI_API_KEY".into() };
    assert!(err.to_string().contains("OPENAI_API_KEY"));
}

// =============================================================================
// Message serde
// =============================================================================

#[test]
fn message_round_trips_role_and_content() {
    let msg: Message = serde_json::from_str(r#"{"role":"user","content":"hi"}"#).unwrap();
    assert_eq!(msg, Message { role: "user".into(), content: "hi".into() });
}
