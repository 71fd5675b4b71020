use super::*;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn home_reports_running() {
    let Json(body) = home().await;
    assert_eq!(body, json!({ "message": "Application is running." }));
}

#[test]
fn demo_page_loads_widget_bundle_with_endpoint() {
    assert!(DEMO_PAGE.contains("/api/widget/chat_widget.js"));
    assert!(DEMO_PAGE.contains("data-chat-endpoint=\"/api/chat\""));
}

#[test]
fn app_builds_without_llm() {
    let state = AppState::new(None, crate::config::ChatSettings::default());
    let _router = app(state, Path::new("widget/pkg"));
}
