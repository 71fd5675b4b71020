mod config;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use llm::LlmChat;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env();

    // Initialize LLM client (non-fatal: /api/chat answers 503 if config missing).
    let llm: Option<Arc<dyn LlmChat>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            let client: Arc<dyn LlmChat> = Arc::new(client);
            Some(client)
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured: chat relay disabled");
            None
        }
    };

    if !config.widget_dir.is_dir() {
        tracing::warn!(dir = %config.widget_dir.display(), "widget bundle directory missing: /api/widget will 404");
    }

    let state = state::AppState::new(llm, config.chat.clone());
    let app = routes::app(state, &config.widget_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "chat-widget-host listening");
    axum::serve(listener, app).await.expect("server failed");
}
