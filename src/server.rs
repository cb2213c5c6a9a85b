//! HTTP routes and server startup.

use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::api::Client;
use crate::config::AppConfig;
use crate::session::{ChatController, ChatState};
use crate::ui;

/// Build the router over an existing application state.
pub fn router(state: AppState) -> Router {
    Router::new()
        // HTML page
        .route("/", get(index_handler))
        // Form actions
        .route("/messages", post(submit_handler))
        .route("/sessions", post(new_session_handler))
        .route("/sessions/refresh", post(refresh_sessions_handler))
        .route("/sessions/{id}/select", post(select_session_handler))
        .route("/sessions/{id}/delete", post(delete_session_handler))
        // JSON
        .route("/api/state", get(api_state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let client = Client::new(&config.api.base_url)?;
    info!(
        name: "api.config.loaded",
        base_url = %client.base_url(),
        input_mode = config.chat.input_mode.as_str(),
        "API configuration loaded"
    );

    let controller = Arc::new(ChatController::new(
        Arc::new(client),
        config.chat.clone(),
    ));
    controller.mount().await;

    let state = AppState { controller };

    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(
        name: "server.started",
        address = %format!("http://{address}"),
        "Server started"
    );

    axum::serve(listener, router(state)).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Render the chat page.
async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.controller.snapshot().await;
    Html(ui::chat_page(&snapshot, state.controller.input_mode()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Form Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Body of the input form.
#[derive(Debug, Deserialize)]
struct SubmitForm {
    #[serde(default)]
    content: String,
}

/// POST /messages - Send the input to the configured endpoint.
async fn submit_handler(
    State(state): State<AppState>,
    Form(form): Form<SubmitForm>,
) -> Redirect {
    state.controller.submit(&form.content).await;
    Redirect::to("/")
}

/// POST /sessions - Start a new conversation.
async fn new_session_handler(State(state): State<AppState>) -> Redirect {
    state.controller.new_session().await;
    Redirect::to("/")
}

/// POST /sessions/refresh - Reload the session list.
async fn refresh_sessions_handler(State(state): State<AppState>) -> Redirect {
    state.controller.load_sessions().await;
    Redirect::to("/")
}

/// POST /sessions/:id/select - Switch to a session and load its history.
async fn select_session_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Redirect {
    state.controller.select_session(&id).await;
    Redirect::to("/")
}

/// POST /sessions/:id/delete - Delete a session.
async fn delete_session_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Redirect {
    state.controller.delete_session(&id).await;
    Redirect::to("/")
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /api/state - Current UI state as JSON.
async fn api_state(State(state): State<AppState>) -> Json<ChatState> {
    Json(state.controller.snapshot().await)
}
