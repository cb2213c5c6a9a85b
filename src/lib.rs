//! Medical assistant chat
//!
//! A server-rendered chat interface for a remote medical-assistant API:
//! a session sidebar, the message thread of the current session and an
//! input form, backed by one explicit UI state object.
//!
//! # Architecture
//!
//! - **API**: reqwest client for the remote chat, memory and patient endpoints
//! - **Session**: controller owning the UI state and its transitions
//! - **UI**: HTML fragments rendered from state snapshots
//! - **Server**: Axum routes mapping form posts to controller actions
//!
//! # Modules
//!
//! - [`api`]: HTTP client and the [`api::ChatBackend`] seam
//! - [`config`]: layered configuration
//! - [`session`]: UI state and controller
//! - [`ui`]: HTML rendering
//! - [`server`]: router and startup

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod session;
pub mod ui;

use std::sync::Arc;

use session::ChatController;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Owner of the chat UI state.
    pub controller: Arc<ChatController>,
}
