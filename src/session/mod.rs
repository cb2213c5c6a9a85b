//! Chat session state and its controller.
//!
//! # Architecture
//!
//! - [`ChatState`]: the one UI state object (thread, session list, flags)
//! - [`ChatController`]: owns the state, runs lifecycle hooks and user actions
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use medassist_chat::api::Client;
//! use medassist_chat::config::ChatConfig;
//! use medassist_chat::session::ChatController;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("http://127.0.0.1:8000")?;
//! let controller = ChatController::new(Arc::new(client), ChatConfig::default());
//! controller.mount().await;
//! controller.submit("Hello!").await;
//!
//! let state = controller.snapshot().await;
//! assert_eq!(state.messages.len(), 2);
//! # Ok(())
//! # }
//! ```

mod controller;
mod state;

pub use controller::ChatController;
pub use state::ChatState;
