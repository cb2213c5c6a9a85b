//! Server-rendered HTML for the chat page.
//!
//! # Structure
//!
//! - [`app`]: document shell and the full chat page
//! - [`chat`]: conversation list, message list, input and layout fragments
//!
//! All interaction is plain HTML forms; every action redirects back to `/`.

pub mod app;
pub mod chat;

pub use app::chat_page;
