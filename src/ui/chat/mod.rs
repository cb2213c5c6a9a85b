//! Chat-specific UI components.
//!
//! Each component is a plain function from state to an HTML fragment.

mod conversations;
mod header;
mod input_area;
mod message_list;
mod shell;

pub use conversations::{conversations_list, session_label};
pub use header::chat_header;
pub use input_area::input_area;
pub use message_list::message_list;
pub use shell::chat_shell;
