//! Chat shell layout component.

use super::{chat_header, conversations_list, input_area, message_list};
use crate::config::InputMode;
use crate::session::ChatState;

/// Complete chat layout for one state snapshot:
/// - Conversation sidebar
/// - Header with the current session and any notice
/// - Message thread
/// - Input form
pub fn chat_shell(state: &ChatState, mode: InputMode) -> String {
    let sidebar = conversations_list(&state.sessions, state.current_session.as_deref());
    let header = chat_header(state.current_session.as_deref(), state.notice.as_deref());
    let messages = message_list(&state.messages);
    let input = input_area(mode, state.is_loading);

    format!(
        r#"<div class="chat-layout">
{sidebar}
<section class="chat-shell">
{header}
{messages}
{input}
</section>
</div>"#
    )
}
