//! Chat message list component.

use html2pango::html_escape;

use crate::api::{Message, Role};

/// Render the thread as bubbles, user turns on the right.
pub fn message_list(messages: &[Message]) -> String {
    if messages.is_empty() {
        return r#"<div class="messages empty"><p>No messages yet.</p></div>"#.to_string();
    }

    let bubbles: String = messages.iter().map(message_bubble).collect();
    format!(r#"<div class="messages" aria-live="polite">{bubbles}</div>"#)
}

fn message_bubble(message: &Message) -> String {
    let side = if message.role == Role::User { "end" } else { "start" };
    format!(
        r#"
    <div class="bubble-row {side}">
        <div class="bubble {role}">{content}</div>
    </div>"#,
        role = message.role,
        content = html_escape(&message.content),
    )
}
