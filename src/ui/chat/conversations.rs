//! Conversation sidebar.

use html2pango::html_escape;

/// Short label for a session: `Session` plus the last two characters of its id.
pub fn session_label(session_id: &str) -> String {
    let start = session_id
        .char_indices()
        .rev()
        .nth(1)
        .map_or(0, |(idx, _)| idx);
    format!("Session {}", &session_id[start..])
}

/// Sidebar listing every known session with select and delete actions,
/// plus a button opening a new conversation.
pub fn conversations_list(sessions: &[String], current_session: Option<&str>) -> String {
    let rows: String = sessions
        .iter()
        .filter(|id| !id.is_empty())
        .map(|id| conversation_row(id, current_session == Some(id.as_str())))
        .collect();

    format!(
        r#"<aside class="conversations">
    <h2>Conversations</h2>
    <form method="post" action="/sessions">
        <button type="submit" class="new-session">New conversation</button>
    </form>
    <form method="post" action="/sessions/refresh">
        <button type="submit" class="refresh">Refresh</button>
    </form>
    <ul class="session-list">{rows}</ul>
</aside>"#
    )
}

fn conversation_row(session_id: &str, active: bool) -> String {
    // byte_serialize writes spaces as '+', which a path segment would keep literally.
    let path = url::form_urlencoded::byte_serialize(session_id.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    let title = html_escape(session_id);
    let label = html_escape(&session_label(session_id));
    let class = if active { "session active" } else { "session" };

    format!(
        r#"
        <li class="{class}">
            <form method="post" action="/sessions/{path}/select">
                <button type="submit" class="select" title="{title}">{label}</button>
            </form>
            <form method="post" action="/sessions/{path}/delete">
                <button type="submit" class="delete" title="Delete {title}">&#x2715;</button>
            </form>
        </li>"#
    )
}
