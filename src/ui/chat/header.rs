//! Chat header component.

use html2pango::html_escape;

use super::session_label;

/// Title bar naming the current session, plus the failure notice if any.
pub fn chat_header(current_session: Option<&str>, notice: Option<&str>) -> String {
    let title = current_session.map_or_else(
        || "New conversation".to_string(),
        |id| html_escape(&session_label(id)),
    );
    let notice = notice
        .map(|text| format!(r#"<p class="notice" role="alert">{}</p>"#, html_escape(text)))
        .unwrap_or_default();

    format!(
        r#"<header class="chat-header">
    <h2>{title}</h2>
    {notice}
</header>"#
    )
}
