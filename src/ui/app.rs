//! Page shell.

use super::chat::chat_shell;
use crate::config::InputMode;
use crate::session::ChatState;

/// Inline styles; the page ships no external assets.
const STYLE: &str = r"
body { margin: 0; font-family: system-ui, sans-serif; background: #111827; color: #f3f4f6; }
.chat-layout { display: flex; height: 100vh; }
.conversations { width: 18rem; padding: 1rem; background: #1f2937; border-right: 1px solid #374151; overflow-y: auto; }
.conversations form { display: inline; }
.session-list { list-style: none; padding: 0; }
.session { display: flex; justify-content: space-between; margin-bottom: .5rem; }
.session.active .select { background: #3b82f6; color: #fff; }
.delete { color: #ef4444; background: none; border: none; cursor: pointer; }
.new-session { width: 100%; margin-bottom: 1rem; }
.chat-shell { flex: 1; display: flex; flex-direction: column; background: #1f2937; }
.chat-header { padding: .75rem 1.5rem; border-bottom: 1px solid #374151; }
.notice { color: #fca5a5; margin: .25rem 0 0; }
.messages { flex: 1; overflow-y: auto; padding: 1rem; }
.bubble-row { display: flex; margin-bottom: 1rem; }
.bubble-row.end { justify-content: flex-end; }
.bubble { max-width: 70%; padding: .5rem 1rem; border-radius: .5rem; white-space: pre-wrap; }
.bubble.user { background: #3b82f6; color: #fff; }
.bubble.assistant, .bubble.system { background: #dbeafe; color: #1e3a8a; }
.input-area { display: flex; gap: .5rem; padding: 1rem; border-top: 1px solid #374151; }
.input-area input { flex: 1; padding: .5rem; border-radius: .5rem; }
.input-area button[disabled] { opacity: .5; }
";

/// Generate the HTML document around `content`.
pub fn html_shell(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - Medical Assistant</title>
    <style>{STYLE}</style>
</head>
<body>
{content}
</body>
</html>"#
    )
}

/// The full chat page for a state snapshot.
pub fn chat_page(state: &ChatState, mode: InputMode) -> String {
    html_shell("Chat", &chat_shell(state, mode))
}
