//! Chat input area component.

use crate::config::InputMode;

/// Message form. Disabled while a request is in flight.
///
/// The field is always rendered empty: after a submit the browser follows the
/// redirect back to a fresh page, which clears the buffer.
pub fn input_area(mode: InputMode, is_loading: bool) -> String {
    let placeholder = match mode {
        InputMode::Chat => "Type your message...",
        InputMode::Patient => "Ask about a patient...",
    };
    let disabled = if is_loading { " disabled" } else { "" };
    let label = if is_loading { "Sending..." } else { "Send" };

    format!(
        r#"<form class="input-area" method="post" action="/messages">
    <input type="text" name="content" placeholder="{placeholder}" autocomplete="off" required{disabled}>
    <button type="submit"{disabled}>{label}</button>
</form>"#
    )
}
