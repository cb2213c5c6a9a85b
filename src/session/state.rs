//! The single UI state object.

use serde::Serialize;

use crate::api::Message;

/// Everything the chat page renders.
///
/// `messages` always belongs to `current_session`: changing the current
/// session replaces the sequence, it never appends to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatState {
    /// Thread of the current session, in insertion order.
    pub messages: Vec<Message>,
    /// Known session identifiers, in display order.
    pub sessions: Vec<String>,
    /// Session the thread belongs to.
    pub current_session: Option<String>,
    /// A send or query is in flight.
    pub is_loading: bool,
    /// Last failure, shown above the thread until the next successful action.
    pub notice: Option<String>,
    /// Bumped whenever the displayed session changes.
    #[serde(skip)]
    pub(crate) epoch: u64,
    /// Sends and queries currently awaiting a reply.
    #[serde(skip)]
    pub(crate) in_flight: usize,
}

impl ChatState {
    /// Whether `id` is already in the session list.
    pub fn has_session(&self, id: &str) -> bool {
        self.sessions.iter().any(|s| s == id)
    }

    /// Add `id` to the session list unless it is already there.
    pub(crate) fn register_session(&mut self, id: &str) {
        if !self.has_session(id) {
            self.sessions.push(id.to_string());
        }
    }

    /// Count a send or query as started.
    pub(crate) fn begin_request(&mut self) {
        self.in_flight += 1;
        self.is_loading = true;
    }

    /// Count a send or query as finished. `is_loading` stays set while others remain.
    pub(crate) fn end_request(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.is_loading = self.in_flight > 0;
    }

    /// Make `id` current (or clear it) and drop the previous thread.
    pub(crate) fn switch_to(&mut self, id: Option<String>) {
        self.current_session = id;
        self.messages.clear();
        self.epoch += 1;
    }
}
