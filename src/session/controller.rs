//! Chat controller: owns the UI state and turns user actions into API calls.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use super::ChatState;
use crate::api::{ChatBackend, Message, PatientQuery, Role};
use crate::config::{ChatConfig, InputMode, SessionIds};

/// Which remote operation produces the assistant's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exchange {
    Chat,
    PatientQuery,
}

/// Owner of the single [`ChatState`].
///
/// Every public method is one user action or lifecycle hook. Failures are
/// logged and recorded in [`ChatState::notice`]; nothing is retried and
/// nothing is rolled back. The state lock is never held across a network
/// call, and results that arrive after the user switched to another session
/// are discarded.
pub struct ChatController {
    backend: Arc<dyn ChatBackend>,
    config: ChatConfig,
    state: RwLock<ChatState>,
}

impl fmt::Debug for ChatController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatController")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ChatController {
    /// Create a controller with empty state.
    pub fn new(backend: Arc<dyn ChatBackend>, config: ChatConfig) -> Self {
        Self {
            backend,
            config,
            state: RwLock::new(ChatState::default()),
        }
    }

    /// Configured submit target of the input form.
    pub fn input_mode(&self) -> InputMode {
        self.config.input_mode
    }

    /// Copy of the current state, for rendering.
    pub async fn snapshot(&self) -> ChatState {
        self.state.read().await.clone()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Startup hook: optionally open a session, then load the session list.
    pub async fn mount(&self) {
        if self.config.create_on_mount {
            self.new_session().await;
        }
        self.load_sessions().await;
    }

    /// Replace the session list with the remote one.
    pub async fn load_sessions(&self) {
        match self.backend.get_all_sessions().await {
            Ok(remote) => {
                let mut state = self.state.write().await;
                let mut sessions: Vec<String> =
                    remote.into_iter().filter(|id| !id.is_empty()).collect();
                // A freshly opened session may not be listed remotely yet.
                if let Some(current) = &state.current_session
                    && state.has_session(current)
                    && !sessions.contains(current)
                {
                    sessions.push(current.clone());
                }
                info!(name: "chat.sessions.loaded", count = sessions.len(), "Sessions loaded");
                state.sessions = sessions;
                state.notice = None;
            }
            Err(e) => {
                error!(error = %e, "Error loading sessions");
                self.notify(format!("Could not load conversations: {e}")).await;
            }
        }
    }

    /// Make `session_id` current and load its history.
    ///
    /// Re-selecting the current session does nothing.
    pub async fn select_session(&self, session_id: &str) {
        {
            let mut state = self.state.write().await;
            if state.current_session.as_deref() == Some(session_id) {
                debug!(session_id = %session_id, "Session already selected");
                return;
            }
            state.switch_to(Some(session_id.to_string()));
        }
        debug!(session_id = %session_id, "Session selected");
        self.on_session_changed().await;
    }

    /// Replace the thread with the remote history of the current session.
    async fn on_session_changed(&self) {
        let (epoch, session_id) = {
            let state = self.state.read().await;
            match &state.current_session {
                Some(id) => (state.epoch, id.clone()),
                None => return,
            }
        };

        match self.backend.get_history(&session_id).await {
            Ok(history) => {
                let mut state = self.state.write().await;
                if state.epoch != epoch {
                    debug!(session_id = %session_id, "Discarding stale history");
                    return;
                }
                info!(
                    name: "chat.history.loaded",
                    session_id = %session_id,
                    message_count = history.len(),
                    "History loaded"
                );
                state.messages = history;
                state.notice = None;
            }
            Err(e) => {
                error!(session_id = %session_id, error = %e, "Error loading history");
                let mut state = self.state.write().await;
                if state.epoch == epoch {
                    state.notice = Some(format!("Could not load history: {e}"));
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // User actions
    // ─────────────────────────────────────────────────────────────────────────

    /// Input form entry point. Blank input is ignored.
    pub async fn submit(&self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        match self.config.input_mode {
            InputMode::Chat => self.send_message(text).await,
            InputMode::Patient => self.query_patient_info(text).await,
        }
    }

    /// Send a chat message, opening a session first if there is none.
    pub async fn send_message(&self, content: &str) {
        self.exchange(content, Exchange::Chat).await;
    }

    /// Ask a patient-info question, opening a session first if there is none.
    pub async fn query_patient_info(&self, question: &str) {
        self.exchange(question, Exchange::PatientQuery).await;
    }

    /// Delete a session remotely, then forget it locally.
    pub async fn delete_session(&self, session_id: &str) {
        match self.backend.delete_session(session_id).await {
            Ok(_) => {
                let mut state = self.state.write().await;
                state.sessions.retain(|s| s != session_id);
                if state.current_session.as_deref() == Some(session_id) {
                    state.switch_to(None);
                }
                state.notice = None;
                info!(name: "chat.session.deleted", session_id = %session_id, "Session deleted");
            }
            Err(e) => {
                error!(session_id = %session_id, error = %e, "Error deleting session");
                self.notify(format!("Could not delete conversation: {e}")).await;
            }
        }
    }

    /// Start a new, empty conversation.
    pub async fn new_session(&self) {
        self.open_session().await;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    async fn exchange(&self, content: &str, kind: Exchange) {
        self.state.write().await.begin_request();

        let Some((epoch, session_id)) = self.ensure_session().await else {
            self.state.write().await.end_request();
            return;
        };

        let result = match kind {
            Exchange::Chat => self.backend.send_message(content, &session_id).await,
            Exchange::PatientQuery => {
                let query = PatientQuery {
                    question: content.to_string(),
                    session_id: session_id.clone(),
                };
                self.backend.query_patient_info(&query).await
            }
        };

        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                error!(session_id = %session_id, kind = ?kind, error = %e, "Error sending message");
                let mut state = self.state.write().await;
                state.end_request();
                if state.epoch == epoch {
                    state.notice = Some(format!("Message not delivered: {e}"));
                }
                return;
            }
        };

        if kind == Exchange::PatientQuery {
            self.persist_turns(&session_id, content, &reply.response)
                .await;
        }

        let mut state = self.state.write().await;
        state.end_request();
        if state.epoch != epoch {
            debug!(session_id = %session_id, "Discarding reply for a session no longer shown");
            return;
        }
        state.register_session(&session_id);
        state.messages.push(Message::user(content));
        state.messages.push(Message::assistant(reply.response));
        state.notice = None;
        info!(
            name: "chat.message.exchanged",
            session_id = %session_id,
            kind = ?kind,
            message_count = state.messages.len(),
            "Message exchanged"
        );
    }

    /// Current session and epoch, opening a session if none is current.
    async fn ensure_session(&self) -> Option<(u64, String)> {
        {
            let state = self.state.read().await;
            if let Some(id) = &state.current_session {
                return Some((state.epoch, id.clone()));
            }
        }
        self.open_session().await
    }

    /// Open a session, make it current and clear the thread.
    async fn open_session(&self) -> Option<(u64, String)> {
        let session_id = match self.config.session_ids {
            SessionIds::Remote => match self.backend.create_session().await {
                Ok(created) => created.session_id,
                Err(e) => {
                    error!(error = %e, "Error creating session");
                    self.notify(format!("Could not start a conversation: {e}"))
                        .await;
                    return None;
                }
            },
            SessionIds::Placeholder => format!("session-{}", Utc::now().timestamp_millis()),
        };

        let mut state = self.state.write().await;
        // Placeholder ids are registered once the remote side has seen them.
        if self.config.session_ids == SessionIds::Remote {
            state.register_session(&session_id);
        }
        state.switch_to(Some(session_id.clone()));
        info!(name: "chat.session.created", session_id = %session_id, "Session opened");
        Some((state.epoch, session_id))
    }

    /// Store both turns of a patient query in the session history.
    async fn persist_turns(&self, session_id: &str, question: &str, answer: &str) {
        for (role, content) in [(Role::User, question), (Role::Assistant, answer)] {
            if let Err(e) = self.backend.save_message(session_id, role, content).await {
                warn!(session_id = %session_id, role = %role, error = %e, "Error saving message");
            }
        }
    }

    async fn notify(&self, notice: String) {
        self.state.write().await.notice = Some(notice);
    }
}
