//! Wire types for the remote medical-assistant API.
//!
//! These mirror the JSON bodies the remote service accepts and returns.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Conversation Types
// =============================================================================

/// Author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person typing into the input form.
    User,
    /// The remote assistant.
    Assistant,
    /// System-level message injected by the service.
    System,
}

impl Role {
    /// Wire representation of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One turn of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who wrote the message.
    pub role: Role,
    /// Message text.
    pub content: String,
}

impl Message {
    /// Build a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Build an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

// =============================================================================
// Request Bodies
// =============================================================================

/// Body of `POST /chat/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    /// The user's message.
    pub message: String,
    /// Session the message belongs to.
    pub session_id: String,
}

/// Body of `POST /patient/patients/query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientQuery {
    /// Free-text question about a patient.
    pub question: String,
    /// Session the question belongs to.
    pub session_id: String,
}

/// Body of `POST /memory/session/{id}/add_message`.
#[derive(Debug, Clone, Serialize)]
pub struct SaveMessageRequest {
    /// Message text.
    pub message: String,
    /// Author of the message.
    pub role: Role,
}

// =============================================================================
// Response Bodies
// =============================================================================

/// Response of `POST /memory/session/create`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedSession {
    /// Identifier assigned by the service.
    pub session_id: String,
}

/// Response of the chat and patient-query endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reply {
    /// The assistant's answer.
    pub response: String,
}

/// Acknowledgement returned by delete and save endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Confirmation {
    /// Human-readable message (`{"message": "Session deleted"}`).
    #[serde(default)]
    pub message: Option<String>,
    /// Status string (`{"status": "message added"}`).
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_entries_ignore_extra_fields() {
        let raw = r#"[
            {"role": "user", "content": "hi", "timestamp": null},
            {"role": "assistant", "content": "hello", "timestamp": "2024-01-01T00:00:00"}
        ]"#;
        let history: Vec<Message> = serde_json::from_str(raw).unwrap();
        assert_eq!(history, vec![Message::user("hi"), Message::assistant("hello")]);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = serde_json::from_str::<Message>(r#"{"role": "tool", "content": "x"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn save_request_serializes_lowercase_role() {
        let body = SaveMessageRequest {
            message: "ok".into(),
            role: Role::Assistant,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, serde_json::json!({"message": "ok", "role": "assistant"}));
    }

    #[test]
    fn confirmation_accepts_either_shape() {
        let deleted: Confirmation =
            serde_json::from_str(r#"{"message": "Session deleted"}"#).unwrap();
        assert_eq!(deleted.message.as_deref(), Some("Session deleted"));
        assert!(deleted.status.is_none());

        let saved: Confirmation = serde_json::from_str(r#"{"status": "message added"}"#).unwrap();
        assert_eq!(saved.status.as_deref(), Some("message added"));
    }
}
