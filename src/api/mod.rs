//! Remote medical-assistant API.
//!
//! - [`Client`]: reqwest-based HTTP client, one round trip per operation
//! - [`ChatBackend`]: the seam the session controller talks to
//! - [`types`]: request and response bodies

mod client;
pub mod types;

use async_trait::async_trait;

use crate::error::Result;

pub use client::{ChatApi, Client, MemoryApi, PatientApi};
pub use types::{Confirmation, CreatedSession, Message, PatientQuery, Reply, Role};

/// Operations the chat UI needs from the remote service.
///
/// Every call is a single request with no retry; failures are returned
/// unchanged and handled by the caller.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// `POST /memory/session/create`
    async fn create_session(&self) -> Result<CreatedSession>;

    /// `POST /chat/chat`
    async fn send_message(&self, content: &str, session_id: &str) -> Result<Reply>;

    /// `GET /chat/history/{session_id}`
    async fn get_history(&self, session_id: &str) -> Result<Vec<Message>>;

    /// `GET /chat/sessions`
    async fn get_all_sessions(&self) -> Result<Vec<String>>;

    /// `DELETE /chat/sessions/{session_id}`
    async fn delete_session(&self, session_id: &str) -> Result<Confirmation>;

    /// `POST /patient/patients/query`
    async fn query_patient_info(&self, query: &PatientQuery) -> Result<Reply>;

    /// `POST /memory/session/{session_id}/add_message`
    async fn save_message(&self, session_id: &str, role: Role, content: &str)
    -> Result<Confirmation>;
}
