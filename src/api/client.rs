//! HTTP client for the remote medical-assistant API.

use async_trait::async_trait;
use url::Url;

use super::ChatBackend;
use super::types::{
    Confirmation, CreatedSession, Message, PatientQuery, Reply, Role, SaveMessageRequest,
    SendMessageRequest,
};
use crate::error::{Error, Result};

/// HTTP client for the API.
///
/// # Example
///
/// ```rust,no_run
/// use medassist_chat::api::Client;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("http://127.0.0.1:8000")?;
///
/// let created = client.memory().create_session().await?;
/// let reply = client.chat().send("Hello!", &created.session_id).await?;
/// println!("{}", reply.response);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the API (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a new client with a custom reqwest client.
    pub fn with_client(base_url: impl AsRef<str>, http: reqwest::Client) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!("not a base URL: {base_url}")));
        }
        Ok(Self { base_url, http })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the Chat API (`/chat/...`).
    pub fn chat(&self) -> ChatApi<'_> {
        ChatApi { client: self }
    }

    /// Access the Memory API (`/memory/...`).
    pub fn memory(&self) -> MemoryApi<'_> {
        MemoryApi { client: self }
    }

    /// Access the Patient API (`/patient/...`).
    pub fn patient(&self) -> PatientApi<'_> {
        PatientApi { client: self }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Build an endpoint URL from path segments, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // with_client rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            Err(Error::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

// =============================================================================
// Chat API
// =============================================================================

/// Chat API client.
#[derive(Debug)]
pub struct ChatApi<'a> {
    client: &'a Client,
}

impl ChatApi<'_> {
    /// Send a message in a session and wait for the assistant's reply.
    pub async fn send(&self, message: impl Into<String>, session_id: &str) -> Result<Reply> {
        let req = SendMessageRequest {
            message: message.into(),
            session_id: session_id.to_string(),
        };
        let response = self
            .client
            .http
            .post(self.client.url(&["chat", "chat"]))
            .json(&req)
            .send()
            .await?;
        Client::handle_response(response).await
    }

    /// Get the ordered message history of a session.
    pub async fn history(&self, session_id: &str) -> Result<Vec<Message>> {
        let response = self
            .client
            .http
            .get(self.client.url(&["chat", "history", session_id]))
            .send()
            .await?;
        Client::handle_response(response).await
    }

    /// List every known session identifier.
    pub async fn sessions(&self) -> Result<Vec<String>> {
        let response = self
            .client
            .http
            .get(self.client.url(&["chat", "sessions"]))
            .send()
            .await?;
        Client::handle_response(response).await
    }

    /// Delete a session and its history.
    pub async fn delete_session(&self, session_id: &str) -> Result<Confirmation> {
        let response = self
            .client
            .http
            .delete(self.client.url(&["chat", "sessions", session_id]))
            .send()
            .await?;
        Client::handle_response(response).await
    }
}

// =============================================================================
// Memory API
// =============================================================================

/// Memory API client.
#[derive(Debug)]
pub struct MemoryApi<'a> {
    client: &'a Client,
}

impl MemoryApi<'_> {
    /// Create a new, empty session.
    pub async fn create_session(&self) -> Result<CreatedSession> {
        let response = self
            .client
            .http
            .post(self.client.url(&["memory", "session", "create"]))
            .send()
            .await?;
        Client::handle_response(response).await
    }

    /// Append a message to a session's stored history.
    pub async fn add_message(
        &self,
        session_id: &str,
        role: Role,
        content: impl Into<String>,
    ) -> Result<Confirmation> {
        let req = SaveMessageRequest {
            message: content.into(),
            role,
        };
        let response = self
            .client
            .http
            .post(
                self.client
                    .url(&["memory", "session", session_id, "add_message"]),
            )
            .json(&req)
            .send()
            .await?;
        Client::handle_response(response).await
    }
}

// =============================================================================
// Patient API
// =============================================================================

/// Patient API client.
#[derive(Debug)]
pub struct PatientApi<'a> {
    client: &'a Client,
}

impl PatientApi<'_> {
    /// Ask a question about patient records.
    pub async fn query(&self, query: &PatientQuery) -> Result<Reply> {
        let response = self
            .client
            .http
            .post(self.client.url(&["patient", "patients", "query"]))
            .json(query)
            .send()
            .await?;
        Client::handle_response(response).await
    }
}

// =============================================================================
// Backend implementation
// =============================================================================

#[async_trait]
impl ChatBackend for Client {
    async fn create_session(&self) -> Result<CreatedSession> {
        self.memory().create_session().await
    }

    async fn send_message(&self, content: &str, session_id: &str) -> Result<Reply> {
        self.chat().send(content, session_id).await
    }

    async fn get_history(&self, session_id: &str) -> Result<Vec<Message>> {
        self.chat().history(session_id).await
    }

    async fn get_all_sessions(&self) -> Result<Vec<String>> {
        self.chat().sessions().await
    }

    async fn delete_session(&self, session_id: &str) -> Result<Confirmation> {
        self.chat().delete_session(session_id).await
    }

    async fn query_patient_info(&self, query: &PatientQuery) -> Result<Reply> {
        self.patient().query(query).await
    }

    async fn save_message(
        &self,
        session_id: &str,
        role: Role,
        content: &str,
    ) -> Result<Confirmation> {
        self.memory().add_message(session_id, role, content).await
    }
}
