//! Scripted in-memory backend shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use medassist_chat::api::{
    ChatBackend, Confirmation, CreatedSession, Message, PatientQuery, Reply, Role,
};
use medassist_chat::error::{Error, Result};
use tokio::sync::Notify;

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateSession,
    SendMessage { content: String, session_id: String },
    GetHistory(String),
    GetAllSessions,
    DeleteSession(String),
    QueryPatient(PatientQuery),
    SaveMessage { session_id: String, role: Role, content: String },
}

/// Operations that can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Create,
    Send,
    History,
    List,
    Delete,
    Query,
    Save,
}

#[derive(Debug, Default)]
pub struct ScriptedBackend {
    calls: Mutex<Vec<Call>>,
    sessions: Mutex<Vec<String>>,
    histories: Mutex<HashMap<String, Vec<Message>>>,
    failing: Mutex<HashSet<Op>>,
    history_gates: Mutex<HashMap<String, Arc<Notify>>>,
    send_gate: Mutex<Option<Arc<Notify>>>,
    created: Mutex<u32>,
}

impl ScriptedBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_sessions(ids: &[&str]) -> Arc<Self> {
        let backend = Self::new();
        *backend.sessions.lock().unwrap() = ids.iter().map(ToString::to_string).collect();
        backend
    }

    pub fn set_history(&self, session_id: &str, messages: Vec<Message>) {
        self.histories
            .lock()
            .unwrap()
            .insert(session_id.to_string(), messages);
    }

    pub fn fail(&self, op: Op) {
        self.failing.lock().unwrap().insert(op);
    }

    /// Make `get_history(session_id)` wait until the returned handle is notified.
    pub fn hold_history(&self, session_id: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.history_gates
            .lock()
            .unwrap()
            .insert(session_id.to_string(), Arc::clone(&gate));
        gate
    }

    /// Make the next chat/query calls wait until the returned handle is notified.
    pub fn hold_sends(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.send_gate.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn called(&self, call: &Call) -> bool {
        self.calls.lock().unwrap().contains(call)
    }

    /// Yield until `call` has been recorded.
    pub async fn wait_for(&self, call: &Call) {
        while !self.called(call) {
            tokio::task::yield_now().await;
        }
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, op: Op) -> Result<()> {
        if self.failing.lock().unwrap().contains(&op) {
            Err(Error::Api {
                status: 500,
                message: format!("{op:?} failed"),
            })
        } else {
            Ok(())
        }
    }

    async fn pass_send_gate(&self) {
        let gate = self.send_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }
}

pub fn reply_to(content: &str) -> String {
    format!("echo: {content}")
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn create_session(&self) -> Result<CreatedSession> {
        self.record(Call::CreateSession);
        self.check(Op::Create)?;
        let id = {
            let mut created = self.created.lock().unwrap();
            *created += 1;
            format!("created-{created}")
        };
        self.sessions.lock().unwrap().push(id.clone());
        Ok(CreatedSession { session_id: id })
    }

    async fn send_message(&self, content: &str, session_id: &str) -> Result<Reply> {
        self.record(Call::SendMessage {
            content: content.to_string(),
            session_id: session_id.to_string(),
        });
        self.pass_send_gate().await;
        self.check(Op::Send)?;
        Ok(Reply {
            response: reply_to(content),
        })
    }

    async fn get_history(&self, session_id: &str) -> Result<Vec<Message>> {
        self.record(Call::GetHistory(session_id.to_string()));
        let gate = self.history_gates.lock().unwrap().get(session_id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.check(Op::History)?;
        Ok(self
            .histories
            .lock()
            .unwrap()
            .get(session_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_all_sessions(&self) -> Result<Vec<String>> {
        self.record(Call::GetAllSessions);
        self.check(Op::List)?;
        Ok(self.sessions.lock().unwrap().clone())
    }

    async fn delete_session(&self, session_id: &str) -> Result<Confirmation> {
        self.record(Call::DeleteSession(session_id.to_string()));
        self.check(Op::Delete)?;
        self.sessions.lock().unwrap().retain(|s| s != session_id);
        Ok(Confirmation {
            message: Some("Session deleted".into()),
            status: None,
        })
    }

    async fn query_patient_info(&self, query: &PatientQuery) -> Result<Reply> {
        self.record(Call::QueryPatient(query.clone()));
        self.pass_send_gate().await;
        self.check(Op::Query)?;
        Ok(Reply {
            response: reply_to(&query.question),
        })
    }

    async fn save_message(
        &self,
        session_id: &str,
        role: Role,
        content: &str,
    ) -> Result<Confirmation> {
        self.record(Call::SaveMessage {
            session_id: session_id.to_string(),
            role,
            content: content.to_string(),
        });
        self.check(Op::Save)?;
        Ok(Confirmation {
            message: None,
            status: Some("message added".into()),
        })
    }
}
