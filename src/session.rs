use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crate::chat::prompt::Persona;

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry. Immutable once appended; display order is append
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub at: i64,
}

/// Per-user conversation state: selected persona, the immutable knowledge
/// context, and the append-only transcript. Held in memory only — nothing
/// survives a restart.
#[derive(Debug, Clone)]
pub struct Session {
    persona: Option<Persona>,
    context: Arc<str>,
    transcript: Vec<Message>,
}

impl Session {
    fn new(context: Arc<str>) -> Self {
        Self {
            persona: None,
            context,
            transcript: Vec::new(),
        }
    }

    pub fn persona(&self) -> Option<Persona> {
        self.persona
    }

    pub fn set_persona(&mut self, persona: Persona) {
        self.persona = Some(persona);
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn append_message(&mut self, role: Role, content: impl Into<String>) {
        self.transcript.push(Message {
            role,
            content: content.into(),
            at: chrono::Utc::now().timestamp(),
        });
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }
}

/// All live sessions, keyed by Discord user id. Each user owns an isolated
/// session created at their first interaction; there is no shared mutable
/// state across users.
pub struct SessionStore {
    knowledge: Arc<str>,
    sessions: RwLock<HashMap<u64, Session>>,
}

impl SessionStore {
    pub fn new(knowledge: impl Into<Arc<str>>) -> Self {
        Self {
            knowledge: knowledge.into(),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch a copy of the user's session, creating it on first interaction.
    pub async fn session(&self, user_id: u64) -> Session {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(user_id)
            .or_insert_with(|| Session::new(self.knowledge.clone()))
            .clone()
    }

    pub async fn set_persona(&self, user_id: u64, persona: Persona) {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(user_id)
            .or_insert_with(|| Session::new(self.knowledge.clone()))
            .set_persona(persona);
        debug!(user_id, ?persona, "persona set");
    }

    pub async fn persona(&self, user_id: u64) -> Option<Persona> {
        let sessions = self.sessions.read().await;
        sessions.get(&user_id).and_then(Session::persona)
    }

    /// Record one completed question/answer round trip. Both messages land
    /// in a single mutation, so an aborted upstream call can never leave a
    /// half-written exchange behind.
    pub async fn record_exchange(&self, user_id: u64, question: &str, answer: &str) {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .entry(user_id)
            .or_insert_with(|| Session::new(self.knowledge.clone()));
        session.append_message(Role::User, question);
        session.append_message(Role::Assistant, answer);
        debug!(
            user_id,
            transcript_len = session.transcript.len(),
            "exchange recorded"
        );
    }

    pub async fn transcript(&self, user_id: u64) -> Vec<Message> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&user_id)
            .map(|s| s.transcript().to_vec())
            .unwrap_or_default()
    }

    /// Drop the user's session entirely. Their next interaction starts fresh.
    pub async fn clear(&self, user_id: u64) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&user_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWLEDGE: &str = "IDIA is a nonprofit dedicated to digital inclusion.";

    #[test]
    fn test_session_starts_empty() {
        let session = Session::new(KNOWLEDGE.into());
        assert_eq!(session.persona(), None);
        assert_eq!(session.context(), KNOWLEDGE);
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut session = Session::new(KNOWLEDGE.into());
        session.append_message(Role::User, "hi");
        session.append_message(Role::Assistant, "hello");

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role, Role::User);
        assert_eq!(transcript[0].content, "hi");
        assert_eq!(transcript[1].role, Role::Assistant);
        assert_eq!(transcript[1].content, "hello");
    }

    #[tokio::test]
    async fn test_store_creates_session_on_first_use() {
        let store = SessionStore::new(KNOWLEDGE);
        let session = store.session(7).await;
        assert_eq!(session.persona(), None);
        assert_eq!(session.context(), KNOWLEDGE);
    }

    #[tokio::test]
    async fn test_set_persona_is_visible_immediately() {
        let store = SessionStore::new(KNOWLEDGE);
        store.set_persona(7, Persona::Senior).await;
        assert_eq!(store.persona(7).await, Some(Persona::Senior));
        assert_eq!(store.session(7).await.persona(), Some(Persona::Senior));
    }

    #[tokio::test]
    async fn test_sessions_are_isolated_per_user() {
        let store = SessionStore::new(KNOWLEDGE);
        store.set_persona(1, Persona::Kid).await;
        store.record_exchange(1, "q", "a").await;

        assert_eq!(store.persona(2).await, None);
        assert!(store.transcript(2).await.is_empty());
    }

    #[tokio::test]
    async fn test_exchanges_interleave_strictly() {
        let store = SessionStore::new(KNOWLEDGE);
        store.set_persona(7, Persona::Adult).await;
        store.record_exchange(7, "q1", "a1").await;
        store.record_exchange(7, "q2", "a2").await;
        store.record_exchange(7, "q3", "a3").await;

        let transcript = store.transcript(7).await;
        assert_eq!(transcript.len(), 6);
        for (i, message) in transcript.iter().enumerate() {
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            assert_eq!(message.role, expected);
        }
        assert_eq!(transcript[2].content, "q2");
        assert_eq!(transcript[5].content, "a3");
    }

    #[tokio::test]
    async fn test_clear_destroys_session() {
        let store = SessionStore::new(KNOWLEDGE);
        store.set_persona(7, Persona::Kid).await;
        store.record_exchange(7, "q", "a").await;

        store.clear(7).await;
        assert_eq!(store.persona(7).await, None);
        assert!(store.transcript(7).await.is_empty());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }
}
