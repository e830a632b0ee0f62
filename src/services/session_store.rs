use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use chrono::Utc;
use dashmap::DashMap;
use crate::enums::message_role::MessageRole;
use crate::helpers::id_generator;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::conversation_message::ConversationMessage;
use crate::structs::session::Session;
use crate::structs::session_statistics::SessionStatistics;

pub type JsonMap = BTreeMap<String, serde_json::Value>;

/// Bounded in-memory session map. Inserting at capacity evicts the least recently updated session.
pub struct SessionStore {
    sessions: DashMap<String, Session>,
    insert_lock: Mutex<()>,
    revision: AtomicU64,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            insert_lock: Mutex::new(()),
            revision: AtomicU64::new(0),
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }

    fn next_revision(&self) -> u64 {
        self.revision.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn touch(&self, session: &mut Session) {
        session.updated_at = Utc::now();
        session.revision = self.next_revision();
    }

    pub fn create_session(&self, metadata: JsonMap) -> Session {
        let now = Utc::now();
        let session = Session {
            id: id_generator::session_id(),
            created_at: now,
            updated_at: now,
            state: BTreeMap::new(),
            conversation_history: Vec::new(),
            result: None,
            metadata,
            revision: self.next_revision(),
        };

        let _guard = self.insert_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        while self.sessions.len() >= self.max_sessions {
            if !self.evict_oldest() {
                break;
            }
        }
        self.sessions.insert(session.id.clone(), session.clone());
        log::debug!("🗂️ Created session {} ({} active)", session.id, self.sessions.len());

        session
    }

    fn evict_oldest(&self) -> bool {
        let oldest = self
            .sessions
            .iter()
            .min_by_key(|entry| entry.value().recency_key())
            .map(|entry| entry.key().clone());

        match oldest {
            Some(id) => {
                log::debug!("🗑️ Evicting session {}", id);
                self.sessions.remove(&id).is_some()
            }
            None => false,
        }
    }

    pub fn get_session(&self, session_id: &str) -> Option<Session> {
        self.sessions.get(session_id).map(|entry| entry.value().clone())
    }

    pub fn update_session(
        &self,
        session_id: &str,
        state_updates: JsonMap,
        result: Option<Arc<AnalysisResult>>,
    ) -> bool {
        let Some(mut session) = self.sessions.get_mut(session_id) else {
            return false;
        };

        session.state.extend(state_updates);
        if result.is_some() {
            session.result = result;
        }
        self.touch(&mut session);
        true
    }

    pub fn add_message(&self, session_id: &str, role: MessageRole, content: &str, metadata: JsonMap) -> bool {
        let Some(mut session) = self.sessions.get_mut(session_id) else {
            return false;
        };

        session.conversation_history.push(ConversationMessage {
            role,
            content: content.to_string(),
            timestamp: Utc::now(),
            metadata,
        });
        self.touch(&mut session);
        true
    }

    pub fn delete_session(&self, session_id: &str) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    /// Most recently updated first.
    pub fn list_sessions(&self, limit: usize, offset: usize) -> Vec<Session> {
        let mut sessions: Vec<Session> = self.sessions.iter().map(|entry| entry.value().clone()).collect();
        sessions.sort_by(|a, b| b.recency_key().cmp(&a.recency_key()));
        sessions.into_iter().skip(offset).take(limit).collect()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn clear_all(&self) {
        let _guard = self.insert_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        self.sessions.clear();
    }

    pub fn statistics(&self) -> SessionStatistics {
        let total_sessions = self.sessions.len();
        if total_sessions == 0 {
            return SessionStatistics::default();
        }

        let total_messages: usize = self
            .sessions
            .iter()
            .map(|entry| entry.value().conversation_history.len())
            .sum();

        SessionStatistics {
            total_sessions,
            active_sessions: total_sessions,
            average_conversation_length: total_messages as f64 / total_sessions as f64,
            oldest_session: self.sessions.iter().map(|entry| entry.value().created_at).min(),
            newest_session: self.sessions.iter().map(|entry| entry.value().created_at).max(),
        }
    }
}
