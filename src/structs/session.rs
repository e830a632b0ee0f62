use std::collections::BTreeMap;
use std::sync::Arc;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::conversation_message::ConversationMessage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub state: BTreeMap<String, serde_json::Value>,
    pub conversation_history: Vec<ConversationMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Arc<AnalysisResult>>,
    pub metadata: BTreeMap<String, serde_json::Value>,
    /// Store-wide ordering of the last touch, breaks `updated_at` ties.
    #[serde(skip)]
    pub revision: u64,
}

impl Session {
    pub fn get_state(&self, key: &str) -> Option<&serde_json::Value> {
        self.state.get(key)
    }

    /// Orders sessions by last update, oldest first.
    pub fn recency_key(&self) -> (DateTime<Utc>, u64) {
        (self.updated_at, self.revision)
    }
}
