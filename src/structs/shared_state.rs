use std::sync::Arc;
use crate::services::memory_bank::MemoryBank;
use crate::services::metrics_collector::MetricsCollector;
use crate::services::quality_aggregator::QualityAggregator;
use crate::services::session_store::SessionStore;
use crate::structs::config::config::Config;

/// Process-wide stores handed to every orchestrator.
#[derive(Clone)]
pub struct SharedState {
    pub sessions: Arc<SessionStore>,
    pub memory: Arc<MemoryBank>,
    pub metrics: Arc<MetricsCollector>,
    pub quality: Arc<QualityAggregator>,
}

impl SharedState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new(config.sessions.max_sessions)),
            memory: Arc::new(MemoryBank::new(config.memory.storage_path.clone())),
            metrics: Arc::new(MetricsCollector::new()),
            quality: Arc::new(QualityAggregator::new()),
        }
    }

    pub fn in_memory(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new(max_sessions)),
            memory: Arc::new(MemoryBank::in_memory()),
            metrics: Arc::new(MetricsCollector::new()),
            quality: Arc::new(QualityAggregator::new()),
        }
    }
}
