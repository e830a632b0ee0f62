use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use chrono::Utc;
use crate::enums::severity_tier::SeverityTier;
use crate::errors::{ArchaeologistError, ArchaeologistResult, ResultExt};
use crate::helpers::id_generator;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::insight::Insight;
use crate::structs::memory_entry::{MemoryEntry, MemoryMetadata};
use crate::structs::memory_patterns::MemoryPatterns;
use crate::structs::memory_query::MemoryQuery;
use crate::structs::memory_snapshot::MemorySnapshot;
use crate::structs::memory_statistics::MemoryStatistics;

#[derive(Default)]
struct MemoryState {
    entries: Vec<MemoryEntry>,
    patterns: MemoryPatterns,
    insights: Vec<Insight>,
}

impl MemoryState {
    fn snapshot(&self) -> MemorySnapshot {
        MemorySnapshot {
            memories: self.entries.clone(),
            patterns: self.patterns.clone(),
            insights: self.insights.clone(),
            saved_at: Utc::now(),
        }
    }
}

/// Append-only history of analyses with incrementally maintained patterns.
///
/// Snapshot writes are serialized by `persist_lock`, taken before `state`, so
/// the file always ends up holding the newest snapshot.
pub struct MemoryBank {
    storage_path: Option<PathBuf>,
    state: RwLock<MemoryState>,
    persist_lock: Mutex<()>,
}

impl MemoryBank {
    pub fn in_memory() -> Self {
        Self {
            storage_path: None,
            state: RwLock::new(MemoryState::default()),
            persist_lock: Mutex::new(()),
        }
    }

    /// Loads an existing snapshot; an unreadable one starts a fresh store.
    pub fn new(storage_path: Option<PathBuf>) -> Self {
        let state = match storage_path.as_deref() {
            Some(path) if path.exists() => match Self::load_snapshot(path) {
                Ok(snapshot) => {
                    log::debug!("🧠 Loaded {} memories from {}", snapshot.memories.len(), path.display());
                    MemoryState {
                        patterns: MemoryPatterns::from_entries(&snapshot.memories),
                        entries: snapshot.memories,
                        insights: snapshot.insights,
                    }
                }
                Err(e) => {
                    log::warn!("⚠️ Ignoring unreadable memory snapshot {}: {}", path.display(), e);
                    MemoryState::default()
                }
            },
            _ => MemoryState::default(),
        };

        Self {
            storage_path,
            state: RwLock::new(state),
            persist_lock: Mutex::new(()),
        }
    }

    pub fn load_snapshot(path: &Path) -> ArchaeologistResult<MemorySnapshot> {
        let content = fs::read_to_string(path).map_err(|e| {
            ArchaeologistError::storage_error(&path.display().to_string(), "read snapshot", &e.to_string())
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn storage_path(&self) -> Option<&Path> {
        self.storage_path.as_deref()
    }

    fn read(&self) -> RwLockReadGuard<'_, MemoryState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn persist_guard(&self) -> MutexGuard<'_, ()> {
        self.persist_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The entry is kept even when writing the snapshot fails.
    pub fn store_analysis(&self, result: &AnalysisResult, tags: Vec<String>) -> ArchaeologistResult<String> {
        let entry = MemoryEntry {
            id: id_generator::memory_id(),
            repo_path: result.repo_path.clone(),
            correlation_id: result.correlation_id.clone(),
            timestamp: Utc::now(),
            result: result.clone(),
            tags,
            metadata: MemoryMetadata::from_result(result),
        };
        let id = entry.id.clone();

        let _persisting = self.persist_guard();
        let snapshot = {
            let mut state = self.write();
            state.patterns.record(&entry);
            state.entries.push(entry);
            self.storage_path.as_ref().map(|_| state.snapshot())
        };

        if let Some(snapshot) = snapshot {
            self.persist(&snapshot).with_context("memory bank")?;
        }

        Ok(id)
    }

    fn persist(&self, snapshot: &MemorySnapshot) -> ArchaeologistResult<()> {
        let Some(path) = self.storage_path.as_deref() else {
            return Ok(());
        };
        let display = path.display().to_string();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| ArchaeologistError::storage_error(&display, "create snapshot directory", &e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(path, json)
            .map_err(|e| ArchaeologistError::storage_error(&display, "write snapshot", &e.to_string()))
    }

    fn most_recent_first<'a>(entries: impl DoubleEndedIterator<Item = &'a MemoryEntry>) -> Vec<MemoryEntry> {
        let mut selected: Vec<MemoryEntry> = entries.rev().cloned().collect();
        selected.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        selected
    }

    pub fn retrieve_by_repo(&self, repo_path: &str) -> Vec<MemoryEntry> {
        let state = self.read();
        Self::most_recent_first(state.entries.iter().filter(|e| e.repo_path == repo_path))
    }

    pub fn retrieve_by_severity(&self, severity: SeverityTier) -> Vec<MemoryEntry> {
        let state = self.read();
        Self::most_recent_first(state.entries.iter().filter(|e| e.metadata.severity == Some(severity)))
    }

    pub fn retrieve_recent(&self, limit: usize) -> Vec<MemoryEntry> {
        let state = self.read();
        let mut recent = Self::most_recent_first(state.entries.iter());
        recent.truncate(limit);
        recent
    }

    pub fn search(&self, query: &MemoryQuery) -> Vec<MemoryEntry> {
        let state = self.read();
        let matches = state.entries.iter().filter(|entry| {
            query.min_impact_score.map_or(true, |min| entry.metadata.impact_score >= min)
                && query.severity.map_or(true, |severity| entry.metadata.severity == Some(severity))
                && (query.tags.is_empty() || entry.has_any_tag(&query.tags))
        });

        let mut results = Self::most_recent_first(matches);
        results.truncate(query.limit);
        results
    }

    pub fn add_insight(&self, insight: &str) -> ArchaeologistResult<()> {
        let _persisting = self.persist_guard();
        let snapshot = {
            let mut state = self.write();
            state.insights.push(Insight {
                insight: insight.to_string(),
                learned_at: Utc::now(),
            });
            self.storage_path.as_ref().map(|_| state.snapshot())
        };

        match snapshot {
            Some(snapshot) => self.persist(&snapshot).with_context("memory bank"),
            None => Ok(()),
        }
    }

    pub fn learned_insights(&self) -> Vec<Insight> {
        self.read().insights.clone()
    }

    pub fn patterns(&self) -> MemoryPatterns {
        self.read().patterns.clone()
    }

    pub fn entries(&self) -> Vec<MemoryEntry> {
        self.read().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn statistics(&self) -> MemoryStatistics {
        let state = self.read();
        MemoryStatistics {
            total_memories: state.entries.len(),
            total_insights: state.insights.len(),
            patterns_identified: state.patterns.identified(),
            oldest_memory: state.entries.iter().map(|e| e.timestamp).min(),
            newest_memory: state.entries.iter().map(|e| e.timestamp).max(),
            severity_distribution: state.patterns.severity_distribution.clone(),
            average_impact_score: state.patterns.average_impact_score,
        }
    }

    /// Drops entries, patterns and insights. The snapshot on disk is left as is.
    pub fn clear(&self) {
        *self.write() = MemoryState::default();
    }
}
