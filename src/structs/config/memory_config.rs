use std::path::PathBuf;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct MemoryConfig {
    /// JSON snapshot rewritten on every insert when set.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
}
