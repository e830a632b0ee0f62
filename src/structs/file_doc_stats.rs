use std::path::PathBuf;

/// Documentation counts for a single source file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileDocStats {
    pub file: PathBuf,
    pub has_module_doc: bool,
    pub total_functions: usize,
    pub documented_functions: usize,
    pub total_classes: usize,
    pub documented_classes: usize,
}

impl FileDocStats {
    pub fn unreadable(file: PathBuf) -> Self {
        Self {
            file,
            ..Self::default()
        }
    }

    pub fn has_definitions(&self) -> bool {
        self.total_functions > 0 || self.total_classes > 0
    }
}
