use std::fs;
use std::path::{Path, PathBuf};
use chrono::Utc;
use regex::Regex;
use walkdir::{DirEntry, WalkDir};
use crate::config::constants::{DOC_EXCLUDED_DIRS, MAX_REPORTED_UNDOCUMENTED_FILES, README_CANDIDATES};
use crate::enums::probe_status::ProbeStatus;
use crate::errors::{ArchaeologistError, ArchaeologistResult};
use crate::structs::doc_analysis::{DocAnalysis, UndocumentedFile};
use crate::structs::file_doc_stats::FileDocStats;

const PYTHON_FUNCTION_PATTERN: &str = r"^\s*(async\s+)?def\s+\w+";
const PYTHON_CLASS_PATTERN: &str = r"^\s*class\s+\w+";
const RUST_FUNCTION_PATTERN: &str = r#"^\s*(pub(\([^)]*\))?\s+)?(const\s+)?(async\s+)?(unsafe\s+)?(extern\s+"[^"]*"\s+)?fn\s+\w+"#;
const RUST_TYPE_PATTERN: &str = r"^\s*(pub(\([^)]*\))?\s+)?(struct|enum|trait)\s+\w+";

const TRIPLE_QUOTES: [&str; 2] = ["\"\"\"", "'''"];

pub struct DocumentationAnalyzer;

impl DocumentationAnalyzer {

    pub fn analyze(repo_path: &Path) -> DocAnalysis {
        match Self::try_analyze(repo_path) {
            Ok(analysis) => analysis,
            Err(e) => {
                log::warn!("⚠️ Documentation probe failed for {}: {}", repo_path.display(), e);
                DocAnalysis::failed(&format!("Analysis failed: {}", e))
            }
        }
    }

    fn try_analyze(repo_path: &Path) -> ArchaeologistResult<DocAnalysis> {
        if !repo_path.is_dir() {
            return Err(ArchaeologistError::probe_error(
                "documentation",
                &format!("{} is not a directory", repo_path.display()),
            ));
        }

        let has_readme = README_CANDIDATES.iter().any(|name| repo_path.join(name).exists());
        let source_files = Self::find_source_files(repo_path)?;

        if source_files.is_empty() {
            log::debug!("📭 No Python or Rust sources under {}", repo_path.display());
            return Ok(DocAnalysis::no_source_files(has_readme));
        }

        let heuristics = DocHeuristics::new()?;
        let stats: Vec<FileDocStats> = source_files
            .into_iter()
            .map(|file| heuristics.analyze_file(file))
            .collect();

        Ok(summarize(repo_path, has_readme, &stats))
    }

    fn find_source_files(repo_path: &Path) -> ArchaeologistResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(repo_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_excluded_dir(entry));

        for entry in walker {
            let entry = entry.map_err(|e| ArchaeologistError::system_error("walk repository", &e.to_string()))?;
            if entry.file_type().is_file() && SourceLanguage::of(entry.path()).is_some() {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| DOC_EXCLUDED_DIRS.contains(&name))
            .unwrap_or(false)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn ratio_or_full(documented: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        documented as f64 / total as f64
    }
}

fn summarize(repo_path: &Path, has_readme: bool, stats: &[FileDocStats]) -> DocAnalysis {
    let total_files = stats.len();
    let documented_files = stats.iter().filter(|s| s.has_module_doc).count();

    let undocumented_files = stats
        .iter()
        .filter(|s| !s.has_module_doc && s.has_definitions())
        .take(MAX_REPORTED_UNDOCUMENTED_FILES)
        .map(|s| UndocumentedFile {
            file: s.file.strip_prefix(repo_path).unwrap_or(&s.file).display().to_string(),
            functions: s.total_functions,
            classes: s.total_classes,
        })
        .collect();

    let total_functions: usize = stats.iter().map(|s| s.total_functions).sum();
    let documented_functions: usize = stats.iter().map(|s| s.documented_functions).sum();
    let total_classes: usize = stats.iter().map(|s| s.total_classes).sum();
    let documented_classes: usize = stats.iter().map(|s| s.documented_classes).sum();

    DocAnalysis {
        coverage: round2(documented_files as f64 / total_files as f64),
        has_readme,
        total_files,
        documented_files,
        undocumented_files,
        function_coverage: round2(ratio_or_full(documented_functions, total_functions)),
        class_coverage: round2(ratio_or_full(documented_classes, total_classes)),
        total_functions,
        total_classes,
        status: ProbeStatus::Completed,
        analyzed_at: Some(Utc::now()),
        error: None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceLanguage {
    Python,
    Rust,
}

impl SourceLanguage {
    fn of(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("py") => Some(SourceLanguage::Python),
            Some("rs") => Some(SourceLanguage::Rust),
            _ => None,
        }
    }
}

/// Line-based documentation checks. Definitions are matched by pattern, not parsed.
pub struct DocHeuristics {
    python_function: Regex,
    python_class: Regex,
    rust_function: Regex,
    rust_type: Regex,
}

impl DocHeuristics {
    pub fn new() -> ArchaeologistResult<Self> {
        Ok(Self {
            python_function: Regex::new(PYTHON_FUNCTION_PATTERN)?,
            python_class: Regex::new(PYTHON_CLASS_PATTERN)?,
            rust_function: Regex::new(RUST_FUNCTION_PATTERN)?,
            rust_type: Regex::new(RUST_TYPE_PATTERN)?,
        })
    }

    fn analyze_file(&self, file: PathBuf) -> FileDocStats {
        let Some(language) = SourceLanguage::of(&file) else {
            return FileDocStats::unreadable(file);
        };

        match fs::read_to_string(&file) {
            Ok(content) => match language {
                SourceLanguage::Python => self.python_stats(file, &content),
                SourceLanguage::Rust => self.rust_stats(file, &content),
            },
            Err(e) => {
                log::debug!("Skipping unreadable source {}: {}", file.display(), e);
                FileDocStats::unreadable(file)
            }
        }
    }

    pub fn python_stats(&self, file: PathBuf, content: &str) -> FileDocStats {
        let lines: Vec<&str> = content.lines().collect();
        let mut stats = FileDocStats {
            file,
            has_module_doc: python_module_docstring(&lines),
            ..FileDocStats::default()
        };

        for (index, line) in lines.iter().enumerate() {
            if self.python_function.is_match(line) {
                stats.total_functions += 1;
                if python_body_has_docstring(&lines, index) {
                    stats.documented_functions += 1;
                }
            } else if self.python_class.is_match(line) {
                stats.total_classes += 1;
                if python_body_has_docstring(&lines, index) {
                    stats.documented_classes += 1;
                }
            }
        }

        stats
    }

    pub fn rust_stats(&self, file: PathBuf, content: &str) -> FileDocStats {
        let lines: Vec<&str> = content.lines().collect();
        let mut stats = FileDocStats {
            file,
            has_module_doc: lines.iter().any(|line| {
                let trimmed = line.trim_start();
                trimmed.starts_with("//!") || trimmed.starts_with("/*!")
            }),
            ..FileDocStats::default()
        };

        for (index, line) in lines.iter().enumerate() {
            if line.trim_start().starts_with("//") {
                continue;
            }
            if self.rust_function.is_match(line) {
                stats.total_functions += 1;
                if rust_item_has_doc(&lines, index) {
                    stats.documented_functions += 1;
                }
            } else if self.rust_type.is_match(line) {
                stats.total_classes += 1;
                if rust_item_has_doc(&lines, index) {
                    stats.documented_classes += 1;
                }
            }
        }

        stats
    }
}

fn starts_with_triple_quote(line: &str) -> bool {
    let unprefixed = line.trim_start_matches(['r', 'R', 'u', 'U', 'b', 'B']);
    TRIPLE_QUOTES.iter().any(|quote| unprefixed.starts_with(quote))
}

fn python_module_docstring(lines: &[&str]) -> bool {
    lines
        .iter()
        .map(|line| line.trim())
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .map(starts_with_triple_quote)
        .unwrap_or(false)
}

/// The definition header may span lines; its body starts after the first line ending in `:`.
fn python_body_has_docstring(lines: &[&str], header_index: usize) -> bool {
    let Some(header_end) = (header_index..lines.len()).find(|&i| lines[i].trim_end().ends_with(':')) else {
        return false;
    };

    lines[header_end + 1..]
        .iter()
        .map(|line| line.trim())
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .map(starts_with_triple_quote)
        .unwrap_or(false)
}

fn rust_item_has_doc(lines: &[&str], item_index: usize) -> bool {
    lines[..item_index]
        .iter()
        .rev()
        .map(|line| line.trim())
        .find(|line| !line.starts_with("#["))
        .map(|line| line.starts_with("///") || line.starts_with("#[doc") || line.ends_with("*/"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heuristics() -> DocHeuristics {
        DocHeuristics::new().unwrap()
    }

    #[test]
    fn python_docstrings_are_found_on_multiline_headers() {
        let source = r#""""Module doc."""

def documented(a,
               b):
    """Adds."""
    return a + b

def bare():
    return 1

class Thing:
    '''A thing.'''
"#;
        let stats = heuristics().python_stats(PathBuf::from("m.py"), source);

        assert!(stats.has_module_doc);
        assert_eq!(stats.total_functions, 2);
        assert_eq!(stats.documented_functions, 1);
        assert_eq!(stats.total_classes, 1);
        assert_eq!(stats.documented_classes, 1);
    }

    #[test]
    fn python_comment_before_docstring_still_counts_as_module_doc() {
        let source = "#!/usr/bin/env python\n# -*- coding: utf-8 -*-\n\"\"\"Doc.\"\"\"\n";
        let stats = heuristics().python_stats(PathBuf::from("m.py"), source);
        assert!(stats.has_module_doc);
    }

    #[test]
    fn rust_doc_comments_skip_attributes() {
        let source = r#"//! Crate docs.

/// Documented.
#[derive(Debug)]
pub struct Documented;

pub enum Bare { A }

/// Runs.
#[inline]
pub(crate) async fn run() {}

fn helper() {}
"#;
        let stats = heuristics().rust_stats(PathBuf::from("lib.rs"), source);

        assert!(stats.has_module_doc);
        assert_eq!(stats.total_classes, 2);
        assert_eq!(stats.documented_classes, 1);
        assert_eq!(stats.total_functions, 2);
        assert_eq!(stats.documented_functions, 1);
    }

    #[test]
    fn excluded_directories_are_not_walked() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("venv/lib")).unwrap();
        fs::write(dir.path().join("venv/lib/site.py"), "def x():\n    pass\n").unwrap();
        fs::write(dir.path().join("app.py"), "\"\"\"App.\"\"\"\n").unwrap();
        fs::write(dir.path().join("README.md"), "# app").unwrap();

        let analysis = DocumentationAnalyzer::analyze(dir.path());

        assert_eq!(analysis.status, ProbeStatus::Completed);
        assert_eq!(analysis.total_files, 1);
        assert_eq!(analysis.coverage, 1.0);
        assert!(analysis.has_readme);
        assert_eq!(analysis.function_coverage, 1.0);
    }

    #[test]
    fn coverage_is_rounded_and_undocumented_files_listed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.py"), "\"\"\"A.\"\"\"\n").unwrap();
        fs::write(dir.path().join("b.py"), "def b():\n    pass\n").unwrap();
        fs::write(dir.path().join("c.py"), "x = 1\n").unwrap();

        let analysis = DocumentationAnalyzer::analyze(dir.path());

        assert_eq!(analysis.coverage, 0.33);
        assert_eq!(analysis.documented_files, 1);
        assert_eq!(analysis.undocumented_files, vec![UndocumentedFile {
            file: "b.py".to_string(),
            functions: 1,
            classes: 0,
        }]);
        assert_eq!(analysis.function_coverage, 0.0);
    }

    #[test]
    fn empty_repository_has_no_data_and_zero_coverage() {
        let dir = tempfile::tempdir().unwrap();
        let analysis = DocumentationAnalyzer::analyze(dir.path());

        assert_eq!(analysis.status, ProbeStatus::NoData);
        assert_eq!(analysis.coverage, 0.0);
        assert!(analysis.error.is_none());
    }
}
