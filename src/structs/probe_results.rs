use serde::{Deserialize, Serialize};
use crate::structs::cve_analysis::CveAnalysis;
use crate::structs::doc_analysis::DocAnalysis;
use crate::structs::git_analysis::GitAnalysis;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeResults {
    pub git: GitAnalysis,
    pub cve: CveAnalysis,
    pub doc: DocAnalysis,
}

impl ProbeResults {
    pub fn total_issues(&self) -> usize {
        self.git.high_churn_files.len()
            + self.cve.vulnerabilities.len()
            + self.doc.undocumented_files.len()
    }
}
