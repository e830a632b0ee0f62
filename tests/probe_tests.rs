use std::fs;
use std::path::Path;
use tempfile::TempDir;

use archaeologist::enums::probe_status::ProbeStatus;
use archaeologist::enums::vulnerability_severity::VulnerabilitySeverity;
use archaeologist::services::filesystem_probes::FilesystemProbes;
use archaeologist::traits::probe_suite::ProbeSuite;

#[test]
fn nonexistent_path_fails_every_probe_without_panicking() {
    let probes = FilesystemProbes;
    let missing = Path::new("/definitely/not/a/repository");

    let git = probes.git_history(missing, 90);
    let cve = probes.dependencies(missing, None);
    let doc = probes.documentation(missing);

    assert_eq!(git.status, ProbeStatus::Error);
    assert_eq!(git.lookback_days, 90);
    assert_eq!(cve.status, ProbeStatus::Error);
    assert_eq!(doc.status, ProbeStatus::Error);
    assert!(git.error.is_some() && cve.error.is_some() && doc.error.is_some());
}

#[test]
fn directory_without_git_metadata_is_reported() {
    let dir = TempDir::new().unwrap();
    let git = FilesystemProbes.git_history(dir.path(), 30);

    assert_eq!(git.status, ProbeStatus::Error);
    assert_eq!(git.error.as_deref(), Some("Not a git repository"));
    assert_eq!(git.risk_score, 0);
}

#[test]
fn missing_manifest_is_no_data_not_error() {
    let dir = TempDir::new().unwrap();
    let cve = FilesystemProbes.dependencies(dir.path(), None);

    assert_eq!(cve.status, ProbeStatus::NoData);
    assert_eq!(cve.total_dependencies, 0);
    assert!(cve.error.is_none());
}

#[test]
fn requirements_are_matched_against_known_vulnerabilities() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("requirements.txt"),
        "# pinned\nDjango==2.2.0\nrequests>=2.31.0\nflask\n",
    )
    .unwrap();

    let cve = FilesystemProbes.dependencies(dir.path(), Some("unused-key"));

    assert_eq!(cve.status, ProbeStatus::Completed);
    assert_eq!(cve.total_dependencies, 2);
    assert_eq!(cve.vulnerabilities.len(), 1);
    assert_eq!(cve.vulnerabilities[0].package, "django");
    assert_eq!(cve.vulnerabilities[0].severity, VulnerabilitySeverity::Critical);
    assert_eq!(cve.severity_counts.critical, 1);
    assert_eq!(cve.critical_count(), 1);
}

#[test]
fn documentation_coverage_counts_module_docstrings() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("README.md"), "# demo\n").unwrap();
    fs::write(
        dir.path().join("documented.py"),
        "\"\"\"Module docs.\"\"\"\n\ndef run():\n    \"\"\"Runs.\"\"\"\n    return 1\n",
    )
    .unwrap();
    fs::write(dir.path().join("bare.py"), "def helper():\n    return 2\n\nclass Thing:\n    pass\n").unwrap();
    fs::write(dir.path().join("empty.py"), "x = 1\n").unwrap();

    fs::create_dir(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("node_modules").join("vendored.py"), "def skipped():\n    pass\n").unwrap();

    let doc = FilesystemProbes.documentation(dir.path());

    assert_eq!(doc.status, ProbeStatus::Completed);
    assert!(doc.has_readme);
    assert_eq!(doc.total_files, 3);
    assert_eq!(doc.documented_files, 1);
    assert_eq!(doc.coverage, 0.33);
    assert_eq!(doc.total_functions, 2);
    assert_eq!(doc.function_coverage, 0.5);
    assert_eq!(doc.class_coverage, 0.0);
    assert_eq!(doc.undocumented_files.len(), 1);
    assert_eq!(doc.undocumented_files[0].file, "bare.py");
}

#[test]
fn repository_without_sources_has_zero_coverage() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("README"), "plain readme\n").unwrap();

    let doc = FilesystemProbes.documentation(dir.path());

    assert_eq!(doc.status, ProbeStatus::NoData);
    assert!(doc.has_readme);
    assert_eq!(doc.coverage, 0.0);
}
