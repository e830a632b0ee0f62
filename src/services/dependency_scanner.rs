use std::fs;
use std::path::Path;
use chrono::Utc;
use regex::Regex;
use crate::enums::ecosystem::Ecosystem;
use crate::enums::probe_status::ProbeStatus;
use crate::enums::vulnerability_severity::VulnerabilitySeverity;
use crate::errors::{ArchaeologistError, ArchaeologistResult};
use crate::structs::cve_analysis::{CveAnalysis, SeverityCounts, Vulnerability};
use crate::structs::dependency::Dependency;

const REQUIREMENTS_PATTERN: &str = r"^([a-zA-Z0-9\-_]+)([>=<]+)([0-9.]+)";
const GEMFILE_PATTERN: &str = r#"^\s*gem\s+['"]([^'"]+)['"].*?['"]([0-9.]+)['"]"#;
const POM_DEPENDENCY_PATTERN: &str = r"(?s)<dependency>(.*?)</dependency>";
const POM_ARTIFACT_PATTERN: &str = r"<artifactId>\s*([^<\s]+)\s*</artifactId>";
const POM_VERSION_PATTERN: &str = r"<version>\s*([^<\s]+)\s*</version>";

struct KnownVulnerability {
    package: &'static str,
    version: &'static str,
    cve_id: &'static str,
    severity: VulnerabilitySeverity,
    description: &'static str,
}

/// Static lookup table standing in for a vulnerability database.
const KNOWN_VULNERABILITIES: &[KnownVulnerability] = &[
    KnownVulnerability {
        package: "requests",
        version: "2.25.0",
        cve_id: "CVE-2021-DEMO",
        severity: VulnerabilitySeverity::High,
        description: "Demonstration vulnerability",
    },
    KnownVulnerability {
        package: "django",
        version: "2.2.0",
        cve_id: "CVE-2020-DEMO",
        severity: VulnerabilitySeverity::Critical,
        description: "Demonstration SQL injection",
    },
];

type ManifestParser = fn(&str) -> ArchaeologistResult<Vec<Dependency>>;

const MANIFESTS: &[(&str, ManifestParser)] = &[
    ("requirements.txt", parse_requirements),
    ("package.json", parse_package_json),
    ("Gemfile", parse_gemfile),
    ("pom.xml", parse_pom_xml),
    ("Cargo.toml", parse_cargo_toml),
];

pub struct DependencyScanner;

impl DependencyScanner {

    /// The API key is accepted for a future database lookup; no network call is made.
    pub fn scan(repo_path: &Path, _api_key: Option<&str>) -> CveAnalysis {
        if !repo_path.is_dir() {
            log::warn!("⚠️ Dependency probe: {} is not a directory", repo_path.display());
            return CveAnalysis::failed(&format!("Scan failed: {} is not a directory", repo_path.display()));
        }

        let dependencies = Self::collect_dependencies(repo_path);
        if dependencies.is_empty() {
            log::debug!("📭 No dependency manifests found in {}", repo_path.display());
            return CveAnalysis::no_dependencies();
        }

        let vulnerabilities = check_vulnerabilities(&dependencies);
        log::debug!("🛡️ {} dependencies scanned, {} vulnerable", dependencies.len(), vulnerabilities.len());

        CveAnalysis {
            severity_counts: SeverityCounts::from_vulnerabilities(&vulnerabilities),
            vulnerabilities,
            total_dependencies: dependencies.len(),
            status: ProbeStatus::Completed,
            scanned_at: Some(Utc::now()),
            error: None,
        }
    }

    fn collect_dependencies(repo_path: &Path) -> Vec<Dependency> {
        let mut dependencies = Vec::new();

        for (file_name, parser) in MANIFESTS {
            let manifest_path = repo_path.join(file_name);
            if !manifest_path.is_file() {
                continue;
            }

            let parsed = fs::read_to_string(&manifest_path)
                .map_err(ArchaeologistError::from)
                .and_then(|content| parser(&content));

            match parsed {
                Ok(found) => dependencies.extend(found),
                Err(e) => log::warn!("⚠️ Skipping unparseable manifest {}: {}", manifest_path.display(), e),
            }
        }

        dependencies
    }
}

pub fn check_vulnerabilities(dependencies: &[Dependency]) -> Vec<Vulnerability> {
    dependencies
        .iter()
        .filter_map(|dependency| {
            let name = dependency.name.to_lowercase();
            KNOWN_VULNERABILITIES
                .iter()
                .find(|known| known.package == name && known.version == dependency.version)
                .map(|known| Vulnerability {
                    package: name.clone(),
                    version: dependency.version.clone(),
                    ecosystem: dependency.ecosystem,
                    cve_id: known.cve_id.to_string(),
                    severity: known.severity,
                    description: known.description.to_string(),
                })
        })
        .collect()
}

pub fn parse_requirements(content: &str) -> ArchaeologistResult<Vec<Dependency>> {
    let pattern = Regex::new(REQUIREMENTS_PATTERN)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| pattern.captures(line))
        .map(|caps| Dependency::new(&caps[1], &caps[3], Ecosystem::Pypi))
        .collect())
}

pub fn parse_package_json(content: &str) -> ArchaeologistResult<Vec<Dependency>> {
    let manifest: serde_json::Value = serde_json::from_str(content)?;
    let mut dependencies = Vec::new();

    for section in ["dependencies", "devDependencies"] {
        let Some(entries) = manifest.get(section).and_then(|v| v.as_object()) else {
            continue;
        };
        for (name, version) in entries {
            let version = version.as_str().unwrap_or_default().trim_start_matches(['^', '~']);
            dependencies.push(Dependency::new(name, version, Ecosystem::Npm));
        }
    }

    Ok(dependencies)
}

pub fn parse_gemfile(content: &str) -> ArchaeologistResult<Vec<Dependency>> {
    let pattern = Regex::new(GEMFILE_PATTERN)?;

    Ok(content
        .lines()
        .filter_map(|line| pattern.captures(line))
        .map(|caps| Dependency::new(&caps[1], &caps[2], Ecosystem::Rubygems))
        .collect())
}

/// Reads `<dependency>` blocks that pin an explicit version.
pub fn parse_pom_xml(content: &str) -> ArchaeologistResult<Vec<Dependency>> {
    let block_pattern = Regex::new(POM_DEPENDENCY_PATTERN)?;
    let artifact_pattern = Regex::new(POM_ARTIFACT_PATTERN)?;
    let version_pattern = Regex::new(POM_VERSION_PATTERN)?;

    Ok(block_pattern
        .captures_iter(content)
        .filter_map(|block| {
            let body = block.get(1)?.as_str();
            let artifact = artifact_pattern.captures(body)?;
            let version = version_pattern.captures(body)?;
            Some(Dependency::new(&artifact[1], &version[1], Ecosystem::Maven))
        })
        .collect())
}

pub fn parse_cargo_toml(content: &str) -> ArchaeologistResult<Vec<Dependency>> {
    let manifest: toml::Value = toml::from_str(content)?;
    let mut dependencies = Vec::new();

    for section in ["dependencies", "dev-dependencies"] {
        let Some(entries) = manifest.get(section).and_then(|v| v.as_table()) else {
            continue;
        };
        for (name, requirement) in entries {
            let version = match requirement {
                toml::Value::String(version) => Some(version.as_str()),
                toml::Value::Table(table) => table.get("version").and_then(|v| v.as_str()),
                _ => None,
            };
            if let Some(version) = version {
                let version = version.trim_start_matches(['^', '~', '=']);
                dependencies.push(Dependency::new(name, version, Ecosystem::Crates));
            }
        }
    }

    Ok(dependencies)
}
