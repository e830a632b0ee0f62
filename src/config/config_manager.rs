use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, MAX_GIT_LOOKBACK_DAYS};
use crate::errors::{ArchaeologistError, ArchaeologistResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_location() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// An explicit path must exist; the home-directory file is optional.
    pub fn load(explicit_path: Option<&Path>) -> ArchaeologistResult<Config> {
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(ArchaeologistError::config_file_error(
                    &path.display().to_string(),
                    "file does not exist",
                ));
            }
            return Self::load_from(path);
        }

        match Self::default_location() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                log::debug!("📋 No configuration file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> ArchaeologistResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| ArchaeologistError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        let config: Config = toml::from_str(&content)?;
        Self::validate_config(&config)?;
        Ok(config)
    }

    pub fn validate_config(config: &Config) -> ArchaeologistResult<()> {
        if config.probes.git_lookback_days == 0 {
            return Err(ArchaeologistError::config_error(
                "git lookback window must be at least one day",
                Some("probes.git_lookback_days"),
                Some("Use the default of 90 days"),
            ));
        }

        if config.probes.git_lookback_days > MAX_GIT_LOOKBACK_DAYS {
            return Err(ArchaeologistError::config_error(
                &format!("git lookback window may not exceed {} days", MAX_GIT_LOOKBACK_DAYS),
                Some("probes.git_lookback_days"),
                Some("Use the default of 90 days"),
            ));
        }

        if config.ai.max_output_tokens == 0 || config.ai.judge_max_output_tokens == 0 {
            return Err(ArchaeologistError::config_error(
                "generation calls need a positive output token bound",
                Some("ai.max_output_tokens"),
                None,
            ));
        }

        if config.sessions.max_sessions == 0 {
            log::warn!("⚠️ sessions.max_sessions is 0, the store will keep a single session");
        }

        if matches!(config.probes.probe_timeout_secs, Some(0)) {
            return Err(ArchaeologistError::config_error(
                "probe timeout must be positive",
                Some("probes.probe_timeout_secs"),
                Some("Remove the key to wait without a limit"),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[probes]\ngit_lookback_days = 30\n\n[memory]\nstorage_path = \"/tmp/memory.json\"").unwrap();

        let config = ConfigManager::load(Some(file.path())).unwrap();

        assert_eq!(config.probes.git_lookback_days, 30);
        assert_eq!(config.probes.probe_timeout_secs, Some(300));
        assert_eq!(config.ai.judge_max_output_tokens, 2000);
        assert_eq!(config.sessions.max_sessions, 100);
        assert_eq!(config.memory.storage_path, Some(PathBuf::from("/tmp/memory.json")));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = ConfigManager::load(Some(Path::new("/definitely/not/here.toml")));
        assert!(matches!(result, Err(ArchaeologistError::ConfigurationFileError { .. })));
    }

    #[test]
    fn zero_lookback_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[probes]\ngit_lookback_days = 0").unwrap();

        let result = ConfigManager::load(Some(file.path()));
        assert!(matches!(result, Err(ArchaeologistError::ConfigurationError { .. })));
    }

    #[test]
    fn lookback_is_capped_at_a_century() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[probes]\ngit_lookback_days = 100000000").unwrap();
        let result = ConfigManager::load(Some(file.path()));
        assert!(matches!(
            result,
            Err(ArchaeologistError::ConfigurationError { field: Some(ref field), .. }) if field == "probes.git_lookback_days"
        ));

        let mut config = Config::default();
        config.probes.git_lookback_days = MAX_GIT_LOOKBACK_DAYS;
        assert!(ConfigManager::validate_config(&config).is_ok());
    }
}
