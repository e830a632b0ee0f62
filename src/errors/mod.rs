use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};
use crate::enums::ai_provider_error::AiProviderError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ArchaeologistError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Probe errors, only ever surfaced inside a probe result
    ProbeError {
        probe: String,
        reason: String,
    },

    // Text generation errors, caught at each call site
    GenerationError {
        call_site: String,
        reason: String,
    },

    // Anything that escaped every phase boundary
    PipelineError {
        phase: String,
        reason: String,
    },

    // Snapshot and report persistence
    StorageError {
        path: String,
        operation: String,
        reason: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
        context: Option<String>,
    },

    // Network/API errors
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl ArchaeologistError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn probe_error(probe: &str, reason: &str) -> Self {
        Self::ProbeError {
            probe: probe.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn pipeline_error(phase: &str, reason: &str) -> Self {
        Self::PipelineError {
            phase: phase.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn storage_error(path: &str, operation: &str, reason: &str) -> Self {
        Self::StorageError {
            path: path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// One-line form used by the CLI; `Debug` carries the full diagnostic.
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!(" 💡 {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}", path, reason)
            }
            Self::ProbeError { probe, reason } => {
                format!("{} probe failed: {}", probe, reason)
            }
            Self::GenerationError { call_site, reason } => {
                format!("Text generation failed during {}: {}", call_site, reason)
            }
            Self::PipelineError { phase, reason } => {
                format!("Pipeline failed during {}: {}", phase, reason)
            }
            Self::StorageError { path, operation, reason } => {
                format!("Storage operation '{}' failed for '{}': {}", operation, path, reason)
            }
            Self::ParseError { content_type, line_number, reason, context } => {
                let mut msg = format!("Parse error in {}: {}", content_type, reason);
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {})", line));
                }
                if let Some(ctx) = context {
                    msg.push_str(&format!(" [{}]", ctx));
                }
                msg
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }

    pub fn with_context(self, context: &str) -> Self {
        match self {
            Self::SystemError { operation, reason } => Self::SystemError {
                operation: format!("{} -> {}", context, operation),
                reason,
            },
            Self::StorageError { path, operation, reason } => Self::StorageError {
                path,
                operation: format!("{} -> {}", context, operation),
                reason,
            },
            Self::PipelineError { phase, reason } => Self::PipelineError {
                phase,
                reason: format!("{}: {}", context, reason),
            },
            other => other,
        }
    }
}

impl fmt::Display for ArchaeologistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for ArchaeologistError {}

/// Result type alias for archaeologist operations
pub type ArchaeologistResult<T> = Result<T, ArchaeologistError>;

/// Extension trait for Result to add context
pub trait ResultExt<T> {
    fn with_context(self, context: &str) -> ArchaeologistResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<ArchaeologistError>,
{
    fn with_context(self, context: &str) -> ArchaeologistResult<T> {
        self.map_err(|e| e.into().with_context(context))
    }
}

impl From<std::io::Error> for ArchaeologistError {
    fn from(error: std::io::Error) -> Self {
        ArchaeologistError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ArchaeologistError {
    fn from(error: serde_json::Error) -> Self {
        ArchaeologistError::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
            context: None,
        }
    }
}

impl From<toml::de::Error> for ArchaeologistError {
    fn from(error: toml::de::Error) -> Self {
        ArchaeologistError::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
            context: None,
        }
    }
}

impl From<reqwest::Error> for ArchaeologistError {
    fn from(error: reqwest::Error) -> Self {
        ArchaeologistError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}

impl From<regex::Error> for ArchaeologistError {
    fn from(error: regex::Error) -> Self {
        ArchaeologistError::ParseError {
            content_type: "pattern".to_string(),
            line_number: None,
            reason: error.to_string(),
            context: None,
        }
    }
}

impl From<AiProviderError> for ArchaeologistError {
    fn from(error: AiProviderError) -> Self {
        ArchaeologistError::GenerationError {
            call_site: "text generation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<tokio::task::JoinError> for ArchaeologistError {
    fn from(error: tokio::task::JoinError) -> Self {
        ArchaeologistError::PipelineError {
            phase: "probing".to_string(),
            reason: format!("probe task failed to join: {}", error),
        }
    }
}
