//! Error type for the analysis pipeline.
//!
//! Malformed table rows are never errors (they are skipped during parsing),
//! and an empty dataset is a valid state rather than a failure. What is left
//! here are the conditions that abort a run.

use std::fmt;
use std::path::PathBuf;

/// Result alias used across the crate
pub type Result<T, E = AnalysisError> = std::result::Result<T, E>;

/// Error type for pipeline operations
#[derive(Debug)]
pub enum AnalysisError {
    /// Source table file is absent or unreadable
    MissingInput {
        path: PathBuf,
        reason: String,
    },
    /// Category tables file is unreadable or has an invalid layout
    Config(String),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    YamlError(serde_yaml::Error),
}

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        AnalysisError::IoError(err)
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::JsonError(err)
    }
}

impl From<serde_yaml::Error> for AnalysisError {
    fn from(err: serde_yaml::Error) -> Self {
        AnalysisError::YamlError(err)
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::MissingInput { path, reason } => {
                write!(f, "Input file {} could not be read: {}", path.display(), reason)
            }
            AnalysisError::Config(msg) => write!(f, "Config error: {}", msg),
            AnalysisError::IoError(e) => write!(f, "IO error: {}", e),
            AnalysisError::JsonError(e) => write!(f, "JSON error: {}", e),
            AnalysisError::YamlError(e) => write!(f, "YAML error: {}", e),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::IoError(e) => Some(e),
            AnalysisError::JsonError(e) => Some(e),
            AnalysisError::YamlError(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_display() {
        let err = AnalysisError::MissingInput {
            path: PathBuf::from("by_district/all.md"),
            reason: "No such file or directory".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("by_district/all.md"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AnalysisError = io.into();

        assert!(matches!(err, AnalysisError::IoError(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
