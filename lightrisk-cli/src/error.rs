//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use lightrisk::config::ConfigFileError;
use lightrisk::ingest::IngestError;
use lightrisk::AnalysisError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Analysis failed
    Analysis(AnalysisError),
    /// Failed to write output file
    FileWrite { path: String, error: std::io::Error },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        let hints = self.hints();
        if !hints.is_empty() {
            eprintln!();
            for line in hints {
                eprintln!("{}", line);
            }
        }

        process::exit(1)
    }

    /// Follow-up advice printed after the error message.
    fn hints(&self) -> &'static [&'static str] {
        match self {
            CliError::Analysis(AnalysisError::NoHabitatData) => &[
                "No habitat layer could be loaded. Check that:",
                "  1. [data] directory points at the folder holding the CSV exports",
                "  2. At least one habitat file has a SHAPE column",
                "  3. Run 'lightrisk config show' to see the resolved file names",
            ],
            CliError::Analysis(AnalysisError::Ingest(IngestError::NotFound(_))) => {
                &["The roadkill file is required. Set [data] roadkill or pass --data-dir."]
            }
            CliError::Analysis(AnalysisError::InvalidConfig(_)) => &[
                "Check the --threshold, --check-distance and --street-buffer values",
                "and the [analysis] and [study_area] sections of the config file.",
            ],
            CliError::Config(_) => {
                &["Run 'lightrisk config init --force' to write a fresh default file."]
            }
            _ => &[],
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Analysis(e) => write!(f, "Analysis failed: {}", e),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Analysis(e) => Some(e),
            CliError::FileWrite { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<AnalysisError> for CliError {
    fn from(e: AnalysisError) -> Self {
        match e {
            AnalysisError::Config(e) => CliError::Config(e.to_string()),
            other => CliError::Analysis(other),
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameters_keep_their_own_hint() {
        let err = CliError::from(AnalysisError::InvalidConfig(
            "habitat threshold must be a positive number of meters, got -5".to_string(),
        ));

        assert!(matches!(
            err,
            CliError::Analysis(AnalysisError::InvalidConfig(_))
        ));
        assert!(err.hints().iter().any(|h| h.contains("--threshold")));
        assert!(!err.hints().iter().any(|h| h.contains("config init")));
    }

    #[test]
    fn test_config_file_errors_suggest_init() {
        let err = CliError::from(ConfigFileError::WriteError("disk full".to_string()));
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.hints().iter().any(|h| h.contains("config init --force")));
    }

    #[test]
    fn test_no_habitat_hint() {
        let err = CliError::from(AnalysisError::NoHabitatData);
        assert!(err.to_string().contains("habitat"));
        assert!(!err.hints().is_empty());
    }
}
