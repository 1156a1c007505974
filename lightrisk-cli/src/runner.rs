//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading and logging initialization so command
//! handlers only deal with their own work.

use std::path::{Path, PathBuf};

use lightrisk::config::{config_file_path, ConfigFile};
use lightrisk::logging::{init_logging, split_log_path, LoggingGuard};
use tracing::info;

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
    /// Where the configuration was read from
    config_path: PathBuf,
}

impl CliRunner {
    /// Create a runner, loading config and initializing logging.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Explicit config file, or `None` for ~/.lightrisk/config.ini
    /// * `debug_mode` - When true, enables debug-level logging regardless of RUST_LOG
    pub fn with_options(config_path: Option<&Path>, debug_mode: bool) -> Result<Self, CliError> {
        let config_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(config_file_path);

        // Missing file means defaults
        let config = ConfigFile::load_from(&config_path)?;

        let (log_dir, log_file) = split_log_path(&config.logging.file);
        let logging_guard = init_logging(&log_dir, &log_file, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
            config_path,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Mutable access for command-line overrides.
    pub fn config_mut(&mut self) -> &mut ConfigFile {
        &mut self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("LightRisk v{}", lightrisk::VERSION);
        info!("LightRisk CLI: {} command", command);
        if self.config_path.exists() {
            info!("Config: {}", self.config_path.display());
        } else {
            info!(
                "Config: {} not found, using defaults",
                self.config_path.display()
            );
        }
    }

    /// Write `content` to `path`.
    pub fn save_output(&self, path: &Path, content: &str) -> Result<(), CliError> {
        std::fs::write(path, content).map_err(|e| CliError::FileWrite {
            path: path.display().to_string(),
            error: e,
        })?;
        info!("Report written to {}", path.display());
        Ok(())
    }
}
