//! Path resolution for pomopanel configuration and log files.
//!
//! All pomopanel files live in `~/.pomopanel/`:
//! - `config.yaml` - Startup settings
//! - `pomopanel.log` - Log output while the panel owns the terminal

use std::path::PathBuf;

use crate::error::PanelError;

/// Paths to pomopanel files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pomopanel/`
    pub root: PathBuf,
    /// Config file: `~/.pomopanel/config.yaml`
    pub config_file: PathBuf,
    /// Log file: `~/.pomopanel/pomopanel.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PanelError> {
        let home = std::env::var("HOME")
            .map_err(|_| PanelError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".pomopanel")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            log_file: root.join("pomopanel.log"),
            root,
        }
    }

    /// Paths rooted at the directory containing `config_file`.
    ///
    /// Used when the config file location is overridden on the command line,
    /// so the log lands next to it.
    #[must_use]
    pub fn for_config_file(config_file: PathBuf) -> Self {
        let root = config_file
            .parent()
            .map_or_else(|| PathBuf::from("."), std::path::Path::to_path_buf);
        Self {
            log_file: root.join("pomopanel.log"),
            config_file,
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PanelError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                PanelError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".pomopanel"))
        })
    }
}
