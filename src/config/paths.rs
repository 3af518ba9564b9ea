//! Path management for Teller
//!
//! Provides platform-appropriate path resolution for the data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag / `TELLER_DATA_DIR` environment variable (via clap)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/teller` or `~/.config/teller`
//! 3. Windows: `%APPDATA%\teller`

use std::path::PathBuf;

use crate::error::TellerError;

/// Manages all paths used by Teller
#[derive(Debug, Clone)]
pub struct TellerPaths {
    /// Base directory for all Teller data
    base_dir: PathBuf,
}

impl TellerPaths {
    /// Create a TellerPaths instance at the platform default location
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TellerError> {
        Ok(Self {
            base_dir: resolve_default_path()?,
        })
    }

    /// Create TellerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/teller/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/teller/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the ledger file
    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir().join("ledger.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), TellerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TellerError::Storage(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TellerError::Storage(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TellerError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME").map(|home| PathBuf::from(home).join(".config"))
        })
        .map_err(|_| {
            TellerError::Storage("Could not determine home directory".into())
        })?;
    Ok(config_base.join("teller"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TellerError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TellerError::Storage("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("teller"))
}
