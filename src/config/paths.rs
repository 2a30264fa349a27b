//! Path management for corral
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `CORRAL_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/corral` or `~/.config/corral`
//! 3. Windows: `%APPDATA%\corral`

use std::path::PathBuf;

use crate::error::CorralError;

/// Manages all paths used by corral
#[derive(Debug, Clone)]
pub struct CorralPaths {
    /// Base directory for all corral data
    base_dir: PathBuf,
}

impl CorralPaths {
    /// Create a new CorralPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CorralError> {
        let base_dir = if let Ok(custom) = std::env::var("CORRAL_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CorralPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/corral/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/corral/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to animals.json
    pub fn animals_file(&self) -> PathBuf {
        self.data_dir().join("animals.json")
    }

    /// Get the path to customers.json
    pub fn customers_file(&self) -> PathBuf {
        self.data_dir().join("customers.json")
    }

    /// Get the path to rentals.json
    pub fn rentals_file(&self) -> PathBuf {
        self.data_dir().join("rentals.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), CorralError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CorralError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CorralError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CorralError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| CorralError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("corral"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CorralError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CorralError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("corral"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CorralPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CorralPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.animals_file(),
            temp_dir.path().join("data").join("animals.json")
        );
        assert_eq!(
            paths.rentals_file(),
            temp_dir.path().join("data").join("rentals.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CorralPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().exists());
    }
}
