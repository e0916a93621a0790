//! # Library Manager Module
//!
//! ## Purpose
//! Keeps the location of the element reference dataset and the log level in one place,
//! so the binary and the examples never hardcode the path.
//!
//! ## Architecture
//! - **LibraryConfig**: Serializable configuration structure
//! - **LibraryManager**: Core manager with file validation and persistence
//! - **Global Access**: `OnceLock<Mutex<LibraryManager>>` with closure accessors
//! - **Configuration File**: balancer_config.json in the working directory
//!
//! ## Configuration Format
//! ```json
//! {
//!   "elements_base": "data/elements_base.json",
//!   "log_level": "info"
//! }
//! ```
//!
//! ## Usage
//! ```rust
//! use ChemBalance::library_manager::with_library_manager;
//!
//! let path = with_library_manager(|manager| manager.elements_base_path().to_string());
//! assert!(path.ends_with(".json"));
//! ```

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, OnceLock};

const CONFIG_FILE: &str = "balancer_config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// JSON array of element rows
    pub elements_base: String,
    /// one of off, error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            elements_base: "data/elements_base.json".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LibraryManager {
    config: LibraryConfig,
    config_file: String,
}

impl LibraryManager {
    /// Loads balancer_config.json from the working directory, defaults if absent or invalid
    pub fn new() -> Self {
        Self::with_config_file(CONFIG_FILE)
    }

    pub fn with_config_file(config_file: &str) -> Self {
        let config = Self::load_config(config_file).unwrap_or_default();
        Self {
            config,
            config_file: config_file.to_string(),
        }
    }

    fn load_config(config_file: &str) -> Result<LibraryConfig, Box<dyn std::error::Error>> {
        if Path::new(config_file).exists() {
            let content = fs::read_to_string(config_file)?;
            let config: LibraryConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(LibraryConfig::default())
        }
    }

    /// Writes the configuration back to its file. Does nothing under test
    pub fn save_config(&self) -> Result<(), Box<dyn std::error::Error>> {
        #[cfg(test)]
        {
            return Ok(());
        }

        #[cfg(not(test))]
        {
            let content = serde_json::to_string_pretty(&self.config)?;
            fs::write(&self.config_file, content)?;
            Ok(())
        }
    }

    pub fn elements_base_path(&self) -> &str {
        &self.config.elements_base
    }

    /// log level from the configuration, `Info` if the name is not recognised
    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.config.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    /// Switches to another element dataset. The file must exist
    pub fn set_elements_base(&mut self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        if Path::new(path).exists() {
            self.config.elements_base = path.to_string();
            self.save_config()?;
            Ok(())
        } else {
            Err(format!("File does not exist: {}", path).into())
        }
    }

    pub fn set_log_level(&mut self, level: &str) -> Result<(), Box<dyn std::error::Error>> {
        LevelFilter::from_str(level).map_err(|_| format!("Unknown log level: {}", level))?;
        self.config.log_level = level.to_lowercase();
        self.save_config()?;
        Ok(())
    }

    pub fn get_config(&self) -> &LibraryConfig {
        &self.config
    }

    pub fn reset_to_defaults(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.config = LibraryConfig::default();
        self.save_config()?;
        Ok(())
    }
}

impl Default for LibraryManager {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_LIBRARY_MANAGER: OnceLock<Mutex<LibraryManager>> = OnceLock::new();

/// Guard over the process-wide manager. A poisoned lock is recovered, the config has no invariants
/// a panicking holder could break
pub fn get_library_manager() -> MutexGuard<'static, LibraryManager> {
    GLOBAL_LIBRARY_MANAGER
        .get_or_init(|| Mutex::new(LibraryManager::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Executes a closure with read-only access to the LibraryManager.
pub fn with_library_manager<F, R>(f: F) -> R
where
    F: FnOnce(&LibraryManager) -> R,
{
    let manager = get_library_manager();
    f(&manager)
}

/// Executes a closure with mutable access to the LibraryManager.
pub fn with_library_manager_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut LibraryManager) -> R,
{
    let mut manager = get_library_manager();
    f(&mut manager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_config_file() {
        let manager = LibraryManager::with_config_file("no_such_balancer_config.json");
        assert_eq!(manager.elements_base_path(), "data/elements_base.json");
        assert_eq!(manager.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_library_manager_with_config() {
        let mut temp_config = NamedTempFile::new().unwrap();
        let config = LibraryConfig {
            elements_base: "other_elements.json".to_string(),
            log_level: "debug".to_string(),
        };
        temp_config
            .write_all(serde_json::to_string_pretty(&config).unwrap().as_bytes())
            .unwrap();

        let manager = LibraryManager::with_config_file(temp_config.path().to_str().unwrap());
        assert_eq!(manager.get_config(), &config);
        assert_eq!(manager.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let mut temp_config = NamedTempFile::new().unwrap();
        temp_config.write_all(b"{ not json").unwrap();
        let manager = LibraryManager::with_config_file(temp_config.path().to_str().unwrap());
        assert_eq!(manager.get_config(), &LibraryConfig::default());
    }

    #[test]
    fn test_setters_validate() {
        let temp_config = NamedTempFile::new().unwrap();
        let mut elements = NamedTempFile::new().unwrap();
        elements.write_all(b"[]").unwrap();

        let mut manager = LibraryManager::with_config_file(temp_config.path().to_str().unwrap());
        assert!(manager.set_elements_base("missing_elements.json").is_err());
        assert_eq!(manager.elements_base_path(), "data/elements_base.json");

        let path = elements.path().to_str().unwrap();
        manager.set_elements_base(path).unwrap();
        assert_eq!(manager.elements_base_path(), path);

        assert!(manager.set_log_level("loud").is_err());
        manager.set_log_level("WARN").unwrap();
        assert_eq!(manager.log_level(), LevelFilter::Warn);

        manager.reset_to_defaults().unwrap();
        assert_eq!(manager.get_config(), &LibraryConfig::default());
    }

    #[test]
    fn test_global_manager() {
        let path = with_library_manager(|manager| manager.elements_base_path().to_string());
        assert!(path.ends_with(".json"));
    }
}
