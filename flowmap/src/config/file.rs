//! Reading and writing `~/.flowmap/config.ini`.
//!
//! A missing file is not an error: every setting has a default, so a fresh
//! install renders maps without running `flowmap init` first.

use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption};
use thiserror::Error;
use tracing::debug;

use super::settings::ConfigFile;

const CONFIG_DIR_NAME: &str = ".flowmap";
const CONFIG_FILE_NAME: &str = "config.ini";

#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// The INI file exists but could not be read or tokenized.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// A setting parsed but failed validation.
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Reads the user's config file, falling back to defaults when absent.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file_opt(path, raw_values())?;
        let config = super::parser::parse_ini(&ini)?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Writes the user's config file, creating `~/.flowmap` if needed.
    pub fn save(&self) -> Result<(), ConfigFileError> {
        self.save_to(&config_file_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(ConfigFileError::DirectoryError)?;
        }

        std::fs::write(path, super::writer::to_config_string(self))
            .map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }
}

/// Values are read back exactly as the writer emits them: no quote
/// stripping and no backslash escapes.
fn raw_values() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    }
}

/// `~/.flowmap`, or `./.flowmap` when no home directory is known.
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

pub fn config_file_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}
