//! User configuration stored in `~/.flowmap/config.ini`.
//!
//! The file is split by concern:
//!
//! - [`settings`](ConfigFile): one struct per `[section]`
//! - defaults: `DEFAULT_*` constants and `ConfigFile::default()`
//! - parser / writer: INI ↔ `ConfigFile`
//! - [`ConfigKey`]: `section.key` get/set with validation, used by the CLI
//!
//! # Example
//!
//! ```
//! use flowmap::config::{ConfigFile, ConfigKey};
//!
//! let mut config = ConfigFile::default();
//! ConfigKey::ViewZoom.set(&mut config, "5").unwrap();
//! assert_eq!(ConfigKey::ViewZoom.get(&config), "5");
//! ```

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::{DEFAULT_LOG_FILE_NAME, DEFAULT_SQFT_PER_LB, MAX_ZOOM};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{
    BasemapSettings, ConfigFile, FlowSettings, LoggingSettings, SummarySettings, ViewSettings,
};
