//! `flowmap config` - inspect and edit `~/.flowmap/config.ini` by key.
//!
//! Keys use `section.key` form (`view.zoom`, `flows.types`). Values are
//! validated before the file is rewritten, and the Mapbox token is never
//! echoed back.

use clap::Subcommand;
use flowmap::config::{config_file_path, ConfigFile, ConfigKey, ConfigKeyError};

use crate::error::CliError;

const UNSET: &str = "(not set)";
const MASKED: &str = "(set)";

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one setting
    Get {
        /// Setting in section.key form, e.g. view.zoom
        key: String,
    },

    /// Change one setting and save the file
    Set {
        /// Setting in section.key form, e.g. flows.types
        key: String,

        /// New value
        value: String,
    },

    /// Print every setting grouped by section
    List,

    /// Print the location of the config file
    Path,
}

pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Get { key } => {
            let key = parse_key(&key)?;
            let config = ConfigFile::load()?;
            println!("{}", display_value(key, &config, false));
        }
        ConfigCommands::Set { key, value } => {
            let key = parse_key(&key)?;
            let mut config = ConfigFile::load()?;
            key.set(&mut config, &value).map_err(key_error)?;
            config.save()?;
            println!("Set {} = {}", key.name(), display_value(key, &config, true));
        }
        ConfigCommands::List => list(&ConfigFile::load()?),
        ConfigCommands::Path => println!("{}", config_file_path().display()),
    }
    Ok(())
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(key_error)
}

fn key_error(e: ConfigKeyError) -> CliError {
    CliError::Config(e.to_string())
}

/// Value as shown to the user; secrets are masked when `mask_secrets` is set.
fn display_value(key: ConfigKey, config: &ConfigFile, mask_secrets: bool) -> String {
    let value = key.get(config);
    if value.is_empty() {
        UNSET.to_string()
    } else if mask_secrets && key.is_secret() {
        MASKED.to_string()
    } else {
        value
    }
}

fn list(config: &ConfigFile) {
    println!("Configuration Settings ({})", config_file_path().display());

    let mut section = "";
    for &key in ConfigKey::all() {
        if key.section() != section {
            section = key.section();
            println!();
            println!("[{}]", section);
        }
        println!("  {} = {}", key.key_name(), display_value(key, config, true));
    }
}
