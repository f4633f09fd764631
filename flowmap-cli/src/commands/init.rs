//! Init command - write a commented default configuration file.

use flowmap::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Run the init command.
///
/// An existing file is left alone unless `force` is set.
pub fn run(force: bool) -> Result<(), CliError> {
    let path = config_file_path();

    if path.exists() && !force {
        println!("Configuration file already exists: {}", path.display());
        println!("Use 'flowmap init --force' to overwrite it with defaults.");
        return Ok(());
    }

    ConfigFile::default().save_to(&path)?;

    println!("✓ Created configuration file: {}", path.display());
    println!();
    println!("Next steps:");
    println!("  flowmap config set basemap.mapbox_api_key <token>   (optional, enables Mapbox)");
    println!("  flowmap network --scenario scenario.json --output network.html");

    Ok(())
}
