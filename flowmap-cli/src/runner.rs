//! Per-invocation setup shared by the rendering commands.

use std::io::Write;
use std::path::Path;

use flowmap::basemap::mapbox_credential;
use flowmap::config::ConfigFile;
use flowmap::deck::{Deck, OutputFormat};
use flowmap::logging::{init_logging, LoggingGuard};
use flowmap::MapRenderer;
use tracing::info;

use crate::error::CliError;

/// Loaded config plus the logging guard for one command run.
pub struct CliRunner {
    _logging_guard: LoggingGuard,
    config: ConfigFile,
}

impl CliRunner {
    /// Loads config and starts logging to the configured file.
    ///
    /// `--debug` also echoes log lines to stderr at debug level. Nothing is
    /// ever logged to stdout.
    pub fn with_debug(debug_mode: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let logging_guard = init_logging(&config.logging.file, debug_mode, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            _logging_guard: logging_guard,
            config,
        })
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    pub fn log_startup(&self, command: &str) {
        info!(version = flowmap::VERSION, command, "flowmap starting");
    }

    /// Resolve the Mapbox credential once and build the renderer.
    pub fn renderer(&self) -> MapRenderer {
        let credential = mapbox_credential(&self.config);
        MapRenderer::from_config(&self.config, credential)
    }

    /// Write a deck to `output`, or print its JSON to stdout.
    pub fn emit(&self, deck: &Deck, output: Option<&Path>, title: &str) -> Result<(), CliError> {
        match output {
            Some(path) => {
                let kind = match deck.write_to(path, title)? {
                    OutputFormat::Json => "deck.gl JSON",
                    OutputFormat::Html => "HTML",
                };
                println!("✓ Wrote {} map to {}", kind, path.display());
            }
            None => {
                let json = deck.to_json()?;
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", json).map_err(CliError::Stdout)?;
            }
        }
        Ok(())
    }
}
