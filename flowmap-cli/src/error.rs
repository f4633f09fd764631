//! Errors surfaced to the terminal, with a hint line for the common mistakes.

use std::fmt;
use std::process;

use flowmap::config::ConfigFileError;
use flowmap::scenario::ScenarioError;
use flowmap::{ExportError, RenderError};

#[derive(Debug)]
pub enum CliError {
    LoggingInit(String),
    /// Unreadable or invalid config file, or a rejected `config set`.
    Config(String),
    Scenario(ScenarioError),
    /// Scenario data that cannot be drawn.
    Render(RenderError),
    Export(ExportError),
    Stdout(std::io::Error),
}

impl CliError {
    /// Prints the error and any hint to stderr, then exits with status 1.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Scenario(ScenarioError::Parse { .. }) => {
                eprintln!();
                eprintln!("A scenario file is a JSON object with at least:");
                eprintln!("  \"centers\": [[lon, lat], ...]");
                eprintln!("and optionally \"stores\", \"lanes\", \"demand\" and \"costs\".");
            }
            CliError::Render(RenderError::InvalidReference { .. }) => {
                eprintln!();
                eprintln!("Each store's \"warehouse\" must be a zero-based index into \"centers\".");
            }
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Use 'flowmap config list' to see available keys and current values.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Scenario(e) => write!(f, "{}", e),
            CliError::Render(e) => write!(f, "Cannot render scenario: {}", e),
            CliError::Export(e) => write!(f, "{}", e),
            CliError::Stdout(e) => write!(f, "Failed to write output: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Scenario(e) => Some(e),
            CliError::Render(e) => Some(e),
            CliError::Export(e) => Some(e),
            CliError::Stdout(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<ScenarioError> for CliError {
    fn from(e: ScenarioError) -> Self {
        CliError::Scenario(e)
    }
}

impl From<RenderError> for CliError {
    fn from(e: RenderError) -> Self {
        CliError::Render(e)
    }
}

impl From<ExportError> for CliError {
    fn from(e: ExportError) -> Self {
        CliError::Export(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_message() {
        let err = CliError::from(RenderError::LengthMismatch {
            facilities: 3,
            demand: 2,
        });
        assert_eq!(
            err.to_string(),
            "Cannot render scenario: Got demand for 2 facilities but 3 facility centers"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_config_error_has_no_source() {
        let err = CliError::Config("bad".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad");
        assert!(std::error::Error::source(&err).is_none());
    }
}
