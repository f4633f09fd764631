//! Error types for rendering and export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning solved results into map layers.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    /// A store points at a facility that does not exist.
    #[error(
        "Store row {row} references facility {index}, but only {facility_count} facilities were supplied"
    )]
    InvalidReference {
        row: usize,
        index: usize,
        facility_count: usize,
    },

    /// The demand list does not line up with the facility list.
    #[error("Got demand for {demand} facilities but {facilities} facility centers")]
    LengthMismatch { facilities: usize, demand: usize },
}

/// Errors raised while writing a deck document.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The document could not be serialized
    #[error("Failed to serialize deck document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output file could not be written
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
