//! Custom error types for the engine
//!
//! This module defines the export failure channel using thiserror for
//! ergonomic error definitions. The computation side of the engine is
//! total: categorization, status derivation, aggregation, and projection
//! never fail on well-formed input, so errors only surface from the export
//! pipeline. Per-model validation errors live beside their models.

use thiserror::Error;

/// Errors surfaced by the export pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The requested entity kind has no records to export
    #[error("No {0} data available to export")]
    NoDataAvailable(&'static str),

    /// The output sink could not be created or written
    #[error("Failed to create export file: {0}")]
    FileCreationFailed(String),

    /// A record could not be serialized; the whole document is abandoned
    #[error("Failed to process export data: {0}")]
    DataProcessingFailed(String),

    /// Another export is already running on this pipeline
    #[error("An export is already in progress")]
    ExportInProgress,
}

impl ExportError {
    /// Check if this is the busy signal
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::ExportInProgress)
    }

    /// Check if this error means there was nothing to export
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoDataAvailable(_))
    }
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;
