//! Error types for the batch writer.

use thiserror::Error;

/// Errors that can occur while writing a batch.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The batch directory for this date already exists.
    #[error("Sales data for date: {date} already generated.")]
    AlreadyGenerated { date: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Manifest serialization error.
    #[error("Manifest error: {0}")]
    Manifest(#[from] sales_core::ManifestError),
}
