//! Daily sales batch writer.
//!
//! This crate writes one batch per calendar date: a directory named after the
//! date holding one CSV file per branch and a `manifest.json`.
//!
//! # Example
//!
//! ```ignore
//! use sales_csv::BatchWriter;
//! use sales_core::ReferenceData;
//! use sales_generator::{BusinessWindow, SalesGenerator};
//!
//! let generator = SalesGenerator::new(ReferenceData::builtin(), BusinessWindow::default(), 42);
//! let mut writer = BatchWriter::new("/data/sales", generator).with_rows(1200);
//!
//! // Fails with BatchError::AlreadyGenerated if /data/sales/<date> exists
//! let outcome = writer.write_batch(date)?;
//! println!("{}", outcome.manifest_path.display());
//! ```

pub mod args;
mod error;
mod value;
mod writer;

pub use args::GenerateArgs;
pub use error::BatchError;
pub use value::{sale_row_to_csv_record, CsvValue};
pub use writer::{BatchOutcome, BatchWriter, WriteMetrics, DEFAULT_BUFFER_SIZE, DEFAULT_ROWS};
