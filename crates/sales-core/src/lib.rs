//! Core types shared by the sales batch crates.
//!
//! This crate provides:
//! - [`Branch`] and [`BranchSchema`]: the three regional branches and the
//!   column layout each one uses for the same sale event
//! - [`SaleValue`] and [`SaleRow`]: generated values, in schema column order
//! - [`ReferenceData`]: product prices, payment methods and customer names
//! - [`Manifest`]: the JSON document describing a written batch
//!
//! # Branch schemas
//!
//! ```text
//! North: SaleID        SaleDate        (YYYY-MM-DD) ...  CreatedAt
//! South: TransactionID TransactionDate (MM/DD/YYYY) ...  RecordCreatedAt   SourceSystem
//! West:  order_id      order_date      (MM-DD-YYYY) ...  created_timestamp discount
//! ```

pub mod branch;
pub mod manifest;
pub mod reference;
pub mod values;

pub use branch::{Branch, BranchSchema, ColumnNames, ExtraColumn, ExtraField, Field, IdType};
pub use manifest::{BranchMap, Manifest, ManifestError, EXPECTED_FILES, MANIFEST_FILE_NAME};
pub use reference::{ReferenceData, ReferenceError};
pub use values::{SaleRow, SaleValue};

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Civil timezone all batch dates and creation timestamps are bound to.
pub const CIVIL_TIMEZONE: Tz = chrono_tz::Asia::Kolkata;

/// Format used for batch dates in directory names, file names and the manifest.
pub const BATCH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's calendar date in [`CIVIL_TIMEZONE`].
pub fn today() -> NaiveDate {
    Utc::now().with_timezone(&CIVIL_TIMEZONE).date_naive()
}

/// Render a batch date as `YYYY-MM-DD`.
pub fn format_batch_date(date: NaiveDate) -> String {
    date.format(BATCH_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_batch_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_batch_date(date), "2024-03-07");
    }
}
