//! Sales batch library
//!
//! Generates one day of synthetic sales for three regional branches, each in
//! its own deliberately inconsistent CSV schema, and uploads the files to
//! Azure Data Lake Storage Gen2.
//!
//! # Crates
//!
//! - `sales_core` - branch schemas, values, reference data, manifest
//! - `sales_generator` - seeded record synthesis with defect injection
//! - `sales_csv` - exclusive batch directory, CSV files, manifest
//! - `lake_upload` - per-branch upload sessions (ADLS or local directory)
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate today's batch only
//! sales-batch generate --output-root ./realistic_sales_data
//!
//! # Generate and upload (credentials from the environment)
//! STORAGE_ACCOUNT_NAME=acct SHARED_CONTAINER_NAME=landing STORAGE_SAS_TOKEN=... \
//!   sales-batch run
//!
//! # Upload an existing batch again
//! sales-batch upload --manifest ./realistic_sales_data/2024-03-07/manifest.json
//! ```

pub mod generate;
pub mod upload;

pub use generate::{build_generator, run_generate};
pub use upload::{build_uploaders, run_upload, UploadOpts};
