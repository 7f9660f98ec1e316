//! Synthetic sales record generator.
//!
//! This crate provides the `SalesGenerator`, which produces rows for any of
//! the three branch schemas from one shared synthesis routine. The generator
//! owns a seeded RNG, so the same seed, reference data and batch date always
//! yield the same rows.
//!
//! # Architecture
//!
//! ```text
//! ReferenceData + BusinessWindow + seed
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  SalesGenerator  │
//! │                  │
//! │  - pools         │
//! │  - rng (StdRng)  │
//! │  - index         │
//! └────────┬─────────┘
//!          │  BranchSchema (North / South / West)
//!          ▼
//!    SaleRow { branch, index, values }
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sales_core::{Branch, ReferenceData};
//! use sales_generator::{BusinessWindow, SalesGenerator};
//!
//! let mut generator = SalesGenerator::new(ReferenceData::builtin(), BusinessWindow::default(), 42);
//! let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
//! let rows: Vec<_> = generator.rows(Branch::South.schema(), date, 5).collect();
//! assert_eq!(rows.len(), 5);
//! ```
//!
//! # Defect injection
//!
//! Every pool mixes valid values with sentinels so the output looks like a
//! real, messy source system:
//!
//! - products: each ×20, plus null and empty string
//! - quantities: 2..=19 each ×100, plus -1, 0 and null
//! - customers: each ×10, plus null and empty string
//! - payment methods: each ×50, plus null
//! - identifiers: drawn from `[0, 10000)` and never deduplicated

pub mod generator;
pub mod generators;

pub use generator::{GeneratorError, SaleRowIterator, SalesGenerator};
pub use generators::pool::WeightedPool;
pub use generators::timestamp::BusinessWindow;
