//! CLI argument definitions for batch generation.

use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

/// Arguments controlling one batch generation run.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Root directory; each batch is written to <OUTPUT_ROOT>/<YYYY-MM-DD>
    #[arg(
        long,
        short = 'o',
        env = "SALES_OUTPUT_ROOT",
        default_value = "realistic_sales_data"
    )]
    pub output_root: PathBuf,

    /// Number of rows to generate per branch
    #[arg(long, env = "SALES_ROWS", default_value = "1200")]
    pub rows: u64,

    /// First hour of the business window (creation timestamps start here)
    #[arg(long, env = "SALES_START_HOUR", default_value = "9")]
    pub start_hour: u32,

    /// Last hour of the business window
    #[arg(long, env = "SALES_END_HOUR", default_value = "22")]
    pub end_hour: u32,

    /// Random seed for deterministic generation (same seed = same data).
    /// A fresh seed is drawn from the OS when omitted.
    #[arg(long, env = "SALES_SEED")]
    pub seed: Option<u64>,

    /// Batch date as YYYY-MM-DD (default: today in Asia/Kolkata)
    #[arg(long, value_name = "DATE")]
    pub batch_date: Option<NaiveDate>,

    /// YAML file replacing the builtin products, payment methods and customers
    #[arg(long, value_name = "PATH")]
    pub reference_data: Option<PathBuf>,
}
