//! Command-line interface for sales-batch
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate today's batch (1200 rows per branch)
//! sales-batch generate
//!
//! # Reproducible batch for a fixed date
//! sales-batch generate --batch-date 2024-03-07 --seed 42 --rows 50
//!
//! # Generate and upload to ADLS Gen2
//! sales-batch run
//!
//! # Upload an existing batch
//! sales-batch upload --manifest realistic_sales_data/2024-03-07/manifest.json
//!
//! # Dry run against a local directory
//! sales-batch run --local-target ./lake
//! ```

use clap::{Parser, Subcommand};
use sales_batch::{build_uploaders, run_generate, run_upload, UploadOpts};
use sales_core::Manifest;
use sales_csv::GenerateArgs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sales-batch")]
#[command(about = "Generate daily branch sales files and upload them to the data lake")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the three branch files and the manifest
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Upload the files listed in an existing manifest
    Upload {
        /// Path to manifest.json
        #[arg(long)]
        manifest: PathBuf,

        #[command(flatten)]
        upload: UploadOpts,
    },

    /// Generate a batch, then upload it
    Run {
        #[command(flatten)]
        args: GenerateArgs,

        #[command(flatten)]
        upload: UploadOpts,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            let outcome = run_generate(&args)?;
            println!("{}", outcome.manifest_path.display());
        }
        Commands::Upload { manifest, upload } => {
            let manifest = Manifest::from_file(&manifest)?;
            let uploaders = build_uploaders(&upload)?;
            run_upload(&manifest, &uploaders).await?;
        }
        Commands::Run { args, upload } => {
            // Sessions are built first so missing credentials fail before any file is written.
            let uploaders = build_uploaders(&upload)?;
            let outcome = run_generate(&args)?;
            run_upload(&outcome.manifest, &uploaders).await?;
        }
    }

    Ok(())
}
