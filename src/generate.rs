//! Batch generation command.

use anyhow::Context;
use sales_core::{format_batch_date, ReferenceData};
use sales_csv::{BatchOutcome, BatchWriter, GenerateArgs};
use sales_generator::{BusinessWindow, SalesGenerator};

/// Build the generator described by `args`.
///
/// Without `--seed` a random seed is drawn. The caller logs it so the batch
/// can be reproduced.
pub fn build_generator(args: &GenerateArgs) -> anyhow::Result<SalesGenerator> {
    let reference = match &args.reference_data {
        Some(path) => ReferenceData::from_file(path)
            .with_context(|| format!("Failed to load reference data from {path:?}"))?,
        None => ReferenceData::builtin(),
    };

    let window = BusinessWindow::new(args.start_hour, args.end_hour)?;
    let seed = args.seed.unwrap_or_else(rand::random);

    Ok(SalesGenerator::new(reference, window, seed))
}

/// Generate and write the batch for the requested (or current) date.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<BatchOutcome> {
    let date = args.batch_date.unwrap_or_else(sales_core::today);
    let generator = build_generator(args)?;

    tracing::info!(
        "Generating sales data for {} (rows={}, window={}..{}, seed={})",
        format_batch_date(date),
        args.rows,
        args.start_hour,
        args.end_hour,
        generator.seed()
    );

    let mut writer = BatchWriter::new(&args.output_root, generator).with_rows(args.rows);
    let outcome = writer.write_batch(date)?;

    tracing::info!("manifest: {:?}", outcome.manifest);
    Ok(outcome)
}
