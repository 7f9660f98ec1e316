//! Batch writer: exclusive batch directory, branch CSV files, manifest.

use crate::error::BatchError;
use crate::value::sale_row_to_csv_record;
use chrono::NaiveDate;
use csv::Writer;
use sales_core::{format_batch_date, Branch, BranchMap, BranchSchema, Manifest, MANIFEST_FILE_NAME};
use sales_generator::SalesGenerator;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Default number of rows per branch.
pub const DEFAULT_ROWS: u64 = 1200;

/// Metrics from writing one branch file.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating rows.
    pub generation_duration: Duration,
    /// Time spent serializing rows.
    pub write_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl WriteMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Result of a completed batch.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub batch_dir: PathBuf,
    pub manifest: Manifest,
    pub manifest_path: PathBuf,
    pub metrics: Vec<(Branch, WriteMetrics)>,
}

/// Writes one batch per calendar date under a root directory.
pub struct BatchWriter {
    root: PathBuf,
    generator: SalesGenerator,
    rows: u64,
}

impl BatchWriter {
    /// Create a batch writer producing [`DEFAULT_ROWS`] rows per branch.
    pub fn new(root: impl Into<PathBuf>, generator: SalesGenerator) -> Self {
        Self {
            root: root.into(),
            generator,
            rows: DEFAULT_ROWS,
        }
    }

    /// Set the number of rows written per branch.
    pub fn with_rows(mut self, rows: u64) -> Self {
        self.rows = rows;
        self
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn generator(&self) -> &SalesGenerator {
        &self.generator
    }

    /// Directory a batch for `date` is written to.
    pub fn batch_dir(&self, date: NaiveDate) -> PathBuf {
        self.root.join(format_batch_date(date))
    }

    /// Generate and write the batch for `date`.
    ///
    /// The batch directory is created first and must not exist; a second
    /// batch for the same date fails with [`BatchError::AlreadyGenerated`]
    /// before anything is generated. Branch files are written North, South,
    /// West, and the manifest only after all three succeed. A failure part
    /// way through leaves the files already written in place.
    pub fn write_batch(&mut self, date: NaiveDate) -> Result<BatchOutcome, BatchError> {
        let batch_dir = self.reserve_directory(date)?;
        info!(
            "Generating sales batch {} with {} rows per branch in '{}'",
            format_batch_date(date),
            self.rows,
            batch_dir.display()
        );

        let mut files_path = BranchMap::default();
        let mut files_name = BranchMap::default();
        let mut metrics = Vec::with_capacity(Branch::ALL.len());

        for branch in Branch::ALL {
            let file_name = branch.file_name(date);
            let path = batch_dir.join(&file_name);

            let branch_metrics = self.write_branch_file(branch.schema(), date, &path)?;
            info!("Created {}", path.display());

            files_path.insert(branch, path.to_string_lossy());
            files_name.insert(branch, file_name);
            metrics.push((branch, branch_metrics));
        }

        let manifest = Manifest::new(format_batch_date(date), files_path, files_name);
        let manifest_path = batch_dir.join(MANIFEST_FILE_NAME);
        fs::write(&manifest_path, manifest.to_json_pretty()?)?;
        info!("Created manifest {}", manifest_path.display());

        Ok(BatchOutcome {
            batch_dir,
            manifest,
            manifest_path,
            metrics,
        })
    }

    /// Atomically create the batch directory; an existing one means the
    /// batch was already generated.
    ///
    /// Returns the absolute path, so the manifest stays usable from any
    /// working directory.
    fn reserve_directory(&self, date: NaiveDate) -> Result<PathBuf, BatchError> {
        fs::create_dir_all(&self.root)?;

        let batch_dir = self.batch_dir(date);
        match fs::create_dir(&batch_dir) {
            Ok(()) => Ok(fs::canonicalize(&batch_dir)?),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(BatchError::AlreadyGenerated {
                    date: format_batch_date(date),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Generate rows for one branch schema and write them, with a header,
    /// to `output_path`.
    pub fn write_branch_file(
        &mut self,
        schema: &BranchSchema,
        date: NaiveDate,
        output_path: &Path,
    ) -> Result<WriteMetrics, BatchError> {
        let start_time = Instant::now();
        let mut metrics = WriteMetrics::default();

        debug!(
            "Writing {} rows for branch '{}' to '{}'",
            self.rows,
            schema.branch,
            output_path.display()
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = Writer::from_writer(buf_writer);

        writer.write_record(schema.column_names())?;

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        for _ in 0..self.rows {
            let gen_start = Instant::now();
            let row = self.generator.next_row(schema, date);
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            writer.write_record(sale_row_to_csv_record(row))?;
            write_time += write_start.elapsed();

            metrics.rows_written += 1;
        }

        writer.flush()?;
        drop(writer);

        metrics.file_size_bytes = fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        debug!(
            "Branch '{}' complete: {} rows, {} bytes in {:?} (generate {:?}, write {:?}, {:.2} rows/sec)",
            schema.branch,
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.generation_duration,
            metrics.write_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}
