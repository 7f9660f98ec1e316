//! Upload of batch files to the data lake.
//!
//! Each branch uploads with its own session (its own [`Uploader`]) into a
//! remote directory named after the branch:
//!
//! ```text
//! <container>/north/North_Sales_<D>.csv
//! <container>/south/South_Sales_<D>.csv
//! <container>/west/West_Sales_<D>.csv
//! ```
//!
//! # Uploader Types
//!
//! - **ADLS Gen2**: [`AdlsUploader`], REST calls authorised with a SAS token
//! - **Local**: [`LocalUploader`], copies into a directory on disk
//!
//! # Example
//!
//! ```ignore
//! use lake_upload::{upload_batch, AdlsUploader, BranchUploaders};
//!
//! let uploaders = BranchUploaders::new(
//!     Box::new(AdlsUploader::new("account", "landing", &north_sas)?),
//!     Box::new(AdlsUploader::new("account", "landing", &south_sas)?),
//!     Box::new(AdlsUploader::new("account", "landing", &west_sas)?),
//! );
//! upload_batch(&manifest, &uploaders).await?;
//! ```

mod adls;
mod local;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sales_core::{Branch, Manifest};
use std::path::Path;

pub use adls::AdlsUploader;
pub use local::LocalUploader;

/// Destination that accepts one file at a time.
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Upload `local_path` as `directory/file_name`, replacing any existing
    /// object with that name.
    async fn upload(&self, directory: &str, file_name: &str, local_path: &Path) -> Result<()>;

    /// Human readable description for logging
    fn describe(&self) -> String;
}

/// One uploader per branch.
pub struct BranchUploaders {
    north: Box<dyn Uploader>,
    south: Box<dyn Uploader>,
    west: Box<dyn Uploader>,
}

impl BranchUploaders {
    pub fn new(north: Box<dyn Uploader>, south: Box<dyn Uploader>, west: Box<dyn Uploader>) -> Self {
        Self { north, south, west }
    }

    pub fn get(&self, branch: Branch) -> &dyn Uploader {
        match branch {
            Branch::North => self.north.as_ref(),
            Branch::South => self.south.as_ref(),
            Branch::West => self.west.as_ref(),
        }
    }
}

/// Upload every branch file listed in `manifest`.
///
/// Branches are uploaded in order; the first failure stops the upload and is
/// returned as-is, with no retry.
pub async fn upload_batch(manifest: &Manifest, uploaders: &BranchUploaders) -> Result<()> {
    for branch in Branch::ALL {
        let uploader = uploaders.get(branch);
        let file_name = manifest.files_name.get(branch);
        let local_path = Path::new(manifest.files_path.get(branch));

        tracing::info!(
            "Uploading {} to {} ({})",
            local_path.display(),
            branch.key(),
            uploader.describe()
        );

        uploader
            .upload(branch.key(), file_name, local_path)
            .await
            .with_context(|| format!("Failed to upload {branch} file '{file_name}'"))?;
    }

    tracing::info!("Sales data for {} uploaded successfully", manifest.batch_date);
    Ok(())
}
