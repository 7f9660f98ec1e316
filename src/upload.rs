//! Upload command: per-branch sessions against the data lake.

use anyhow::Context;
use clap::Args;
use lake_upload::{upload_batch, AdlsUploader, BranchUploaders, LocalUploader, Uploader};
use sales_core::{Branch, Manifest};
use std::path::PathBuf;

/// Data lake connection options
#[derive(Args, Clone, Debug, Default)]
pub struct UploadOpts {
    /// Storage account name
    #[arg(long, env = "STORAGE_ACCOUNT_NAME")]
    pub storage_account_name: Option<String>,

    /// Shared container (file system) receiving the branch directories
    #[arg(long, env = "SHARED_CONTAINER_NAME")]
    pub container: Option<String>,

    /// SAS token used by every branch without its own token
    #[arg(long, env = "STORAGE_SAS_TOKEN", hide_env_values = true)]
    pub sas_token: Option<String>,

    /// SAS token scoped to the north directory
    #[arg(long, env = "NORTH_DIRECTORY_SAS_TOKEN", hide_env_values = true)]
    pub north_sas_token: Option<String>,

    /// SAS token scoped to the south directory
    #[arg(long, env = "SOUTH_DIRECTORY_SAS_TOKEN", hide_env_values = true)]
    pub south_sas_token: Option<String>,

    /// SAS token scoped to the west directory
    #[arg(long, env = "WEST_DIRECTORY_SAS_TOKEN", hide_env_values = true)]
    pub west_sas_token: Option<String>,

    /// Override the DFS endpoint (default: https://<account>.dfs.core.windows.net)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Copy files into this directory instead of the data lake
    #[arg(long, value_name = "DIR", conflicts_with = "endpoint")]
    pub local_target: Option<PathBuf>,
}

impl UploadOpts {
    /// Token for `branch`, falling back to the shared token.
    pub fn sas_token_for(&self, branch: Branch) -> Option<&str> {
        let specific = match branch {
            Branch::North => &self.north_sas_token,
            Branch::South => &self.south_sas_token,
            Branch::West => &self.west_sas_token,
        };
        specific.as_deref().or(self.sas_token.as_deref())
    }
}

/// Create one upload session per branch.
///
/// Fails before any network traffic when a setting is missing.
pub fn build_uploaders(opts: &UploadOpts) -> anyhow::Result<BranchUploaders> {
    if let Some(root) = &opts.local_target {
        let session = || -> Box<dyn Uploader> { Box::new(LocalUploader::new(root.clone())) };
        return Ok(BranchUploaders::new(session(), session(), session()));
    }

    let account = opts
        .storage_account_name
        .as_deref()
        .context("STORAGE_ACCOUNT_NAME is not set (use --storage-account-name or --local-target)")?;
    let container = opts
        .container
        .as_deref()
        .context("SHARED_CONTAINER_NAME is not set (use --container)")?;

    let session = |branch: Branch| -> anyhow::Result<Box<dyn Uploader>> {
        let token = opts.sas_token_for(branch).with_context(|| {
            format!(
                "No SAS token for {branch}: set STORAGE_SAS_TOKEN or {}_DIRECTORY_SAS_TOKEN",
                branch.key().to_uppercase()
            )
        })?;
        let mut uploader = AdlsUploader::new(account, container, token)?;
        if let Some(endpoint) = &opts.endpoint {
            uploader = uploader.with_endpoint(endpoint)?;
        }
        Ok(Box::new(uploader))
    };

    Ok(BranchUploaders::new(
        session(Branch::North)?,
        session(Branch::South)?,
        session(Branch::West)?,
    ))
}

/// Upload every file listed in `manifest`.
pub async fn run_upload(manifest: &Manifest, uploaders: &BranchUploaders) -> anyhow::Result<()> {
    tracing::info!(
        "Uploading batch {} ({} files)",
        manifest.batch_date,
        manifest.expected_files
    );
    upload_batch(manifest, uploaders).await?;
    Ok(())
}
