//! Local filesystem uploader

use crate::Uploader;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Copies files into `<root>/<directory>/<file_name>`.
///
/// Stands in for the data lake when running without storage credentials.
pub struct LocalUploader {
    root: PathBuf,
}

impl LocalUploader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl Uploader for LocalUploader {
    async fn upload(&self, directory: &str, file_name: &str, local_path: &Path) -> Result<()> {
        let target_dir = self.root.join(directory);
        tokio::fs::create_dir_all(&target_dir)
            .await
            .with_context(|| format!("Failed to create directory: {}", target_dir.display()))?;

        let target = target_dir.join(file_name);
        let bytes = tokio::fs::copy(local_path, &target).await.with_context(|| {
            format!(
                "Failed to copy {} to {}",
                local_path.display(),
                target.display()
            )
        })?;

        tracing::info!("Copied {} bytes to {}", bytes, target.display());
        Ok(())
    }

    fn describe(&self) -> String {
        format!("local {}", self.root.display())
    }
}
