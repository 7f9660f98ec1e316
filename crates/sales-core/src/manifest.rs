//! Batch manifest written next to the branch files.

use crate::branch::Branch;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Number of files in every complete batch.
pub const EXPECTED_FILES: usize = 3;

/// File name of the manifest inside a batch directory.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse manifest JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One string per branch, serialized as `{"north": .., "south": .., "west": ..}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchMap {
    pub north: String,
    pub south: String,
    pub west: String,
}

impl BranchMap {
    pub fn get(&self, branch: Branch) -> &str {
        match branch {
            Branch::North => &self.north,
            Branch::South => &self.south,
            Branch::West => &self.west,
        }
    }

    pub fn insert(&mut self, branch: Branch, value: impl Into<String>) {
        let slot = match branch {
            Branch::North => &mut self.north,
            Branch::South => &mut self.south,
            Branch::West => &mut self.west,
        };
        *slot = value.into();
    }
}

/// Summary of a batch for downstream consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Batch date as `YYYY-MM-DD`.
    pub batch_date: String,
    pub expected_files: usize,
    /// Local path of each branch file.
    pub files_path: BranchMap,
    /// File name of each branch file.
    pub files_name: BranchMap,
}

impl Manifest {
    pub fn new(batch_date: impl Into<String>, files_path: BranchMap, files_name: BranchMap) -> Self {
        Self {
            batch_date: batch_date.into(),
            expected_files: EXPECTED_FILES,
            files_path,
            files_name,
        }
    }

    /// Load a manifest from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
