//! Manifest file discovery and loading.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SamplectlError};
use crate::manifest::schema::SampleRecord;

/// Default manifest file name, looked up next to the executable.
pub const MANIFEST_FILE: &str = "build-test.json";

/// The sample manifest: sample name -> record.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    entries: BTreeMap<String, SampleRecord>,
}

impl Manifest {
    /// Load a manifest from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(SamplectlError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let entries: BTreeMap<String, SampleRecord> =
            serde_json::from_str(&content).map_err(|e| SamplectlError::ManifestParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        tracing::debug!("Loaded manifest with {} samples from {}", entries.len(), path.display());

        Ok(Self { entries })
    }

    /// Default manifest location: `build-test.json` next to the executable.
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default()
            .join(MANIFEST_FILE)
    }

    /// Look up a sample's record. A sample missing from the manifest behaves
    /// as an all-default record.
    pub fn sample(&self, name: &str) -> SampleRecord {
        self.entries.get(name).cloned().unwrap_or_default()
    }

    /// Number of samples in the manifest.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest has no samples.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
