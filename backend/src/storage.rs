//! Dataset store - the flat directory holding saved CSV datasets.
//!
//! Every dataset is a single `<name>.csv` file. No subdirectories, no
//! metadata sidecar.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_DATASETS_DIR;
use crate::error::{DatasourceError, DatasourceResult};

/// Storage directory for saved datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetStore {
    dir: PathBuf,
}

impl DatasetStore {
    /// Store rooted at the default datasets directory.
    pub fn new() -> Self {
        Self::with_dir(DEFAULT_DATASETS_DIR)
    }

    /// Store rooted at a custom directory.
    pub fn with_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: PathBuf::from(dir.as_ref()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the dataset called `name`.
    pub fn path_for(&self, name: &str) -> DatasourceResult<PathBuf> {
        check_name(name)?;
        Ok(self.dir.join(format!("{}.csv", name)))
    }

    /// Write `bytes` verbatim to `<dir>/<name>.csv`, creating the directory if needed.
    ///
    /// An existing dataset with the same name is overwritten.
    pub fn write(&self, name: &str, bytes: &[u8]) -> DatasourceResult<PathBuf> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, bytes)?;
        Ok(path)
    }

    /// Names (file stems) of all stored datasets, sorted.
    ///
    /// A missing directory holds no datasets.
    pub fn list(&self) -> std::io::Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut names: Vec<String> = fs::read_dir(&self.dir)?
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|e| e == "csv"))
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .collect();
        names.sort();
        Ok(names)
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Names must map to a single file directly inside the store.
fn check_name(name: &str) -> DatasourceResult<()> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || name.contains('/')
        || name.contains('\\')
    {
        return Err(DatasourceError::InvalidName(name.to_string()));
    }
    Ok(())
}
