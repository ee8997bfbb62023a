use std::path::{Path, PathBuf};

use janus_core::models::Source;
use janus_core::traits::StoreTarget;

/// File name of the combined all-sources file.
const MERGED_FILE: &str = "all_vacancy.json";

/// Where the flat files live.
///
/// Output file names are derived here rather than embedded at the write
/// sites, so tests and callers can redirect the whole store by pointing it
/// at another directory.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    data_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Flat-file path for a store target.
    pub fn path(&self, target: StoreTarget) -> PathBuf {
        let file_name = match target {
            StoreTarget::Source(source) => format!("{}.json", source.file_stem()),
            StoreTarget::Merged => MERGED_FILE.to_string(),
        };
        self.data_dir.join(file_name)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new("data")
    }
}
