//! File-based sink for native platforms.

use super::{PlanSink, StorageError, StorageResult};
use crate::canvas::FloorPlan;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes each saved plan as a JSON file in a directory.
///
/// Saving the same name twice overwrites the earlier file.
#[derive(Debug)]
pub struct FileSink {
    base_path: PathBuf,
    written: Vec<PathBuf>,
}

impl FileSink {
    /// Create a sink writing into `base_path`, creating the directory if needed.
    pub fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("Failed to create storage directory: {}", e))
            })?;
        }
        Ok(Self {
            base_path,
            written: Vec::new(),
        })
    }

    /// Path a plan is written to.
    pub fn plan_path(&self, plan: &FloorPlan) -> PathBuf {
        // Keep names filesystem-safe
        let safe_name: String = plan
            .name
            .trim()
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{}.json", safe_name))
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Files written so far, in save order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl PlanSink for FileSink {
    fn save(&mut self, plan: &FloorPlan) -> StorageResult<()> {
        let path = self.plan_path(plan);
        let json = plan
            .to_json()
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(&path, json)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
        self.written.push(path);
        Ok(())
    }
}
