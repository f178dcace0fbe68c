use std::path::{Path, PathBuf};

use crate::entry::Entry;
use crate::error::ExportError;

/// Destination for finished entries.
pub trait EntrySink {
    fn export(&self, entries: &[Entry]) -> Result<(), ExportError>;
}

/// Writes entries as a pretty-printed JSON array, creating parent directories.
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntrySink for JsonFileSink {
    fn export(&self, entries: &[Entry]) -> Result<(), ExportError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ExportError::WriteFile {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, json).map_err(|e| ExportError::WriteFile {
            path: self.path.clone(),
            source: e,
        })?;

        log::info!("Exported {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}
