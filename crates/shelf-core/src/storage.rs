//! Cover file lifecycle.
//!
//! Each write goes to its own uniquely named `.part` temp file next to the
//! destination, is synced, then atomically renamed into place. Concurrent
//! writers of the same cover never share a temp file, so readers only ever
//! see a complete image.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Writer for a temp cover file. Call `finalize` to move it into place;
/// dropping it without finalizing removes the temp file.
pub struct StorageWriter {
    file: NamedTempFile,
}

impl StorageWriter {
    /// Create a fresh temp file in `dir`. The directory must be on the same
    /// filesystem as the final path for the rename to be atomic.
    pub fn create_in(dir: &Path) -> Result<Self> {
        let file = tempfile::Builder::new()
            .suffix(TEMP_SUFFIX)
            .tempfile_in(dir)
            .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
        Ok(StorageWriter { file })
    }

    pub fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.file
            .write_all(data)
            .with_context(|| format!("write to {}", self.file.path().display()))
    }

    /// Sync file data to disk. Call before `finalize` for durability.
    pub fn sync(&self) -> Result<()> {
        self.file
            .as_file()
            .sync_all()
            .context("storage sync failed")?;
        Ok(())
    }

    /// Path to the current temp file.
    pub fn temp_path(&self) -> &Path {
        self.file.path()
    }

    /// Atomically rename the temp file to the final path, replacing any
    /// existing file. Consumes the writer and closes the file.
    pub fn finalize(self, final_path: &Path) -> Result<()> {
        let temp_path = self.file.path().to_path_buf();
        self.file.persist(final_path).map_err(|e| e.error).with_context(|| {
            format!(
                "failed to rename {} to {}",
                temp_path.display(),
                final_path.display()
            )
        })?;
        Ok(())
    }
}

/// Write `data` to `final_path` through a synced temp file. Creates the parent
/// directory if needed; on failure the temp file is removed when the writer drops.
pub fn write_atomic(final_path: &Path, data: &[u8]) -> Result<()> {
    let parent = match final_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    let mut writer = StorageWriter::create_in(parent)?;
    writer.write_all(data)?;
    writer.sync()?;
    writer.finalize(final_path)
}
