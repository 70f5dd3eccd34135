//! On-disk cover cache.
//!
//! Each thumbnail URL maps to one file named by the SHA-256 of the URL, so the
//! path is known before anything is downloaded.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use crate::storage;

/// Where covers for a given thumbnail URL live on disk.
pub trait CoverStore: Send + Sync {
    fn cover_file(&self, thumbnail_url: &str) -> PathBuf;
}

/// Lowercase hex SHA-256 of the URL; the cover's file name.
pub fn cover_key(thumbnail_url: &str) -> String {
    hex::encode(Sha256::digest(thumbnail_url.as_bytes()))
}

/// Cover cache rooted at a single directory.
#[derive(Debug, Clone)]
pub struct DiskCoverCache {
    dir: PathBuf,
}

impl DiskCoverCache {
    /// Cache rooted at `dir`. The directory is created lazily on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Like `new`, but creates the directory up front.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create covers dir {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn is_cached(&self, thumbnail_url: &str) -> bool {
        self.cover_file(thumbnail_url).is_file()
    }

    /// Persist cover bytes for `thumbnail_url`, replacing any previous file.
    pub fn save(&self, thumbnail_url: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.cover_file(thumbnail_url);
        storage::write_atomic(&path, bytes)?;
        Ok(path)
    }

    /// Remove the cover for `thumbnail_url`. Returns false if there was none.
    pub fn delete(&self, thumbnail_url: &str) -> Result<bool> {
        let path = self.cover_file(thumbnail_url);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("delete cover {}", path.display())),
        }
    }
}

impl CoverStore for DiskCoverCache {
    fn cover_file(&self, thumbnail_url: &str) -> PathBuf {
        self.dir.join(cover_key(thumbnail_url))
    }
}
