//! Loading cover bytes for a resolved descriptor.

use std::io::ErrorKind;
use std::sync::Arc;

use super::FetchDescriptor;
use crate::error::CoverError;
use crate::fetch::ImageFetcher;
use crate::storage;

/// Where loaded bytes came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverOrigin {
    Disk,
    Network,
}

#[derive(Debug, Clone)]
pub struct CoverData {
    pub bytes: Vec<u8>,
    pub origin: CoverOrigin,
}

/// A ready-to-run cover load: the shared descriptor plus the network fetcher.
///
/// The cover file is always tried first. Network bytes are written through to
/// the cover file only for favorites; other covers are left to the image
/// pipeline's own caches.
pub struct CoverFetch {
    descriptor: Arc<FetchDescriptor>,
    network: Arc<dyn ImageFetcher>,
    favorite: bool,
}

impl CoverFetch {
    pub(super) fn new(
        descriptor: Arc<FetchDescriptor>,
        network: Arc<dyn ImageFetcher>,
        favorite: bool,
    ) -> Self {
        Self {
            descriptor,
            network,
            favorite,
        }
    }

    pub fn descriptor(&self) -> &Arc<FetchDescriptor> {
        &self.descriptor
    }

    /// Stable id for the image pipeline's caches: the thumbnail URL.
    pub fn id(&self) -> &str {
        &self.descriptor.request().url
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    /// Blocking load; call from `spawn_blocking` if used from async code.
    pub fn load(&self) -> Result<CoverData, CoverError> {
        let file = self.descriptor.file();
        match std::fs::read(file) {
            Ok(bytes) if bytes.is_empty() => {
                tracing::debug!(path = %file.display(), "empty cover file, refetching");
            }
            Ok(bytes) => {
                tracing::debug!(path = %file.display(), "cover served from disk");
                return Ok(CoverData {
                    bytes,
                    origin: CoverOrigin::Disk,
                });
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(source) => {
                return Err(CoverError::Io {
                    path: file.to_path_buf(),
                    source,
                })
            }
        }

        let bytes = self.network.fetch(self.descriptor.request())?;
        if self.favorite {
            match storage::write_atomic(file, &bytes) {
                Ok(()) => tracing::info!(path = %file.display(), "saved favorite cover"),
                Err(e) => tracing::warn!(path = %file.display(), "cover write-through failed: {:#}", e),
            }
        }
        Ok(CoverData {
            bytes,
            origin: CoverOrigin::Network,
        })
    }
}
