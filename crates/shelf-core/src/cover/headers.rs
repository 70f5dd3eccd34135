//! Per-source header memoization.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::HeaderSet;
use crate::error::CoverError;

/// Header sets keyed by source id. Entries are computed once and never
/// removed; the cache lives as long as the factory that owns it.
#[derive(Debug, Default)]
pub struct HeaderCache {
    entries: Mutex<HashMap<i64, Arc<HeaderSet>>>,
}

impl HeaderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Memoized header set for `source_id`, running `compute` on first use.
    /// A failed computation caches nothing.
    pub fn get_or_compute<F>(&self, source_id: i64, compute: F) -> Result<Arc<HeaderSet>, CoverError>
    where
        F: FnOnce() -> Result<HeaderSet, CoverError>,
    {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(headers) = entries.get(&source_id) {
            return Ok(Arc::clone(headers));
        }
        let headers = Arc::new(compute()?);
        tracing::debug!(source = source_id, count = headers.len(), "cached source headers");
        entries.insert(source_id, Arc::clone(&headers));
        Ok(headers)
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
