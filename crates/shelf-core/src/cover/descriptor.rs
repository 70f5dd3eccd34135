//! Immutable request/file descriptors shared through the model cache.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Request headers for one source: a single value per name.
///
/// Names are stored lowercased, so lookups are case-insensitive and iteration
/// is in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    headers: BTreeMap<String, String>,
}

impl HeaderSet {
    /// Collapse a header list where names may repeat; the first value for a
    /// name wins.
    pub fn from_multimap<I, K, V>(headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut map = BTreeMap::new();
        for (name, value) in headers {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            map.entry(name.to_ascii_lowercase())
                .or_insert_with(|| value.as_ref().trim().to_string());
        }
        Self { headers: map }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `name: value` lines as curl expects them.
    pub fn header_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(|(k, v)| format!("{k}: {v}"))
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

/// Remote half of a cover fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverRequest {
    pub url: String,
    pub headers: Arc<HeaderSet>,
}

impl CoverRequest {
    pub fn new(url: impl Into<String>, headers: Arc<HeaderSet>) -> Self {
        Self {
            url: url.into(),
            headers,
        }
    }
}

/// Request plus the cover file it is persisted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchDescriptor {
    request: CoverRequest,
    file: PathBuf,
}

impl FetchDescriptor {
    pub fn new(request: CoverRequest, file: PathBuf) -> Self {
        Self { request, file }
    }

    pub fn request(&self) -> &CoverRequest {
        &self.request
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}
