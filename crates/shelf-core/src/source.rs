//! Source registry: maps the integer source id stored on a manga to the
//! source that knows how to talk to its site.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::SourceConfig;

/// User agent sent by config-declared sources that don't set their own.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

/// A manga source as far as cover fetching is concerned.
pub trait Source: Send + Sync {
    fn id(&self) -> i64;

    fn name(&self) -> &str;

    /// Headers attached to every request this source makes. A name may appear
    /// more than once.
    fn request_headers(&self) -> Vec<(String, String)>;
}

/// Lookup of sources by id.
pub trait SourceRegistry: Send + Sync {
    fn get(&self, id: i64) -> Option<Arc<dyn Source>>;
}

/// Plain HTTP source with a fixed header list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSource {
    id: i64,
    name: String,
    headers: Vec<(String, String)>,
}

impl HttpSource {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Build from a `[[sources]]` entry, adding [`DEFAULT_USER_AGENT`] when
    /// the entry has no `User-Agent` of its own.
    pub fn from_config(cfg: &SourceConfig) -> Self {
        let mut source = HttpSource::new(cfg.id, cfg.name.clone());
        for (name, value) in &cfg.headers {
            source = source.with_header(name.clone(), value.clone());
        }
        if !cfg
            .headers
            .keys()
            .any(|k| k.eq_ignore_ascii_case("user-agent"))
        {
            source = source.with_header("User-Agent", DEFAULT_USER_AGENT);
        }
        source
    }
}

impl Source for HttpSource {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn request_headers(&self) -> Vec<(String, String)> {
        self.headers.clone()
    }
}

/// In-memory registry owned by the application.
#[derive(Default)]
pub struct SourceManager {
    sources: HashMap<i64, Arc<dyn Source>>,
}

impl SourceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry containing every source declared in config.
    pub fn from_config(sources: &[SourceConfig]) -> Self {
        let mut manager = Self::new();
        for cfg in sources {
            if manager
                .register(Arc::new(HttpSource::from_config(cfg)))
                .is_some()
            {
                tracing::warn!(source = cfg.id, "duplicate source id in config; last one wins");
            }
        }
        manager
    }

    /// Register a source, returning the one it replaced (if any).
    pub fn register(&mut self, source: Arc<dyn Source>) -> Option<Arc<dyn Source>> {
        tracing::debug!(source = source.id(), name = source.name(), "registered source");
        self.sources.insert(source.id(), source)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl SourceRegistry for SourceManager {
    fn get(&self, id: i64) -> Option<Arc<dyn Source>> {
        self.sources.get(&id).cloned()
    }
}
