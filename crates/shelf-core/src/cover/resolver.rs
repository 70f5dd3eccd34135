//! Manga → cover fetch resolution and the factory that hands out resolvers.

use std::sync::Arc;

use anyhow::Result;

use super::{CoverFetch, CoverRequest, FetchDescriptor, HeaderCache, HeaderSet, ModelCache};
use crate::config::ShelfConfig;
use crate::cover_cache::{CoverStore, DiskCoverCache};
use crate::error::CoverError;
use crate::fetch::{CurlFetcher, CurlOptions, ImageFetcher};
use crate::manga::Manga;
use crate::source::SourceRegistry;

/// Builds [`CoverResolver`]s that share one header cache.
///
/// Header sets are computed at most once per source for as long as the
/// factory lives; call [`teardown`](Self::teardown) when the application shuts
/// down.
pub struct CoverResolverFactory {
    cover_cache: Arc<dyn CoverStore>,
    sources: Arc<dyn SourceRegistry>,
    network: Arc<dyn ImageFetcher>,
    headers: Arc<HeaderCache>,
    capacity: usize,
}

impl CoverResolverFactory {
    pub fn new(
        cover_cache: Arc<dyn CoverStore>,
        sources: Arc<dyn SourceRegistry>,
        network: Arc<dyn ImageFetcher>,
    ) -> Self {
        Self {
            cover_cache,
            sources,
            network,
            headers: Arc::new(HeaderCache::new()),
            capacity: super::DEFAULT_MODEL_CACHE_CAPACITY,
        }
    }

    /// Factory backed by the on-disk cover cache and curl, tuned from config.
    pub fn from_config(cfg: &ShelfConfig, sources: Arc<dyn SourceRegistry>) -> Result<Self> {
        let cover_cache = DiskCoverCache::open(cfg.covers_dir()?)?;
        let network = CurlFetcher::new(CurlOptions::from_config(cfg));
        Ok(Self::new(Arc::new(cover_cache), sources, Arc::new(network))
            .with_capacity(cfg.model_cache_capacity))
    }

    /// Model cache capacity for resolvers built from now on.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn build(&self) -> CoverResolver {
        CoverResolver {
            cover_cache: Arc::clone(&self.cover_cache),
            sources: Arc::clone(&self.sources),
            network: Arc::clone(&self.network),
            headers: Arc::clone(&self.headers),
            model_cache: ModelCache::new(self.capacity),
        }
    }

    pub fn header_cache(&self) -> &Arc<HeaderCache> {
        &self.headers
    }

    /// End of the header cache's lifetime. Resolvers still alive keep their
    /// own handle until dropped.
    pub fn teardown(self) {
        tracing::debug!(sources = self.headers.len(), "cover resolver factory torn down");
    }
}

/// Resolves manga covers to fetches, memoizing descriptors per
/// `(thumbnail url, width, height)`.
pub struct CoverResolver {
    cover_cache: Arc<dyn CoverStore>,
    sources: Arc<dyn SourceRegistry>,
    network: Arc<dyn ImageFetcher>,
    headers: Arc<HeaderCache>,
    model_cache: ModelCache<String, FetchDescriptor>,
}

impl CoverResolver {
    /// `Ok(None)` when the manga has no thumbnail URL. Fails with
    /// [`CoverError::UnknownSource`] if the manga's source isn't registered.
    pub fn resolve_fetch(
        &mut self,
        manga: &Manga,
        width: u32,
        height: u32,
    ) -> Result<Option<CoverFetch>, CoverError> {
        let Some(url) = manga.thumbnail() else {
            return Ok(None);
        };
        let url = url.to_string();

        let descriptor = match self.model_cache.get(&url, width, height) {
            Some(descriptor) => descriptor,
            None => {
                let request = CoverRequest::new(url.clone(), self.headers_for(manga)?);
                let file = self.cover_cache.cover_file(&url);
                tracing::debug!(%url, width, height, "cover descriptor cache miss");
                self.model_cache
                    .put(url, width, height, FetchDescriptor::new(request, file))
            }
        };

        Ok(Some(CoverFetch::new(
            descriptor,
            Arc::clone(&self.network),
            manga.favorite,
        )))
    }

    /// Request headers for the manga's source, computed once per source id.
    pub fn headers_for(&self, manga: &Manga) -> Result<Arc<HeaderSet>, CoverError> {
        self.headers.get_or_compute(manga.source, || {
            let source = self
                .sources
                .get(manga.source)
                .ok_or(CoverError::UnknownSource(manga.source))?;
            Ok(HeaderSet::from_multimap(source.request_headers()))
        })
    }

    /// Number of memoized descriptors.
    pub fn cached_descriptors(&self) -> usize {
        self.model_cache.len()
    }
}
