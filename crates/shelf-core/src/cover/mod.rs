//! Cover resolution.
//!
//! Given a [`Manga`](crate::manga::Manga), a [`CoverResolver`] produces a
//! [`CoverFetch`]: the remote request (thumbnail URL plus the source's headers)
//! paired with the local cover file, memoized per `(url, width, height)`.
//! Loading a `CoverFetch` checks the cover file first and falls back to the
//! network, writing through to disk for library favorites.

mod descriptor;
mod fetcher;
mod headers;
mod model_cache;
mod resolver;

pub use descriptor::{CoverRequest, FetchDescriptor, HeaderSet};
pub use fetcher::{CoverData, CoverFetch, CoverOrigin};
pub use headers::HeaderCache;
pub use model_cache::{ModelCache, ModelKey, DEFAULT_MODEL_CACHE_CAPACITY};
pub use resolver::{CoverResolver, CoverResolverFactory};
