//! Manga record as seen by the cover resolver.

use serde::{Deserialize, Serialize};

/// A manga entry from the library or a browse listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Manga {
    /// Database id; `None` for entries that were never stored.
    #[serde(default)]
    pub id: Option<i64>,
    /// Key into the source registry.
    pub source: i64,
    /// Source-relative path of the manga page.
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Library members keep their covers on disk.
    #[serde(default)]
    pub favorite: bool,
}

impl Manga {
    pub fn new(source: i64, url: impl Into<String>) -> Self {
        Self {
            source,
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_thumbnail(mut self, thumbnail_url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(thumbnail_url.into());
        self
    }

    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    /// Thumbnail URL, or `None` when absent or empty.
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail_url.as_deref().filter(|u| !u.is_empty())
    }
}
