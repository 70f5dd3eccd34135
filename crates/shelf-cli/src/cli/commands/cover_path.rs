//! `shelf cover-path <url>` – where a cover would be cached.

use anyhow::Result;
use shelf_core::config::ShelfConfig;
use shelf_core::cover_cache::{CoverStore, DiskCoverCache};

pub fn run_cover_path(cfg: &ShelfConfig, url: &str) -> Result<()> {
    let cache = DiskCoverCache::new(cfg.covers_dir()?);
    let path = cache.cover_file(url);
    let state = if cache.is_cached(url) { "cached" } else { "absent" };
    println!("{}  ({})", path.display(), state);
    Ok(())
}
