//! `shelf cover <url> --source <id>` – resolve and load one cover.

use anyhow::{Context, Result};
use shelf_core::config::ShelfConfig;
use shelf_core::cover::{CoverOrigin, CoverResolverFactory};
use shelf_core::manga::Manga;
use shelf_core::source::SourceManager;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug)]
pub struct CoverArgs {
    pub url: String,
    pub source: i64,
    pub favorite: bool,
    pub width: u32,
    pub height: u32,
    pub out: Option<PathBuf>,
}

pub async fn run_cover(cfg: &ShelfConfig, args: CoverArgs) -> Result<()> {
    let sources = Arc::new(SourceManager::from_config(&cfg.sources));
    let factory = CoverResolverFactory::from_config(cfg, sources)?;
    let mut resolver = factory.build();

    let manga = Manga::new(args.source, "")
        .with_thumbnail(args.url)
        .with_favorite(args.favorite);
    let Some(fetch) = resolver.resolve_fetch(&manga, args.width, args.height)? else {
        println!("Manga has no thumbnail URL; nothing to load.");
        factory.teardown();
        return Ok(());
    };

    let file = fetch.descriptor().file().to_path_buf();
    let data = tokio::task::spawn_blocking(move || fetch.load())
        .await
        .context("cover task join")??;

    let origin = match data.origin {
        CoverOrigin::Disk => "disk",
        CoverOrigin::Network => "network",
    };
    println!("Loaded {} bytes from {}", data.bytes.len(), origin);
    println!("Cover file: {}", file.display());
    if let Some(out) = args.out {
        std::fs::write(&out, &data.bytes)
            .with_context(|| format!("write {}", out.display()))?;
        println!("Wrote {}", out.display());
    }
    factory.teardown();
    Ok(())
}
