//! Integration test: resolve covers against a local image server through the
//! curl fetcher and the on-disk cover cache.

mod common;

use std::sync::Arc;

use shelf_core::config::{ShelfConfig, SourceConfig};
use shelf_core::cover::{CoverOrigin, CoverResolverFactory};
use shelf_core::cover_cache::{CoverStore, DiskCoverCache};
use shelf_core::error::CoverError;
use shelf_core::manga::Manga;
use shelf_core::source::SourceManager;
use tempfile::tempdir;

fn config_with_source(covers_dir: &std::path::Path) -> ShelfConfig {
    let mut headers = std::collections::BTreeMap::new();
    headers.insert("Referer".to_string(), "https://site.example/".to_string());
    headers.insert("User-Agent".to_string(), "shelf-test/1.0".to_string());
    ShelfConfig {
        covers_dir: Some(covers_dir.to_path_buf()),
        sources: vec![SourceConfig {
            id: 10,
            name: "Site".to_string(),
            headers,
        }],
        ..ShelfConfig::default()
    }
}

#[test]
fn favorite_cover_is_fetched_once_and_persisted() {
    let body: Vec<u8> = (0u8..=255).cycle().take(4096).collect();
    let server = common::image_server::start(body.clone());
    let dir = tempdir().unwrap();
    let cfg = config_with_source(dir.path());

    let sources = Arc::new(SourceManager::from_config(&cfg.sources));
    let factory = CoverResolverFactory::from_config(&cfg, sources).unwrap();
    let mut resolver = factory.build();

    let manga = Manga::new(10, "/manga/1")
        .with_thumbnail(server.cover_url())
        .with_favorite(true);
    let fetch = resolver.resolve_fetch(&manga, 300, 450).unwrap().unwrap();

    let first = fetch.load().unwrap();
    assert_eq!(first.origin, CoverOrigin::Network);
    assert_eq!(first.bytes, body);
    assert_eq!(server.hits(), 1);

    let headers = server.last_request_headers();
    assert!(headers.contains(&"referer: https://site.example/".to_string()), "{headers:?}");
    assert!(headers.contains(&"user-agent: shelf-test/1.0".to_string()), "{headers:?}");

    let cached = DiskCoverCache::new(dir.path()).cover_file(&server.cover_url());
    assert_eq!(std::fs::read(&cached).unwrap(), body);

    // Second resolution reuses the descriptor and serves from disk.
    let again = resolver.resolve_fetch(&manga, 300, 450).unwrap().unwrap();
    assert!(Arc::ptr_eq(fetch.descriptor(), again.descriptor()));
    let second = again.load().unwrap();
    assert_eq!(second.origin, CoverOrigin::Disk);
    assert_eq!(second.bytes, body);
    assert_eq!(server.hits(), 1);
}

#[test]
fn non_favorite_cover_is_not_persisted() {
    let server = common::image_server::start(b"thumb".to_vec());
    let dir = tempdir().unwrap();
    let cfg = config_with_source(dir.path());
    let sources = Arc::new(SourceManager::from_config(&cfg.sources));
    let mut resolver = CoverResolverFactory::from_config(&cfg, sources)
        .unwrap()
        .build();

    let manga = Manga::new(10, "/manga/2").with_thumbnail(server.cover_url());
    let fetch = resolver.resolve_fetch(&manga, 0, 0).unwrap().unwrap();
    assert_eq!(fetch.load().unwrap().bytes, b"thumb");
    assert_eq!(fetch.load().unwrap().origin, CoverOrigin::Network);
    assert_eq!(server.hits(), 2);
    assert!(!fetch.descriptor().file().exists());
}

#[test]
fn http_error_surfaces_as_typed_error() {
    let server = common::image_server::start(Vec::new());
    let dir = tempdir().unwrap();
    let cfg = config_with_source(dir.path());
    let sources = Arc::new(SourceManager::from_config(&cfg.sources));
    let mut resolver = CoverResolverFactory::from_config(&cfg, sources)
        .unwrap()
        .build();

    let manga = Manga::new(10, "/manga/3")
        .with_thumbnail(server.missing_url())
        .with_favorite(true);
    let fetch = resolver.resolve_fetch(&manga, 0, 0).unwrap().unwrap();
    match fetch.load() {
        Err(CoverError::Http { code, .. }) => assert_eq!(code, 404),
        other => panic!("expected HTTP 404, got {other:?}"),
    }
    assert!(!fetch.descriptor().file().exists());
}
