pub mod config;
pub mod logging;

pub mod cover;
pub mod cover_cache;
pub mod error;
pub mod extension;
pub mod fetch;
pub mod manga;
pub mod source;
pub mod storage;
