//! Network side of cover loading.
//!
//! [`ImageFetcher`] is the seam the cover fetcher goes through for bytes it
//! doesn't have on disk; [`CurlFetcher`] is the libcurl implementation.

use std::time::Duration;

use crate::config::ShelfConfig;
use crate::cover::CoverRequest;
use crate::error::CoverError;

/// Retrieves raw image bytes for a request descriptor.
pub trait ImageFetcher: Send + Sync {
    fn fetch(&self, request: &CoverRequest) -> Result<Vec<u8>, CoverError>;
}

/// Transfer tuning for cover GETs.
#[derive(Debug, Clone, Copy)]
pub struct CurlOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub max_redirections: u32,
}

impl Default for CurlOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
            max_redirections: 10,
        }
    }
}

impl CurlOptions {
    pub fn from_config(cfg: &ShelfConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            ..Self::default()
        }
    }
}

/// Blocking GET via a fresh curl easy handle per request.
/// Call from `spawn_blocking` if used from async code.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    opts: CurlOptions,
}

impl CurlFetcher {
    pub fn new(opts: CurlOptions) -> Self {
        Self { opts }
    }
}

/// Only http(s) URLs are handed to curl.
fn check_url(url: &str) -> Result<(), CoverError> {
    let parsed = url::Url::parse(url).map_err(|e| CoverError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(CoverError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {other}"),
        }),
    }
}

impl ImageFetcher for CurlFetcher {
    fn fetch(&self, request: &CoverRequest) -> Result<Vec<u8>, CoverError> {
        check_url(&request.url)?;

        let mut body: Vec<u8> = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(&request.url)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.opts.max_redirections)?;
        easy.connect_timeout(self.opts.connect_timeout)?;
        easy.timeout(self.opts.timeout)?;

        if !request.headers.is_empty() {
            let mut list = curl::easy::List::new();
            for line in request.headers.header_lines() {
                list.append(&line)?;
            }
            easy.http_headers(list)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(CoverError::Http {
                url: request.url.clone(),
                code,
            });
        }
        tracing::debug!(url = %request.url, bytes = body.len(), "fetched cover");
        Ok(body)
    }
}
