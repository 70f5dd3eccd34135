//! Typed errors for cover resolution and fetching.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoverError {
    /// The manga points at a source id that nobody registered.
    #[error("source {0} is not registered")]
    UnknownSource(i64),
    /// Thumbnail URL is not an http(s) URL curl can fetch.
    #[error("invalid cover url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// Server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),
    /// Cover file exists but could not be read.
    #[error("cover file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            CoverError::UnknownSource(7).to_string(),
            "source 7 is not registered"
        );
        let e = CoverError::Http {
            url: "https://img.example.com/a.jpg".to_string(),
            code: 404,
        };
        assert_eq!(e.to_string(), "GET https://img.example.com/a.jpg returned HTTP 404");
    }
}
