use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

/// Image bytes resolved from a URL, ready for display.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// External capability that fetches an image for display.
///
/// Failure is silent from the caller's perspective: a URL either resolves
/// to an image or to `None`, and the row simply shows nothing. URLs are
/// passed through unvalidated.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn resolve(&self, url: &str) -> Option<LoadedImage>;
}

/// Fetches images over HTTP with a shared client.
pub struct HttpImageLoader {
    client: Client,
}

impl HttpImageLoader {
    pub fn new(timeout: Duration, user_agent: &str) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    pub fn with_defaults() -> Self {
        Self::new(Duration::from_secs(30), "recetario/0.1")
    }
}

#[async_trait]
impl ImageLoader for HttpImageLoader {
    async fn resolve(&self, url: &str) -> Option<LoadedImage> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("image fetch failed for {url}: {e}");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("image fetch for {url} returned {}", response.status());
            return None;
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        match response.bytes().await {
            Ok(bytes) => {
                debug!("resolved image {url} ({} bytes)", bytes.len());
                Some(LoadedImage {
                    content_type,
                    bytes: bytes.to_vec(),
                })
            }
            Err(e) => {
                warn!("image body read failed for {url}: {e}");
                None
            }
        }
    }
}

/// Loader that never resolves anything. Used when image fetching is
/// disabled and in tests.
#[derive(Debug, Default)]
pub struct NoopImageLoader;

#[async_trait]
impl ImageLoader for NoopImageLoader {
    async fn resolve(&self, _url: &str) -> Option<LoadedImage> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_loader_resolves_nothing() {
        let loader = NoopImageLoader;
        assert!(loader.resolve("http://example.com/img.png").await.is_none());
    }
}
