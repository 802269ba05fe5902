use async_trait::async_trait;

use crate::error::AppError;
use crate::models::post::Post;

/// Source of the post list.
///
/// Abstracted as a trait so the board can be driven by a mock in tests.
/// Futures are not `Send` because the browser implementation runs on the
/// single-threaded JS event loop.
#[async_trait(?Send)]
pub trait PostSource {
    /// Fetch every post. Called once per mount; never retried.
    async fn fetch_posts(&self) -> Result<Vec<Post>, AppError>;
}

/// Map an HTTP status to an error unless it is 2xx.
pub fn check_status(status: u16) -> Result<(), AppError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(AppError::Status(status))
    }
}

/// Decode a JSON array of posts from a raw response body.
pub fn decode_posts(body: &str) -> Result<Vec<Post>, AppError> {
    Ok(serde_json::from_str(body)?)
}

/// `fetch`-backed implementation used by the browser bundle.
///
/// Only available when the `hydrate` feature is enabled.
#[cfg(feature = "hydrate")]
pub struct BrowserPostSource {
    url: String,
}

#[cfg(feature = "hydrate")]
impl BrowserPostSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl PostSource for BrowserPostSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, AppError> {
        let response = gloo_net::http::Request::get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::Http(format!("GET {} failed: {}", self.url, e)))?;

        check_status(response.status())?;

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Http(format!("Failed to read body: {}", e)))?;

        let posts = decode_posts(&body)?;
        tracing::debug!("Fetched {} posts from {}", posts.len(), self.url);
        Ok(posts)
    }
}
