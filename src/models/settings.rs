use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_PLACEHOLDER_COUNT: usize = 10;
pub const DEFAULT_FALLBACK_TIMEOUT_MS: u64 = 8_000;

/// Settings shared between the server and the browser bundle.
///
/// The server loads them at startup and hands them to the page through the
/// `GetBoardSettings` server function.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BoardSettings {
    /// Endpoint returning a JSON array of posts.
    pub posts_url: String,
    /// Number of cards per page.
    pub page_size: usize,
    /// Number of skeleton cards rendered while loading.
    pub placeholder_count: usize,
    /// Delay after which the loading state is dropped even without data.
    /// `0` disables the fallback timer.
    pub fallback_timeout_ms: u64,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            posts_url: DEFAULT_POSTS_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            placeholder_count: DEFAULT_PLACEHOLDER_COUNT,
            fallback_timeout_ms: DEFAULT_FALLBACK_TIMEOUT_MS,
        }
    }
}

impl BoardSettings {
    pub fn fallback_timeout(&self) -> Option<Duration> {
        (self.fallback_timeout_ms > 0).then(|| Duration::from_millis(self.fallback_timeout_ms))
    }
}
