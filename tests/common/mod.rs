use std::cell::Cell;
use std::time::Duration;

use async_trait::async_trait;

use postboard::api::posts::PostSource;
use postboard::error::AppError;
use postboard::models::post::Post;

/// Post source that answers after a fixed delay on the (paused) tokio clock.
pub struct StubSource {
    delay: Duration,
    result: Result<Vec<Post>, AppError>,
    calls: Cell<usize>,
}

impl StubSource {
    pub fn ok_after(delay: Duration, posts: Vec<Post>) -> Self {
        Self {
            delay,
            result: Ok(posts),
            calls: Cell::new(0),
        }
    }

    pub fn err_after(delay: Duration, err: AppError) -> Self {
        Self {
            delay,
            result: Err(err),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl PostSource for StubSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, AppError> {
        self.calls.set(self.calls.get() + 1);
        tokio::time::sleep(self.delay).await;
        self.result.clone()
    }
}

/// Posts `1..=n` titled `"post {i}"`.
pub fn numbered_posts(n: u64) -> Vec<Post> {
    (1..=n)
        .map(|i| Post::new(i, format!("post {i}"), format!("body of post {i}")))
        .collect()
}

pub fn ids(posts: &[Post]) -> Vec<u64> {
    posts.iter().map(|p| p.id).collect()
}
