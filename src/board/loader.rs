use std::future::Future;

use futures::future::{select, Either};

use crate::api::posts::PostSource;
use crate::board::state::BoardEvent;

/// Run the posts fetch, racing it against an optional fallback timer.
///
/// Events are handed to `dispatch` in the order they happen:
/// - fetch first: `FetchResolved`, and the timer is dropped;
/// - timer first: `TimerFired`, then `FetchResolved` once the fetch lands.
///
/// Dropping the returned future cancels both the timer and the fetch.
pub async fn run_load<S, T, D>(source: &S, fallback: Option<T>, mut dispatch: D)
where
    S: PostSource + ?Sized,
    T: Future<Output = ()>,
    D: FnMut(BoardEvent),
{
    let fetch = source.fetch_posts();

    let Some(timer) = fallback else {
        let result = fetch.await;
        log_outcome(&result);
        dispatch(BoardEvent::FetchResolved(result));
        return;
    };

    futures::pin_mut!(timer);
    match select(fetch, timer).await {
        Either::Left((result, _timer)) => {
            log_outcome(&result);
            dispatch(BoardEvent::FetchResolved(result));
        }
        Either::Right(((), fetch)) => {
            tracing::info!("Fallback timer elapsed before posts arrived");
            dispatch(BoardEvent::TimerFired);
            let result = fetch.await;
            log_outcome(&result);
            dispatch(BoardEvent::FetchResolved(result));
        }
    }
}

fn log_outcome<T>(result: &Result<Vec<T>, crate::error::AppError>) {
    match result {
        Ok(posts) => tracing::info!("Loaded {} posts", posts.len()),
        Err(e) => tracing::warn!("Failed to load posts: {e}"),
    }
}
