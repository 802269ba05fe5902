mod common;

use std::time::Duration;

use postboard::board::loader::run_load;
use postboard::board::state::{BoardEvent, BoardState, CardGrid, LoadPhase};
use postboard::error::AppError;
use postboard::models::post::Post;
use postboard::models::settings::BoardSettings;

use common::{ids, numbered_posts, StubSource};

/// Drive a fresh board through `run_load` and return the final state.
async fn load_board(source: &StubSource, settings: &BoardSettings) -> BoardState {
    let mut state = BoardState::new(settings);
    let fallback = settings.fallback_timeout().map(tokio::time::sleep);
    run_load(source, fallback, |event| state.apply(event)).await;
    state
}

#[tokio::test(start_paused = true)]
async fn board_shows_first_page_after_fetch() {
    let source = StubSource::ok_after(Duration::from_millis(300), numbered_posts(25));
    let state = load_board(&source, &BoardSettings::default()).await;

    assert_eq!(source.calls(), 1);
    assert_eq!(state.phase(), &LoadPhase::Loaded);
    assert_eq!(state.page_count(), 3);
    assert_eq!(ids(state.visible()), (1..=10).collect::<Vec<_>>());

    let state = state.reduce(BoardEvent::PageChanged(3));
    assert_eq!(ids(state.visible()), (21..=25).collect::<Vec<_>>());
}

#[tokio::test(start_paused = true)]
async fn placeholders_render_while_fetch_is_pending() {
    let settings = BoardSettings::default();
    let source = StubSource::ok_after(Duration::from_secs(2), numbered_posts(3));
    let mut state = BoardState::new(&settings);
    let mut seen = Vec::new();

    run_load(
        &source,
        settings.fallback_timeout().map(tokio::time::sleep),
        |event| {
            seen.push(state.grid());
            state.apply(event);
        },
    )
    .await;

    // The grid before the first event is the loading grid, even though only
    // three posts eventually arrive.
    assert_eq!(seen, vec![CardGrid::Placeholders(10)]);
    assert_eq!(state.grid(), CardGrid::Posts(numbered_posts(3)));
}

#[tokio::test(start_paused = true)]
async fn fallback_timer_ends_loading_without_data() {
    let settings = BoardSettings::default();
    let source = StubSource::ok_after(Duration::from_secs(20), numbered_posts(12));
    let mut state = BoardState::new(&settings);
    let mut at_timer = None;
    let started = tokio::time::Instant::now();

    run_load(
        &source,
        settings.fallback_timeout().map(tokio::time::sleep),
        |event| {
            let is_timer = event == BoardEvent::TimerFired;
            state.apply(event);
            if is_timer {
                at_timer = Some((started.elapsed(), state.clone()));
            }
        },
    )
    .await;

    let (elapsed, snapshot) = at_timer.expect("timer should fire before the fetch");
    assert!(elapsed >= Duration::from_secs(8) && elapsed < Duration::from_secs(9));
    assert!(!snapshot.is_loading());
    assert_eq!(snapshot.grid(), CardGrid::Posts(Vec::new()));

    // The late response still fills the board.
    assert_eq!(state.posts().len(), 12);
    assert_eq!(state.page_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn disabled_timer_waits_for_fetch() {
    let settings = BoardSettings {
        fallback_timeout_ms: 0,
        ..BoardSettings::default()
    };
    let source = StubSource::ok_after(Duration::from_secs(20), numbered_posts(4));
    let mut events = Vec::new();

    run_load(
        &source,
        settings.fallback_timeout().map(tokio::time::sleep),
        |event| events.push(event),
    )
    .await;

    assert_eq!(events, vec![BoardEvent::FetchResolved(Ok(numbered_posts(4)))]);
}

#[tokio::test(start_paused = true)]
async fn fetch_failure_is_surfaced() {
    let source = StubSource::err_after(
        Duration::from_millis(50),
        AppError::Http("network unreachable".into()),
    );
    let state = load_board(&source, &BoardSettings::default()).await;

    assert!(matches!(state.phase(), LoadPhase::Failed(AppError::Http(_))));
    match state.grid() {
        CardGrid::Failed(message) => assert!(message.contains("network unreachable")),
        other => panic!("Expected failed grid, got: {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn search_then_paginate() {
    let mut posts = vec![
        Post::new(1, "Foo bar", "x"),
        Post::new(2, "bar", "x"),
        Post::new(3, "a foo", "x"),
    ];
    posts.extend((4..=14).map(|i| Post::new(i, format!("foo #{i}"), "x")));
    let source = StubSource::ok_after(Duration::from_millis(10), posts);

    let state = load_board(&source, &BoardSettings::default())
        .await
        .reduce(BoardEvent::PageChanged(2));
    assert_eq!(state.page(), 2);

    let state = state.reduce(BoardEvent::SearchChanged("FOO".into()));
    assert_eq!(state.page(), 1);
    assert_eq!(state.filtered().len(), 13);
    assert!(!ids(state.filtered()).contains(&2));
    assert_eq!(state.page_count(), 2);

    let state = state.reduce(BoardEvent::PageChanged(2));
    assert_eq!(state.visible().len(), 3);
}

#[test]
fn filtered_set_matches_definition_for_many_queries() {
    let posts = vec![
        Post::new(1, "Rust in Action", "a"),
        Post::new(2, "rusty nails", "b"),
        Post::new(3, "Trust but verify", "c"),
        Post::new(4, "Ownership", "d"),
        Post::new(5, "", "e"),
    ];
    let loaded = BoardState::default().reduce(BoardEvent::FetchResolved(Ok(posts.clone())));

    for query in ["", "rust", "RUST", "st ", "ship", "nothing", "T"] {
        let state = loaded.clone().reduce(BoardEvent::SearchChanged(query.to_string()));
        let expected: Vec<Post> = posts
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&query.to_lowercase()))
            .cloned()
            .collect();
        assert_eq!(state.filtered(), expected.as_slice(), "query = {query:?}");
        assert_eq!(state.page(), 1);
    }
}
