use std::sync::Arc;

use crate::board::filter::filter_by_title;
use crate::board::pagination::{clamp_page, page_count, page_slice};
use crate::error::AppError;
use crate::models::post::Post;
use crate::models::settings::BoardSettings;

/// Where the board is in its one-way load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Loaded,
    Failed(AppError),
}

/// Discrete inputs that move the board from one state to the next.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    /// The posts request finished, successfully or not.
    FetchResolved(Result<Vec<Post>, AppError>),
    /// The search field changed to the given text.
    SearchChanged(String),
    /// The page selector asked for the given 1-based page.
    PageChanged(usize),
    /// The fallback timer elapsed.
    TimerFired,
}

/// What the card grid should show.
#[derive(Debug, Clone, PartialEq)]
pub enum CardGrid {
    Placeholders(usize),
    Posts(Vec<Post>),
    Failed(String),
}

/// The whole board state. Every change goes through [`BoardState::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    posts: Arc<[Post]>,
    filtered: Vec<Post>,
    query: String,
    page: usize,
    phase: LoadPhase,
    page_size: usize,
    placeholder_count: usize,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(&BoardSettings::default())
    }
}

impl BoardState {
    pub fn new(settings: &BoardSettings) -> Self {
        Self {
            posts: Arc::from(Vec::new()),
            filtered: Vec::new(),
            query: String::new(),
            page: 1,
            phase: LoadPhase::Loading,
            page_size: settings.page_size.max(1),
            placeholder_count: settings.placeholder_count,
        }
    }

    /// Apply one event and return the next state.
    pub fn reduce(self, event: BoardEvent) -> Self {
        match event {
            BoardEvent::FetchResolved(Ok(posts)) => self.with_posts(posts),
            BoardEvent::FetchResolved(Err(err)) => self.with_failure(err),
            BoardEvent::SearchChanged(query) => self.with_query(query),
            BoardEvent::PageChanged(page) => self.with_page(page),
            BoardEvent::TimerFired => self.with_timer(),
        }
    }

    /// In-place variant of [`BoardState::reduce`] for signal updates.
    pub fn apply(&mut self, event: BoardEvent) {
        *self = std::mem::take(self).reduce(event);
    }

    fn with_posts(self, posts: Vec<Post>) -> Self {
        if matches!(self.phase, LoadPhase::Failed(_)) {
            return self;
        }
        let filtered = filter_by_title(&posts, &self.query);
        let page = clamp_page(self.page, page_count(filtered.len(), self.page_size));
        Self {
            posts: Arc::from(posts),
            filtered,
            page,
            phase: LoadPhase::Loaded,
            ..self
        }
    }

    fn with_failure(self, err: AppError) -> Self {
        // A timer-forced Loaded with no data still surfaces a late failure.
        match self.phase {
            LoadPhase::Loading => Self {
                phase: LoadPhase::Failed(err),
                ..self
            },
            LoadPhase::Loaded if self.posts.is_empty() => Self {
                phase: LoadPhase::Failed(err),
                ..self
            },
            _ => self,
        }
    }

    fn with_query(self, query: String) -> Self {
        let filtered = filter_by_title(&self.posts, &query);
        Self {
            filtered,
            query,
            page: 1,
            ..self
        }
    }

    fn with_page(self, page: usize) -> Self {
        let page = clamp_page(page, self.page_count());
        Self { page, ..self }
    }

    fn with_timer(self) -> Self {
        match self.phase {
            LoadPhase::Loading => Self {
                phase: LoadPhase::Loaded,
                ..self
            },
            _ => self,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn filtered(&self) -> &[Post] {
        &self.filtered
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered.len(), self.page_size)
    }

    /// Posts on the current page.
    pub fn visible(&self) -> &[Post] {
        page_slice(&self.filtered, self.page, self.page_size)
    }

    pub fn grid(&self) -> CardGrid {
        match &self.phase {
            LoadPhase::Loading => CardGrid::Placeholders(self.placeholder_count),
            LoadPhase::Loaded => CardGrid::Posts(self.visible().to_vec()),
            LoadPhase::Failed(err) => CardGrid::Failed(err.to_string()),
        }
    }
}
