use std::collections::HashSet;

use crate::config::FeedConfig;
use crate::feed::card::{self, CardView};
use crate::feed::filter;
use crate::feed::paginator::Paginator;
use crate::feed::FeedError;
use crate::models::post::{Post, PostStore};

/// One `initial_load` batch: the featured section plus the first window of
/// the latest stream.
#[derive(Debug)]
pub struct InitialLoad {
    pub featured_cards: Vec<CardView>,
    pub latest_cards: Vec<CardView>,
    pub has_more: bool,
}

/// One `load_more` batch. Only cards not emitted in an earlier batch appear
/// here, so already-shown cards are never re-rendered or re-animated.
#[derive(Debug)]
pub struct LoadMore {
    pub new_cards: Vec<CardView>,
    pub has_more: bool,
}

/// Drives the feed: filter, sort, window, project. Owns all per-session
/// state explicitly; there are no process-wide counters. Callers serialize
/// `load_more` calls themselves (one outstanding batch at a time).
pub struct FeedController {
    store: PostStore,
    paginator: Paginator,
    date_format: String,
    rendered: HashSet<i64>,
    has_more: bool,
}

impl FeedController {
    pub fn new(store: PostStore, config: &FeedConfig) -> Self {
        FeedController {
            store,
            paginator: Paginator::new(config.posts_per_page),
            date_format: config.date_format.clone(),
            rendered: HashSet::new(),
            has_more: false,
        }
    }

    pub fn posts(&self) -> &[Post] {
        self.store.all()
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Reset to page 1 and emit the featured batch plus the first window of
    /// the latest stream. Running it again restarts the session.
    pub fn initial_load(&mut self) -> Result<InitialLoad, FeedError> {
        self.paginator.reset();
        self.rendered.clear();

        let featured_cards = self.project(&filter::featured(self.store.all()));

        let sorted = filter::chronological(self.store.all())?;
        let (window, has_more) = self.paginator.window_for(&sorted, 1);
        let latest_cards = self.project(window);
        for card in &latest_cards {
            self.rendered.insert(card.post_id);
        }
        self.has_more = has_more;

        log::debug!(
            "initial load: page {} of size {}, {} featured, {} latest, has_more={}",
            self.paginator.current_page(),
            self.paginator.page_size(),
            featured_cards.len(),
            latest_cards.len(),
            has_more
        );

        Ok(InitialLoad {
            featured_cards,
            latest_cards,
            has_more,
        })
    }

    /// Emit the next window of the latest stream, skipping anything already
    /// shown. A no-op once exhausted, or before any `initial_load`.
    pub fn load_more(&mut self) -> Result<LoadMore, FeedError> {
        if !self.has_more {
            return Ok(LoadMore {
                new_cards: Vec::new(),
                has_more: false,
            });
        }

        let page = self.paginator.advance();
        let sorted = filter::chronological(self.store.all())?;
        let (window, has_more) = self.paginator.window_for(&sorted, page);

        let new_cards: Vec<CardView> = window
            .iter()
            .filter(|p| !self.rendered.contains(&p.id))
            .map(|p| card::render(p, &self.date_format))
            .collect();
        for card in &new_cards {
            self.rendered.insert(card.post_id);
        }
        self.has_more = has_more;

        log::debug!(
            "load more: page {}, {} new cards, has_more={}",
            page,
            new_cards.len(),
            has_more
        );

        Ok(LoadMore { new_cards, has_more })
    }

    fn project(&self, posts: &[Post]) -> Vec<CardView> {
        posts
            .iter()
            .map(|p| card::render(p, &self.date_format))
            .collect()
    }
}
