use crate::models::post::Post;

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Fixed-size pagination over a sorted post list. `current_page` is 1-based.
#[derive(Debug, Clone)]
pub struct Paginator {
    page_size: usize,
    current_page: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Paginator {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The visible window for `page` plus whether pages remain after it.
    /// Pages past the end yield an empty slice and `false`, never an error.
    pub fn window_for<'a>(&self, sorted: &'a [Post], page: usize) -> (&'a [Post], bool) {
        let page = page.max(1);
        let start = (page - 1).saturating_mul(self.page_size).min(sorted.len());
        let end = start.saturating_add(self.page_size).min(sorted.len());
        let has_more = page.saturating_mul(self.page_size) < sorted.len();
        (&sorted[start..end], has_more)
    }

    /// Move to the next page and return it. Unchecked: callers stop calling
    /// once `window_for` reports no more pages.
    pub fn advance(&mut self) -> usize {
        self.current_page += 1;
        self.current_page
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Paginator::new(DEFAULT_PAGE_SIZE)
    }
}
