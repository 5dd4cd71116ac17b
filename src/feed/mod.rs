use thiserror::Error;

pub mod card;
pub mod controller;
pub mod filter;
pub mod paginator;

/// Errors the feed core can produce. Fatal for the current render batch,
/// never for the process: the UI surfaces a notification and may fall back
/// to original collection order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("post {post_id} has an unparseable date {raw:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat { post_id: i64, raw: String },
}
