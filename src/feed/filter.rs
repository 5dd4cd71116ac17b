use chrono::NaiveDate;

use crate::feed::FeedError;
use crate::models::post::Post;

/// Storage format for post dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Posts flagged for the featured section, input order preserved. May be
/// empty; the featured section is independent of pagination.
pub fn featured(posts: &[Post]) -> Vec<Post> {
    posts.iter().filter(|p| p.featured).cloned().collect()
}

/// All posts sorted newest first. The sort is stable: posts sharing a date
/// keep their original relative order. A post whose date does not parse is
/// reported by id rather than silently dropped or reordered.
pub fn chronological(posts: &[Post]) -> Result<Vec<Post>, FeedError> {
    let mut dated: Vec<(NaiveDate, Post)> = Vec::with_capacity(posts.len());
    for post in posts {
        let date =
            NaiveDate::parse_from_str(&post.date, DATE_FORMAT).map_err(|_| {
                FeedError::InvalidDateFormat {
                    post_id: post.id,
                    raw: post.date.clone(),
                }
            })?;
        dated.push((date, post.clone()));
    }
    dated.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(dated.into_iter().map(|(_, post)| post).collect())
}
