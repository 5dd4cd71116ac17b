use serde::Serialize;
use slug::slugify;

use crate::models::post::Post;
use crate::render::format_date;

/// The renderable projection of a post for card-style display. Carries
/// exactly what the card markup needs, nothing else.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CardView {
    pub post_id: i64,
    pub category: String,
    pub category_href: String,
    pub permalink: String,
    pub title: String,
    pub excerpt: String,
    pub thumbnail: String,
    pub author_name: String,
    pub author_image: String,
    pub date: String,
}

/// Project a post into its card view. Total and pure: every post yields a
/// card, and an unparseable date is passed through as-is (bad dates are
/// rejected upstream by the chronological sort).
pub fn render(post: &Post, date_format: &str) -> CardView {
    CardView {
        post_id: post.id,
        category: post.category.clone(),
        category_href: format!("category.html?category={}", slugify(&post.category)),
        permalink: format!("post.html?id={}", post.id),
        title: post.title.clone(),
        excerpt: post.excerpt.clone(),
        thumbnail: post.thumbnail.clone(),
        author_name: post.author.name.clone(),
        author_image: post.author.image.clone(),
        date: format_date(&post.date, date_format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::post::PostStore;

    #[test]
    fn test_render_maps_all_fields() {
        let store = PostStore::seeded();
        let post = store.find_by_id(1).unwrap();
        let card = render(post, "%B %d, %Y");

        assert_eq!(card.post_id, 1);
        assert_eq!(card.category, "Technology");
        assert_eq!(card.category_href, "category.html?category=technology");
        assert_eq!(card.permalink, "post.html?id=1");
        assert_eq!(card.title, post.title);
        assert_eq!(card.excerpt, post.excerpt);
        assert_eq!(card.thumbnail, post.thumbnail);
        assert_eq!(card.author_name, "John Doe");
        assert_eq!(card.author_image, "./assets/images/default-avatar.jpg");
        assert_eq!(card.date, "January 15, 2025");
    }

    #[test]
    fn test_category_link_is_lowercased() {
        let store = PostStore::seeded();
        for post in store.all() {
            let card = render(post, "%B %d, %Y");
            let slug_part = card.category_href.rsplit('=').next().unwrap();
            assert_eq!(slug_part, slug_part.to_lowercase());
        }
    }

    #[test]
    fn test_render_is_total_on_bad_date() {
        let store = PostStore::seeded();
        let mut post = store.find_by_id(2).unwrap().clone();
        post.date = "not a date".to_string();
        let card = render(&post, "%B %d, %Y");
        assert_eq!(card.date, "not a date");
    }
}
