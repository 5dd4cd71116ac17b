use crate::feed::card::CardView;
use crate::render::{html_escape, truncate_words};

/// Render one card in the post-card markup. All interpolated text is escaped.
pub fn render_card(card: &CardView, excerpt_words: usize) -> String {
    format!(
        "<article class=\"post-card\">\
         <div class=\"post-thumbnail\">\
         <img src=\"{thumb}\" alt=\"{title}\" loading=\"lazy\">\
         </div>\
         <div class=\"post-content\">\
         <a href=\"{cat_href}\" class=\"post-category\">{category}</a>\
         <h3 class=\"post-title\"><a href=\"{permalink}\">{title}</a></h3>\
         <p class=\"post-excerpt\">{excerpt}</p>\
         <div class=\"post-meta\">\
         <div class=\"post-author\">\
         <img src=\"{author_img}\" alt=\"{author}\" class=\"author-img\" loading=\"lazy\">\
         <span>{author}</span>\
         </div>\
         <div class=\"post-date\">{date}</div>\
         </div>\
         </div>\
         </article>",
        thumb = html_escape(&card.thumbnail),
        title = html_escape(&card.title),
        cat_href = html_escape(&card.category_href),
        category = html_escape(&card.category),
        permalink = html_escape(&card.permalink),
        excerpt = html_escape(&truncate_words(&card.excerpt, excerpt_words)),
        author_img = html_escape(&card.author_image),
        author = html_escape(&card.author_name),
        date = html_escape(&card.date),
    )
}

/// A titled grid of cards, the shape both the featured and latest sections
/// use.
pub fn render_section(title: &str, cards: &[CardView], excerpt_words: usize) -> String {
    let mut html = format!(
        "<section class=\"posts-section\">\n<h2>{}</h2>\n<div class=\"posts-grid\">",
        html_escape(title)
    );
    for card in cards {
        html.push_str(&render_card(card, excerpt_words));
    }
    html.push_str("</div>\n</section>");
    html
}

/// The load-more affordance. Empty once the stream is exhausted. The UI
/// disables the button while a batch is in flight so calls stay serialized.
pub fn render_load_more(has_more: bool) -> String {
    if has_more {
        "<div class=\"load-more\"><button id=\"load-more-btn\">Load More</button></div>"
            .to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::card;
    use crate::models::post::PostStore;

    fn sample_cards() -> Vec<CardView> {
        PostStore::seeded()
            .all()
            .iter()
            .map(|p| card::render(p, "%B %d, %Y"))
            .collect()
    }

    #[test]
    fn test_card_markup_contains_links_and_meta() {
        let cards = sample_cards();
        let html = render_card(&cards[0], 40);
        assert!(html.contains("post.html?id=1"));
        assert!(html.contains("category.html?category=technology"));
        assert!(html.contains("John Doe"));
        assert!(html.contains("January 15, 2025"));
    }

    #[test]
    fn test_card_markup_escapes_text() {
        let mut card = sample_cards().remove(0);
        card.title = "<script>alert(1)</script>".to_string();
        let html = render_card(&card, 40);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_section_renders_every_card() {
        let cards = sample_cards();
        let html = render_section("Latest Posts", &cards, 40);
        assert!(html.contains("<h2>Latest Posts</h2>"));
        for card in &cards {
            assert!(html.contains(&card.permalink));
        }
    }

    #[test]
    fn test_load_more_visibility() {
        assert!(render_load_more(true).contains("load-more-btn"));
        assert!(render_load_more(false).is_empty());
    }
}
