use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Author {
    pub name: String,
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    /// ISO 8601 calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub author: Author,
    pub thumbnail: String,
    pub views: u32,
    pub comments: u32,
    pub featured: bool,
}

/// Read-only post collection. Fixed at construction; insertion order is the
/// canonical order for the session. Ids are expected to be unique and
/// positive; the store never mutates after load.
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    pub fn new(posts: Vec<Post>) -> Self {
        PostStore { posts }
    }

    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// The demo collection the feed ships with. In a real deployment this
    /// would come from a database or an API.
    pub fn seeded() -> Self {
        PostStore::new(vec![
            demo_post(
                1,
                "The Future of Web Development in 2025",
                "Explore the emerging trends and technologies that will shape the future of web development in the coming years.",
                "Technology",
                "2025-01-15",
                ("John Doe", "./assets/images/default-avatar.jpg"),
                "https://images.pexels.com/photos/3861958/pexels-photo-3861958.jpeg",
                1286,
                32,
                true,
            ),
            demo_post(
                2,
                "10 Essential Tips for Creating a Perfect Morning Routine",
                "Discover how to optimize your morning routine for increased productivity, better mental health, and improved overall wellbeing.",
                "Lifestyle",
                "2025-01-13",
                ("Emily Johnson", "./assets/images/user1.jpg"),
                "https://images.pexels.com/photos/1051075/pexels-photo-1051075.jpeg",
                965,
                28,
                true,
            ),
            demo_post(
                3,
                "5 Delicious Plant-Based Recipes for Beginners",
                "Easy, nutritious, and delicious plant-based recipes that anyone can make, regardless of cooking experience.",
                "Food",
                "2025-01-10",
                ("Sarah Wilson", "./assets/images/user2.jpg"),
                "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg",
                789,
                19,
                true,
            ),
            demo_post(
                4,
                "Understanding Cryptocurrency: A Beginner's Guide",
                "Everything you need to know about cryptocurrency, blockchain technology, and how to safely invest in digital assets.",
                "Technology",
                "2025-01-09",
                ("Michael Chen", "./assets/images/user3.jpg"),
                "https://images.pexels.com/photos/844124/pexels-photo-844124.jpeg",
                1342,
                45,
                false,
            ),
            demo_post(
                5,
                "Hidden Gems: Underrated Travel Destinations for 2025",
                "Discover lesser-known travel destinations that offer unique experiences, cultural immersion, and unforgettable memories.",
                "Travel",
                "2025-01-07",
                ("Jessica Lee", "./assets/images/user4.jpg"),
                "https://images.pexels.com/photos/2325446/pexels-photo-2325446.jpeg",
                687,
                17,
                false,
            ),
            demo_post(
                6,
                "The Science of Productivity: How to Get More Done in Less Time",
                "Research-backed strategies and techniques to boost your productivity, improve focus, and achieve your goals more efficiently.",
                "Lifestyle",
                "2025-01-05",
                ("David Wilson", "./assets/images/user5.jpg"),
                "https://images.pexels.com/photos/3243/pen-calendar-to-do-checklist.jpg",
                945,
                23,
                false,
            ),
        ])
    }
}

const DEMO_BODY: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
    Nulla facilisi. Sed euismod, nisl vel ultricies lacinia, nisl nisl aliquam nisl, \
    eget aliquam nisl nisl vel nisl.";

#[allow(clippy::too_many_arguments)]
fn demo_post(
    id: i64,
    title: &str,
    excerpt: &str,
    category: &str,
    date: &str,
    author: (&str, &str),
    thumbnail: &str,
    views: u32,
    comments: u32,
    featured: bool,
) -> Post {
    Post {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: DEMO_BODY.to_string(),
        category: category.to_string(),
        date: date.to_string(),
        author: Author {
            name: author.0.to_string(),
            image: author.1.to_string(),
        },
        thumbnail: thumbnail.to_string(),
        views,
        comments,
        featured,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seeded_ids_unique_and_positive() {
        let store = PostStore::seeded();
        let ids: HashSet<i64> = store.all().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), store.len());
        assert!(store.all().iter().all(|p| p.id > 0));
    }

    #[test]
    fn test_seeded_preserves_insertion_order() {
        let store = PostStore::seeded();
        let ids: Vec<i64> = store.all().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_find_by_id() {
        let store = PostStore::seeded();
        let post = store.find_by_id(3).expect("post 3 missing");
        assert_eq!(post.category, "Food");
        assert!(store.find_by_id(999).is_none());
    }

    #[test]
    fn test_empty_store() {
        let store = PostStore::new(vec![]);
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_seeded_dates_are_iso() {
        let store = PostStore::seeded();
        for post in store.all() {
            assert!(
                chrono::NaiveDate::parse_from_str(&post.date, "%Y-%m-%d").is_ok(),
                "post {} has non-ISO date {}",
                post.id,
                post.date
            );
        }
    }
}
