use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Feed tuning knobs, read from an optional `feed.toml`. Every field has a
/// default so a missing or partial file still yields a working feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub posts_per_page: usize,
    pub date_format: String,
    pub excerpt_words: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            posts_per_page: crate::feed::paginator::DEFAULT_PAGE_SIZE,
            date_format: "%B %d, %Y".to_string(),
            excerpt_words: 40,
        }
    }
}

impl FeedConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return FeedConfig::default(),
        };
        match toml::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("invalid {}: {}; using defaults", path.display(), e);
                FeedConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FeedConfig::default();
        assert_eq!(config.posts_per_page, 6);
        assert_eq!(config.date_format, "%B %d, %Y");
        assert_eq!(config.excerpt_words, 40);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: FeedConfig = toml::from_str("posts_per_page = 2").unwrap();
        assert_eq!(config.posts_per_page, 2);
        assert_eq!(config.date_format, "%B %d, %Y");
    }

    #[test]
    fn test_full_toml() {
        let config: FeedConfig = toml::from_str(
            "posts_per_page = 3\ndate_format = \"%Y-%m-%d\"\nexcerpt_words = 12\n",
        )
        .unwrap();
        assert_eq!(config.posts_per_page, 3);
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert_eq!(config.excerpt_words, 12);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = FeedConfig::load("/nonexistent/feed.toml");
        assert_eq!(config.posts_per_page, 6);
    }
}
