//! Blog listing with a one-way "load more" toggle

use serde::Serialize;

use crate::config::ListingConfig;
use crate::content::{category, PostStore, PostSummary};

/// Listing state over the store's summaries
#[derive(Debug, Clone)]
pub struct ListingView<'a> {
    store: &'a PostStore,
    initial_count: usize,
    more_count: usize,
    expanded: bool,
}

/// A listing card
#[derive(Debug, Clone, Serialize)]
pub struct PostCard<'a> {
    #[serde(flatten)]
    pub post: &'a PostSummary,
    pub badge_style: &'static str,
}

impl<'a> ListingView<'a> {
    /// Create a collapsed listing
    pub fn new(store: &'a PostStore, config: &ListingConfig) -> Self {
        Self {
            store,
            initial_count: config.initial_count,
            more_count: config.more_count,
            expanded: false,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Reveal the additional page.
    ///
    /// Returns `true` on the first call only; later calls change nothing.
    pub fn load_more(&mut self) -> bool {
        if self.expanded {
            return false;
        }
        self.expanded = true;
        tracing::debug!(
            "Listing expanded from {} to {} posts",
            self.initial_count,
            self.displayed().len()
        );
        true
    }

    /// Whether the "load more" action is offered instead of the end message
    pub fn has_more(&self) -> bool {
        !self.expanded
    }

    /// Posts currently shown: the initial page, followed by the additional
    /// page once expanded
    pub fn displayed(&self) -> &'a [PostSummary] {
        let posts = self.store.list_summaries();
        let count = if self.expanded {
            self.initial_count.saturating_add(self.more_count)
        } else {
            self.initial_count
        };
        &posts[..count.min(posts.len())]
    }

    /// Cards for the displayed posts
    pub fn cards(&self) -> Vec<PostCard<'a>> {
        self.displayed()
            .iter()
            .map(|post| PostCard {
                post,
                badge_style: category::badge_style(&post.category),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::category::DEFAULT_BADGE_STYLE;
    use crate::content::PostId;

    fn ids(posts: &[PostSummary]) -> Vec<PostId> {
        posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_initial_page() {
        let store = PostStore::builtin().unwrap();
        let listing = ListingView::new(&store, &ListingConfig::default());
        assert!(!listing.is_expanded());
        assert!(listing.has_more());
        assert_eq!(ids(listing.displayed()), (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_load_more_once() {
        let store = PostStore::builtin().unwrap();
        let mut listing = ListingView::new(&store, &ListingConfig::default());

        assert!(listing.load_more());
        assert!(listing.is_expanded());
        assert!(!listing.has_more());
        assert_eq!(listing.displayed().len(), 12);
        assert_eq!(ids(listing.displayed()), (1..=12).collect::<Vec<_>>());

        assert!(!listing.load_more());
        assert!(listing.is_expanded());
        assert_eq!(ids(listing.displayed()), (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_pages_clamp_to_catalog() {
        let store = PostStore::builtin().unwrap();
        let config = ListingConfig {
            initial_count: 10,
            more_count: 10,
            ..ListingConfig::default()
        };
        let mut listing = ListingView::new(&store, &config);
        assert_eq!(listing.displayed().len(), 10);
        listing.load_more();
        assert_eq!(listing.displayed().len(), 12);
    }

    #[test]
    fn test_huge_page_sizes_show_everything() {
        let store = PostStore::builtin().unwrap();
        let config = ListingConfig {
            initial_count: usize::MAX,
            more_count: 3,
            ..ListingConfig::default()
        };
        let mut listing = ListingView::new(&store, &config);
        assert_eq!(listing.displayed().len(), 12);
        assert!(listing.load_more());
        assert_eq!(listing.displayed().len(), 12);
    }

    #[test]
    fn test_cards_carry_badge_style() {
        let store = PostStore::builtin().unwrap();
        let mut listing = ListingView::new(&store, &ListingConfig::default());
        listing.load_more();
        let cards = listing.cards();
        assert_eq!(cards[0].badge_style, "bg-primary text-primary-foreground");
        // CLASSICAL uses the neutral badge
        assert_eq!(cards[10].post.category, "CLASSICAL");
        assert_eq!(cards[10].badge_style, DEFAULT_BADGE_STYLE);
    }
}
