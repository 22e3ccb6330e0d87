//! Single post page

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{category, PostDetail, PostId, PostStore, RelatedPostSummary};
use crate::helpers;
use crate::share::{self, Platform, ShareAction};

/// Result of rendering a post page
#[derive(Debug, Clone)]
pub enum DetailPage<'a> {
    Article(Article<'a>),
    /// Fallback page: headline and a link back to the listing, nothing else
    NotFound,
}

impl DetailPage<'_> {
    pub fn is_found(&self) -> bool {
        matches!(self, DetailPage::Article(_))
    }
}

/// Everything shown on a found post page
#[derive(Debug, Clone, Serialize)]
pub struct Article<'a> {
    pub post: &'a PostDetail,
    pub badge_style: &'static str,
    /// Public URL of this page
    pub permalink: String,
    pub share_links: Vec<ShareLink>,
    pub related: Vec<RelatedCard<'a>>,
}

/// A share button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLink {
    pub platform: &'static str,
    pub label: &'static str,
    /// Outbound URL, or the raw page URL for the copy button
    pub href: String,
    pub copy: bool,
}

/// A card in the "top posts" panel
#[derive(Debug, Clone, Serialize)]
pub struct RelatedCard<'a> {
    #[serde(flatten)]
    pub post: &'a RelatedPostSummary,
    pub badge_style: &'static str,
}

/// Renders post pages from the store
#[derive(Debug, Clone, Copy)]
pub struct DetailView<'a> {
    store: &'a PostStore,
    config: &'a SiteConfig,
}

impl<'a> DetailView<'a> {
    pub fn new(store: &'a PostStore, config: &'a SiteConfig) -> Self {
        Self { store, config }
    }

    /// Render the page for a route segment
    pub fn render(&self, id: &str) -> DetailPage<'a> {
        match self.store.resolve(id) {
            Some(post) => DetailPage::Article(self.article(post)),
            None => {
                tracing::debug!("Post {:?} not found", id);
                DetailPage::NotFound
            }
        }
    }

    /// Render the page for a numeric id
    pub fn render_id(&self, id: PostId) -> DetailPage<'a> {
        match self.store.get_detail(id) {
            Some(post) => DetailPage::Article(self.article(post)),
            None => DetailPage::NotFound,
        }
    }

    /// Build a share action for an arbitrary page. Unknown platforms are a no-op.
    pub fn share(&self, platform: &str, current_url: &str, post_title: &str) -> Option<ShareAction> {
        share::share(platform, current_url, post_title, &self.config.share)
    }

    /// Build a share action for a stored post's page
    pub fn share_post(&self, id: PostId, platform: &str) -> Option<ShareAction> {
        let post = self.store.get_detail(id)?;
        let permalink = helpers::post_permalink(self.config, post.id);
        self.share(platform, &permalink, &post.title)
    }

    fn article(&self, post: &'a PostDetail) -> Article<'a> {
        let permalink = helpers::post_permalink(self.config, post.id);
        let share_links = Platform::ALL
            .iter()
            .map(|platform| ShareLink {
                platform: platform.as_str(),
                label: platform.label(),
                href: platform
                    .outbound_url(&permalink, &post.title)
                    .unwrap_or_else(|| permalink.clone()),
                copy: *platform == Platform::Copy,
            })
            .collect();

        let related = self
            .store
            .list_related()
            .iter()
            .map(|post| RelatedCard {
                post,
                badge_style: category::badge_style(&post.category),
            })
            .collect();

        Article {
            post,
            badge_style: category::badge_style(&post.category),
            permalink,
            share_links,
            related,
        }
    }
}
