//! Post records: listing summaries, full details and related-post cards

use serde::{Deserialize, Serialize};

use super::TrustedHtml;

/// Post identifier. Valid identifiers are positive.
pub type PostId = i64;

/// Author as shown on a listing card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,

    /// Avatar image reference; empty means "render initials"
    #[serde(default)]
    pub avatar: String,

    pub initials: String,
}

/// A post as shown in the blog listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,

    /// Category tag, e.g. `PIANO`
    pub category: String,

    pub author: Author,

    /// Display-formatted date, never parsed
    pub date: String,

    /// Opaque image reference resolved by the asset pipeline
    pub image: String,

    /// Display label such as "5 min read"
    pub read_time: String,
}

/// Optional social handles of an author
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        self.twitter.is_none() && self.linkedin.is_none() && self.website.is_none()
    }
}

/// Author as shown on a post page, with bio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorProfile {
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    pub initials: String,
    pub bio: String,
    pub role: String,
    #[serde(default)]
    pub social: SocialLinks,
}

/// A full post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: PostId,
    pub title: String,

    /// Rendered article body. Only author-controlled markup ever lands here.
    pub content: TrustedHtml,

    pub category: String,
    pub author: AuthorProfile,
    pub date: String,
    pub image: String,
    pub read_time: String,

    /// Display label such as "2.4K"
    pub views: String,

    /// Display label such as "186"
    pub shares: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// Reduced projection shown in the "top posts" panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedPostSummary {
    pub id: PostId,
    pub title: String,
    pub category: String,
    pub views: String,
    pub shares: String,
    pub image: String,
}
