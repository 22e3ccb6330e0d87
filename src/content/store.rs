//! In-memory post store

use indexmap::IndexMap;
use std::collections::HashSet;

use super::{Catalog, CatalogError, PostDetail, PostId, PostSummary, RelatedPostSummary};

/// Read-only store built once from a [`Catalog`]
#[derive(Debug, Clone)]
pub struct PostStore {
    /// Listing order as authored
    posts: Vec<PostSummary>,
    /// Full posts keyed by id, in authoring order
    details: IndexMap<PostId, PostDetail>,
    related: Vec<RelatedPostSummary>,
}

impl PostStore {
    /// Validate a catalog and render its article bodies
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(catalog.posts.len());
        for post in &catalog.posts {
            check_id("post", post.id)?;
            if !seen.insert(post.id) {
                return Err(CatalogError::DuplicateId {
                    kind: "post",
                    id: post.id,
                });
            }
        }

        let mut details = IndexMap::with_capacity(catalog.details.len());
        for entry in catalog.details {
            let mut post = entry.post;
            check_id("detail", post.id)?;
            post.content = entry.format.render(post.content.as_str());
            let id = post.id;
            if details.insert(id, post).is_some() {
                return Err(CatalogError::DuplicateId { kind: "detail", id });
            }
        }

        tracing::debug!(
            "Post store ready: {} posts, {} details, {} related",
            catalog.posts.len(),
            details.len(),
            catalog.related.len()
        );

        Ok(Self {
            posts: catalog.posts,
            details,
            related: catalog.related,
        })
    }

    /// Store over the embedded reference catalog
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(Catalog::builtin()?)
    }

    /// Exact-match lookup of a full post. `None` means not found.
    pub fn get_detail(&self, id: PostId) -> Option<&PostDetail> {
        self.details.get(&id)
    }

    /// Look up a post from a route segment.
    ///
    /// The segment must be the canonical decimal form of an id: `"1"`
    /// resolves, `" 1"`, `"+1"` and `"01"` do not.
    pub fn resolve(&self, raw: &str) -> Option<&PostDetail> {
        let id: PostId = raw.parse().ok()?;
        if id.to_string() != raw {
            return None;
        }
        self.get_detail(id)
    }

    /// All listing summaries in authoring order
    pub fn list_summaries(&self) -> &[PostSummary] {
        &self.posts
    }

    /// The "top posts" panel. Constant; not derived from any post.
    pub fn list_related(&self) -> &[RelatedPostSummary] {
        &self.related
    }

    /// All full posts in authoring order
    pub fn details(&self) -> impl Iterator<Item = &PostDetail> {
        self.details.values()
    }

    /// Listing summary for an id
    pub fn summary(&self, id: PostId) -> Option<&PostSummary> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Number of listed posts
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

fn check_id(kind: &'static str, id: PostId) -> Result<(), CatalogError> {
    if id > 0 {
        Ok(())
    } else {
        Err(CatalogError::InvalidId { kind, id })
    }
}
