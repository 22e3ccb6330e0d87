//! Catalog: the serialisable form of all site content

use serde::{Deserialize, Serialize};

use super::{CatalogError, MarkupFormat, PostDetail, PostSummary, RelatedPostSummary};

/// Reference content compiled into the binary
const BUILTIN_CATALOG: &str = include_str!("catalog.yml");

/// All posts, details and related cards, in authoring order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub posts: Vec<PostSummary>,

    #[serde(default)]
    pub details: Vec<CatalogDetail>,

    #[serde(default)]
    pub related: Vec<RelatedPostSummary>,
}

/// A detail record as authored, before its body is rendered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDetail {
    #[serde(default)]
    pub format: MarkupFormat,

    #[serde(flatten)]
    pub post: PostDetail,
}

impl Catalog {
    /// The embedded reference catalog
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_yaml(&self) -> Result<String, CatalogError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
