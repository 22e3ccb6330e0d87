//! Content module - post records, the catalog and the in-memory store

mod catalog;
pub mod category;
mod error;
pub mod loader;
mod markup;
mod post;
mod store;

pub use catalog::{Catalog, CatalogDetail};
pub use category::Category;
pub use error::CatalogError;
pub use markup::{render_markdown, MarkupFormat, TrustedHtml};
pub use post::{Author, AuthorProfile, PostDetail, PostId, PostSummary, RelatedPostSummary, SocialLinks};
pub use store::PostStore;
