//! Page view models
//!
//! Views read from a [`PostStore`](crate::content::PostStore) handed to
//! them at construction and produce serialisable models for the templates.

mod detail;
mod listing;

pub use detail::{Article, DetailPage, DetailView, RelatedCard, ShareLink};
pub use listing::{ListingView, PostCard};
