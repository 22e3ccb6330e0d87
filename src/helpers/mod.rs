//! Helper functions for templates and views

mod url;

pub use url::*;
