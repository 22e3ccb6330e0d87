//! Article markup and the trust boundary around it
//!
//! Post bodies are emitted into pages without escaping. The only way to
//! obtain a [`TrustedHtml`] is through the catalog, which is authored by
//! the site owner; there is no sanitizer, so user-submitted text must
//! never be wrapped in one.

use pulldown_cmark::{html, Options, Parser};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Author-controlled HTML that templates render verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    /// Wrap markup from a trusted source (the site catalog).
    pub fn from_trusted(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source format of an article body in the catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupFormat {
    #[default]
    Html,
    Markdown,
}

impl MarkupFormat {
    /// Turn a catalog body in this format into trusted HTML
    pub fn render(self, body: &str) -> TrustedHtml {
        match self {
            MarkupFormat::Html => TrustedHtml::from_trusted(body),
            MarkupFormat::Markdown => TrustedHtml::from_trusted(render_markdown(body)),
        }
    }
}

/// Render markdown to HTML
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_SMART_PUNCTUATION;
    let parser = Parser::new_ext(markdown, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
