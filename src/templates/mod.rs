//! Built-in Musoclef templates using the Tera template engine
//!
//! All templates are embedded directly in the binary.

use anyhow::Result;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::helpers;
use crate::views::{DetailPage, ListingView};

/// Template renderer with the embedded theme
pub struct TemplateRenderer {
    tera: Tera,
    config: SiteConfig,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut tera = Tera::default();

        // Autoescaping stays on for `.html`; article bodies and URLs built
        // by the helpers are marked `safe` in the templates.
        tera.add_raw_templates(vec![
            ("layout.html", include_str!("musoclef/layout.html")),
            ("index.html", include_str!("musoclef/index.html")),
            ("blogs.html", include_str!("musoclef/blogs.html")),
            ("post.html", include_str!("musoclef/post.html")),
            ("not_found.html", include_str!("musoclef/not_found.html")),
            // Partials
            (
                "partials/avatar.html",
                include_str!("musoclef/partials/avatar.html"),
            ),
            (
                "partials/post_card.html",
                include_str!("musoclef/partials/post_card.html"),
            ),
            (
                "partials/related.html",
                include_str!("musoclef/partials/related.html"),
            ),
        ])?;

        // Register custom filters
        tera.register_filter("strip_html", strip_html_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);

        let post_config = config.clone();
        tera.register_filter(
            "post_url",
            move |value: &tera::Value, _args: &HashMap<String, tera::Value>| {
                let id = tera::try_get_value!("post_url", "value", i64, value);
                Ok(tera::Value::String(helpers::url_for(
                    &post_config,
                    &helpers::post_path(id),
                )))
            },
        );

        let asset_config = config.clone();
        tera.register_filter(
            "asset_url",
            move |value: &tera::Value, _args: &HashMap<String, tera::Value>| {
                let image = tera::try_get_value!("asset_url", "value", String, value);
                Ok(tera::Value::String(helpers::asset_url(&asset_config, &image)))
            },
        );

        Ok(Self {
            tera,
            config: config.clone(),
        })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Landing page
    pub fn render_index(&self) -> Result<String> {
        let mut context = self.base_context(&self.config.title);
        context.insert("listing_url", &helpers::url_for(&self.config, helpers::listing_path()));
        self.render("index.html", &context)
    }

    /// Blog listing. `load_more_url` is where the "load more" button points.
    pub fn render_listing(&self, listing: &ListingView<'_>, load_more_url: &str) -> Result<String> {
        let mut context = self.base_context(&self.config.listing.heading);
        context.insert("listing", &self.config.listing);
        context.insert("cards", &listing.cards());
        context.insert("has_more", &listing.has_more());
        context.insert("load_more_url", load_more_url);
        self.render("blogs.html", &context)
    }

    /// Post page, or the not-found fallback
    pub fn render_detail(&self, page: &DetailPage<'_>) -> Result<String> {
        match page {
            DetailPage::Article(article) => {
                let mut context = self.base_context(&article.post.title);
                context.insert("article", article);
                context.insert("listing_url", &helpers::url_for(&self.config, helpers::listing_path()));
                context.insert("share", &self.config.share);
                self.render("post.html", &context)
            }
            DetailPage::NotFound => self.render_not_found(),
        }
    }

    /// "Post Not Found" fallback
    pub fn render_not_found(&self) -> Result<String> {
        let mut context = self.base_context("Post Not Found");
        context.insert("listing_url", &helpers::url_for(&self.config, helpers::listing_path()));
        self.render("not_found.html", &context)
    }

    fn base_context(&self, page_title: &str) -> Context {
        let mut context = Context::new();
        context.insert("config", &self.config);
        context.insert("page_title", page_title);
        context.insert("home_url", &helpers::url_for(&self.config, ""));
        context
    }
}

/// Tera filter: strip HTML tags
fn strip_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("strip_html", "value", String, value);
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    Ok(tera::Value::String(
        result.split_whitespace().collect::<Vec<_>>().join(" "),
    ))
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 160,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "...".to_string(),
    };

    if s.chars().count() <= length {
        Ok(tera::Value::String(s))
    } else {
        let truncated: String = s.chars().take(length).collect();
        Ok(tera::Value::String(format!(
            "{}{}",
            truncated.trim_end(),
            omission
        )))
    }
}
