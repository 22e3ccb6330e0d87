//! Generator module - writes the site as static HTML using the built-in templates

use anyhow::Result;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::content::PostId;
use crate::helpers;
use crate::templates::TemplateRenderer;
use crate::Musoclef;

/// Static site generator
pub struct Generator {
    site: Musoclef,
    renderer: TemplateRenderer,
}

/// What a generation run wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateStats {
    pub pages: usize,
    pub posts: usize,
    pub not_found: usize,
    pub assets: usize,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Musoclef) -> Result<Self> {
        let renderer = TemplateRenderer::new(&site.config)?;

        Ok(Self {
            site: site.clone(),
            renderer,
        })
    }

    /// Generate the entire site
    pub fn generate(&self) -> Result<GenerateStats> {
        let mut stats = GenerateStats::default();

        // Ensure public directory exists
        fs::create_dir_all(&self.site.public_dir)?;

        // Copy image assets
        stats.assets = self.copy_assets()?;

        // Landing page
        self.write_page("", &self.renderer.render_index()?)?;
        stats.pages += 1;

        // Listing, collapsed and expanded
        self.generate_listing_pages()?;
        stats.pages += 2;

        // Post pages
        for id in self.post_ids() {
            let page = self.site.detail().render_id(id);
            if page.is_found() {
                stats.posts += 1;
            } else {
                stats.not_found += 1;
            }
            self.write_page(&helpers::post_path(id), &self.renderer.render_detail(&page)?)?;
        }

        // Fallback for unknown post URLs
        let not_found = self.renderer.render_not_found()?;
        fs::write(self.site.public_dir.join("404.html"), not_found)?;
        stats.pages += 1;

        tracing::info!(
            "Generated {} pages, {} posts ({} without article), {} assets",
            stats.pages,
            stats.posts,
            stats.not_found,
            stats.assets
        );

        Ok(stats)
    }

    /// Write the collapsed listing and the "load more" listing
    fn generate_listing_pages(&self) -> Result<()> {
        let more_url = helpers::url_for(&self.site.config, helpers::listing_more_path());

        let mut listing = self.site.listing();
        let html = self.renderer.render_listing(&listing, &more_url)?;
        self.write_page(helpers::listing_path(), &html)?;

        listing.load_more();
        let html = self.renderer.render_listing(&listing, &more_url)?;
        self.write_page(helpers::listing_more_path(), &html)?;

        Ok(())
    }

    /// Every id that gets a page: listed posts first, then unlisted articles
    fn post_ids(&self) -> Vec<PostId> {
        let store = &self.site.store;
        let mut ids: Vec<PostId> = store.list_summaries().iter().map(|p| p.id).collect();
        for detail in store.details() {
            if !ids.contains(&detail.id) {
                ids.push(detail.id);
            }
        }
        ids
    }

    /// Write `html` to `<public>/<path>/index.html`
    fn write_page(&self, path: &str, html: &str) -> Result<()> {
        let dir = self.site.public_dir.join(path.trim_matches('/'));
        fs::create_dir_all(&dir)?;
        let file = dir.join("index.html");
        fs::write(&file, html)?;
        tracing::debug!("Generated: {:?}", file);
        Ok(())
    }

    /// Copy the asset directory to `<public>/assets`
    fn copy_assets(&self) -> Result<usize> {
        let asset_dir = &self.site.asset_dir;
        if !asset_dir.exists() {
            tracing::debug!("No asset directory at {:?}", asset_dir);
            return Ok(0);
        }

        let dest_root = self.site.public_dir.join("assets");
        let mut copied = 0;

        for entry in WalkDir::new(asset_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || is_hidden(path) {
                continue;
            }

            let relative = path.strip_prefix(asset_dir)?;
            let dest = dest_root.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
            copied += 1;
        }

        Ok(copied)
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}
