//! musoclef: content front-end for the Musoclef music-learning blog
//!
//! The site is a landing page, a blog listing with a one-way "load more"
//! toggle and post pages with sharing links. All content comes from an
//! in-memory catalog; pages are served by an axum server or written out
//! as static HTML.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod share;
pub mod templates;
pub mod views;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use content::loader::CatalogLoader;
use content::PostStore;

/// The main application
#[derive(Clone)]
pub struct Musoclef {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Image asset directory
    pub asset_dir: PathBuf,
    /// Content, shared read-only
    pub store: Arc<PostStore>,
}

impl Musoclef {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let store = CatalogLoader::new(&config, &base_dir).load_store()?;
        tracing::debug!("Loaded {} posts", store.len());

        Ok(Self::with_store(config, base_dir, store))
    }

    /// Create an instance over an explicit store
    pub fn with_store(config: config::SiteConfig, base_dir: PathBuf, store: PostStore) -> Self {
        let public_dir = base_dir.join(&config.public_dir);
        let asset_dir = base_dir.join(&config.asset_dir);

        Self {
            config,
            base_dir,
            public_dir,
            asset_dir,
            store: Arc::new(store),
        }
    }

    /// A collapsed blog listing
    pub fn listing(&self) -> views::ListingView<'_> {
        views::ListingView::new(&self.store, &self.config.listing)
    }

    /// The post page view
    pub fn detail(&self) -> views::DetailView<'_> {
        views::DetailView::new(&self.store, &self.config)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
