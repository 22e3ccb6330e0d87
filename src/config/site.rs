//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub public_dir: String,
    pub asset_dir: String,

    /// Catalog file (YAML or JSON). The embedded catalog is used when unset.
    pub catalog: Option<String>,

    // Blog listing
    #[serde(default)]
    pub listing: ListingConfig,

    // Social sharing
    #[serde(default)]
    pub share: ShareConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Musoclef".to_string(),
            subtitle: "Welcome to Musoclef".to_string(),
            description: "Your ultimate destination for music learning, practice, and musical \
                          growth. Discover expert tutorials, tips, and insights to master your \
                          musical journey."
                .to_string(),

            url: "http://localhost:4000".to_string(),
            root: "/".to_string(),

            public_dir: "public".to_string(),
            asset_dir: "assets".to_string(),

            catalog: None,

            listing: ListingConfig::default(),
            share: ShareConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Serialize the configuration back to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Blog listing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Number of posts shown before "load more"
    pub initial_count: usize,
    /// Number of posts revealed by "load more"
    pub more_count: usize,
    pub heading: String,
    pub tagline: String,
    pub end_message: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            initial_count: 9,
            more_count: 3,
            heading: "Musoclef Blog".to_string(),
            tagline: "Discover expert tips, tutorials, and insights to accelerate your musical \
                      journey"
                .to_string(),
            end_message: "You've reached the end! 🎵 Check back soon for more amazing content."
                .to_string(),
        }
    }
}

/// Share popup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub popup_width: u32,
    pub popup_height: u32,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            popup_width: 600,
            popup_height: 400,
        }
    }
}
