//! Catalog loader - reads the configured catalog file or falls back to the embedded one

use std::fs;
use std::path::{Path, PathBuf};

use super::{Catalog, CatalogError, PostStore};
use crate::config::SiteConfig;

/// Loads the site catalog
pub struct CatalogLoader<'a> {
    config: &'a SiteConfig,
    base_dir: &'a Path,
}

impl<'a> CatalogLoader<'a> {
    /// Create a new catalog loader
    pub fn new(config: &'a SiteConfig, base_dir: &'a Path) -> Self {
        Self { config, base_dir }
    }

    /// Path of the configured catalog file, if any
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.config.catalog.as_ref().map(|p| {
            let path = PathBuf::from(p);
            if path.is_absolute() {
                path
            } else {
                self.base_dir.join(path)
            }
        })
    }

    /// Load the catalog
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match self.catalog_path() {
            Some(path) => {
                tracing::debug!("Loading catalog from {:?}", path);
                load_file(&path)
            }
            None => {
                tracing::debug!("Using embedded catalog");
                Catalog::builtin()
            }
        }
    }

    /// Load the catalog and build the store
    pub fn load_store(&self) -> Result<PostStore, CatalogError> {
        PostStore::new(self.load_catalog()?)
    }
}

/// Load a catalog file, choosing the parser by extension
pub fn load_file(path: &Path) -> Result<Catalog, CatalogError> {
    let ext = path.extension().and_then(|e| e.to_str());
    let content = fs::read_to_string(path)?;
    match ext {
        Some("yml") | Some("yaml") => Catalog::from_yaml(&content),
        Some("json") => Catalog::from_json(&content),
        other => Err(CatalogError::UnsupportedFormat(
            other.unwrap_or_default().to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_catalog_without_config() {
        let config = SiteConfig::default();
        let dir = TempDir::new().unwrap();
        let loader = CatalogLoader::new(&config, dir.path());
        assert!(loader.catalog_path().is_none());
        let store = loader.load_store().unwrap();
        assert_eq!(store.len(), 12);
    }

    #[test]
    fn test_catalog_file_relative_to_base() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("catalog.yml"),
            "related:\n  - { id: 9, title: Mixing, category: PRODUCTION, views: \"1K\", shares: \"12\", image: mix.jpg }\n",
        )
        .unwrap();

        let config = SiteConfig {
            catalog: Some("catalog.yml".to_string()),
            ..SiteConfig::default()
        };
        let loader = CatalogLoader::new(&config, dir.path());
        let store = loader.load_store().unwrap();
        assert!(store.is_empty());
        assert_eq!(store.list_related()[0].title, "Mixing");
    }

    #[test]
    fn test_json_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, r#"{"posts": []}"#).unwrap();
        assert!(load_file(&path).unwrap().posts.is_empty());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(&path, "").unwrap();
        assert!(matches!(
            load_file(&path),
            Err(CatalogError::UnsupportedFormat(ext)) if ext == "toml"
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_file(&dir.path().join("missing.yml")),
            Err(CatalogError::Io(_))
        ));
    }
}
