//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::content::Catalog;

/// File name the reference catalog is exported to
const CATALOG_FILE: &str = "catalog.yml";

/// Initialize a new site in the given directory.
///
/// Writes `_config.yml` pointing at an editable copy of the reference
/// catalog and creates the asset directory. Existing files are left alone.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let config = SiteConfig {
        catalog: Some(CATALOG_FILE.to_string()),
        ..SiteConfig::default()
    };
    fs::create_dir_all(target_dir.join(&config.asset_dir))?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        tracing::warn!("{:?} already exists, skipping", config_path);
    } else {
        let content = format!("# Musoclef Configuration\n\n{}", config.to_yaml()?);
        fs::write(&config_path, content)?;
        tracing::info!("Created: {:?}", config_path);
    }

    let catalog_path = target_dir.join(CATALOG_FILE);
    if catalog_path.exists() {
        tracing::warn!("{:?} already exists, skipping", catalog_path);
    } else {
        fs::write(&catalog_path, Catalog::builtin()?.to_yaml()?)?;
        tracing::info!("Created: {:?}", catalog_path);
    }

    Ok(())
}
