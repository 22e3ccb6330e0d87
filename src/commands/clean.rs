//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Musoclef;

/// Remove the generated site
pub fn run(site: &Musoclef) -> Result<()> {
    if site.public_dir.exists() {
        fs::remove_dir_all(&site.public_dir)?;
        tracing::info!("Deleted: {:?}", site.public_dir);
    }

    Ok(())
}
