//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::Musoclef;

/// Generate the static site
pub fn run(site: &Musoclef) -> Result<()> {
    let start = std::time::Instant::now();

    tracing::info!(
        "Loaded {} posts and {} related posts",
        site.store.len(),
        site.store.list_related().len()
    );

    let generator = Generator::new(site)?;
    generator.generate()?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}
