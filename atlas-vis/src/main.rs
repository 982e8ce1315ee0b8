//! Atlas page exporter.
//!
//! Builds the Aegis memory atlas from the built-in catalog and writes the
//! self-contained HTML page. Style tuning comes from `atlas.toml` in the
//! working directory when present; an optional positional argument
//! overrides the output path.

use std::path::{Path, PathBuf};

use atlas_core::{AtlasConfig, Catalog};
use atlas_vis::AtlasPage;
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let output = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("aegis-atlas.html"), PathBuf::from);

    let config_path = Path::new("atlas.toml");
    let config = if config_path.exists() {
        info!(path = %config_path.display(), "loading style configuration");
        AtlasConfig::from_file(config_path)?
    } else {
        AtlasConfig::default()
    };

    let page = AtlasPage::new(&Catalog::aegis(), config)?;
    page.write_to(&output)?;

    Ok(())
}
