//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const POST: &str = include_str!("../assets/post.css");

/// Writes bundled CSS assets into `assets_dir`, creating it if needed.
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!(
            "Failed to create assets directory: {}",
            assets_dir.display()
        )
    })?;

    let path = assets_dir.join("post.css");
    fs::write(&path, POST)
        .with_context(|| format!("Failed to write CSS asset: {}", path.display()))
}
