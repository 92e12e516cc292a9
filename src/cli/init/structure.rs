//! Site directory structure creation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::DocsConfig;

/// Create the `[docs]` default directories, and the root if needed.
pub fn create_structure(root: &Path) -> Result<()> {
    let docs = DocsConfig::default();
    let dirs = [docs.path, docs.blog_path, docs.static_dir.join("img")];

    for dir in dirs {
        let dir = root.join(dir);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
    }
    Ok(())
}
