//! Site initialization module.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Directory structure creation
//! - [`template`]: Configuration file generation

mod structure;
mod template;
mod validate;

use crate::log;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use template::generate_config_template;
pub use validate::InitMode;

/// Create a new site in `name` (relative to cwd), or in cwd.
///
/// # Steps
/// 1. Validate target directory
/// 2. Create directory structure
/// 3. Write docsite.toml and .gitignore
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(name: Option<&Path>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let (root, mode) = target_root(name)?;
    validate::validate_target(&root, mode)?;

    structure::create_structure(&root)?;
    template::write_config(&root)?;
    template::write_ignore_files(&root)?;

    log!("init"; "site initialized in {}", root.display());
    log!("hint"; "edit {} and run `docsite check`", template::CONFIG_FILE);
    Ok(())
}

/// Resolve the site root and its validation mode.
fn target_root(name: Option<&Path>) -> Result<(PathBuf, InitMode)> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Ok(match name {
        Some(name) => (cwd.join(name), InitMode::NewDir),
        None => (cwd, InitMode::CurrentDir),
    })
}
