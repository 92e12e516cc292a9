//! Pre-initialization validation.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use super::template::CONFIG_FILE;

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `docsite init` - current directory must not hold a docsite.toml
    CurrentDir,
    /// `docsite init <name>` - directory must be missing or empty
    NewDir,
}

/// Validate target directory for initialization.
///
/// An existing project (with `package.json`, docs, ...) may adopt docsite in
/// place, but an existing docsite.toml is never overwritten.
pub fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            if root.join(CONFIG_FILE).exists() {
                bail!(
                    "'{CONFIG_FILE}' already exists in '{}'.\n\
                     Use `docsite init <name>` to create a new site in a subdirectory.",
                    root.display()
                );
            }
        }
        InitMode::NewDir => {
            if !is_empty(root)? {
                bail!(
                    "Directory '{}' already exists and is not empty.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}

/// Check if directory is empty or doesn't exist.
fn is_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let is_empty = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory '{}'", path.display()))?
        .next()
        .is_none();
    Ok(is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_existing_project_current_mode() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        assert!(validate_target(temp.path(), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_existing_config_current_mode() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "").unwrap();
        let err = validate_target(temp.path(), InitMode::CurrentDir).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_new_dir_mode() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(&temp.path().join("new_site"), InitMode::NewDir).is_ok());
        assert!(validate_target(temp.path(), InitMode::NewDir).is_ok());

        fs::write(temp.path().join("file.txt"), "content").unwrap();
        assert!(validate_target(temp.path(), InitMode::NewDir).is_err());
    }
}
