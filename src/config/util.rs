//! Configuration file discovery.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// An absolute `config_name` is returned as-is when it exists. Otherwise
/// starts from cwd and walks up parent directories until finding `config_name`.
///
/// # Example
/// ```text
/// /home/user/site/docs/guides/  ← cwd
/// /home/user/site/docsite.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_upward(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
fn find_upward(start: &Path, config_name: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_upward() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("docs/guides/advanced");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("docsite.toml"), "").unwrap();

        assert_eq!(
            find_upward(&nested, Path::new("docsite.toml")),
            Some(dir.path().join("docsite.toml"))
        );
        assert_eq!(find_upward(&nested, Path::new("missing-docsite.toml")), None);
    }

    #[test]
    fn test_find_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        assert_eq!(find_config_file(&path), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path), Some(path));
    }

    #[test]
    fn test_directory_is_not_a_config() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("docsite.toml")).unwrap();
        assert_eq!(find_upward(dir.path(), Path::new("docsite.toml")), None);
    }
}
