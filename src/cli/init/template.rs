//! Configuration file generation.
//!
//! Creates docsite.toml and ignore files for new sites.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::{
    DocsConfig, FooterConfig, I18nConfig, NavbarConfig, PrismConfig, SiteSectionConfig,
    ThemeSectionConfig,
};

/// Default config filename
pub const CONFIG_FILE: &str = "docsite.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore"];

/// Patterns for build output and dependencies of the site generator
const IGNORE_PATTERNS: &[&str] = &["/build/", "/node_modules/", "/.docusaurus/", ".DS_Store"];

/// Generate docsite.toml content with comments
///
/// Optional `[navbar.logo]`, `[analytics.gtag]` and `[search.algolia]`
/// sections are left out: an empty one would not validate.
pub fn generate_config_template() -> String {
    let sections = [
        SiteSectionConfig::template_with_header(),
        I18nConfig::template_with_header(),
        DocsConfig::template_with_header(),
        ThemeSectionConfig::template_with_header(),
        PrismConfig::template_with_header(),
        NavbarConfig::template_with_header(),
        FooterConfig::template_with_header(),
    ];

    let mut out = format!(
        "# docsite configuration file (v{})\n\
         # Fill in site.title, site.url and i18n.default_locale, then run `docsite check`.\n\n",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str(&sections.join("\n"));
    out
}

/// Write default docsite.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(())
}

/// Write .gitignore with standard patterns, keeping an existing one
pub fn write_ignore_files(root: &Path) -> Result<()> {
    let content = IGNORE_PATTERNS.join("\n") + "\n";

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }
    Ok(())
}
