//! Site configuration management for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # One module per TOML section
//! ├── types/         # Field paths, diagnostics, errors, field status
//! ├── placeholder    # Scaffold leftovers
//! ├── util           # Config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section             | Purpose                                      |
//! |---------------------|----------------------------------------------|
//! | `[site]`            | Title, url, base url, source hosting         |
//! | `[i18n]`            | Default and published locales                |
//! | `[docs]`            | Content roots, routes, edit links            |
//! | `[theme]`           | Color mode, `[theme.prism]` highlighting     |
//! | `[navbar]`          | Top navigation                               |
//! | `[footer]`          | Footer links and copyright                   |
//! | `[analytics.gtag]`  | Google tag, passed through untouched         |
//! | `[search.algolia]`  | Algolia DocSearch, passed through untouched  |
//!
//! # Lifecycle
//!
//! `load` reads the file once, applies CLI overrides, fills defaults and
//! validates. The result is never mutated afterwards.

mod placeholder;
pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    AlgoliaConfig, AnalyticsConfig, ColorMode, DocsConfig, FooterConfig, FooterGroup, FooterStyle,
    GtagConfig, I18nConfig, LinkItem, LogoConfig, NavPosition, NavbarConfig, NavbarItem,
    PrismConfig, PrismTheme, ReportingSeverity, SearchConfig, SiteSectionConfig,
    ThemeSectionConfig,
};
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, DiagnosticKind, FieldLocation, FieldPath,
};

use crate::{debug, utils::route::join_base};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// How `SiteConfig::load` finds and adjusts the configuration.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Config file name or path. Relative names are searched upward from cwd.
    pub config: PathBuf,
    /// Overrides `site.url`.
    pub url: Option<String>,
    /// Overrides `site.base_url`.
    pub base_url: Option<String>,
    /// Treat warnings as errors.
    pub strict: bool,
}

impl LoadOptions {
    pub fn new(config: impl Into<PathBuf>) -> Self {
        Self {
            config: config.into(),
            ..Default::default()
        }
    }
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docsite.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Keys present in the file but not understood (internal use only)
    #[serde(skip)]
    pub unknown_fields: Vec<String>,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub i18n: I18nConfig,

    #[serde(default)]
    pub docs: DocsConfig,

    #[serde(default)]
    pub theme: ThemeSectionConfig,

    #[serde(default)]
    pub navbar: NavbarConfig,

    #[serde(default)]
    pub footer: FooterConfig,

    #[serde(default)]
    pub analytics: AnalyticsConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

impl SiteConfig {
    /// Locate, read, parse, finalize and validate the configuration.
    ///
    /// Relative config names are searched upward from cwd. The site root is
    /// the config file's parent directory.
    pub fn load(opts: &LoadOptions) -> Result<Self> {
        let Some(config_path) = find_config_file(&opts.config) else {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found, run 'docsite init' to create one",
                opts.config.display()
            )));
        };
        debug!("config"; "loading {}", config_path.display());

        let mut config = Self::from_path(&config_path)?;
        config.finalize(opts);
        config.validate_with(opts.strict)?;
        Ok(config)
    }

    /// Parse configuration from a TOML string. Unknown keys are ignored.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Read and parse a config file, recording unknown keys.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)
            .map_err(|err| ConfigError::Parse(path.to_path_buf(), err))?;

        config.config_path = path.to_path_buf();
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.unknown_fields = ignored;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Apply CLI overrides and fill derived defaults.
    fn finalize(&mut self, opts: &LoadOptions) {
        if let Some(url) = &opts.url {
            self.site.url = Some(url.clone());
        }
        if let Some(base_url) = &opts.base_url {
            self.site.base_url = base_url.clone();
        }
        self.i18n.normalize();
    }

    /// Get the site root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the site root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, failing once with all errors.
    pub fn validate(&self) -> Result<()> {
        self.validate_with(false)
    }

    /// Like [`validate`](Self::validate), optionally promoting warnings to errors.
    pub fn validate_with(&self, strict: bool) -> Result<()> {
        let mut diag = self.diagnostics();
        if strict {
            diag.promote_warnings();
        }

        // Print collected hints and warnings (grouped display)
        diag.print_hints_and_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Collect every error and warning without printing anything.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        for field in &self.unknown_fields {
            diag.warn(
                FieldLocation::from(field.clone()),
                "unknown field, ignored",
            );
        }

        // Field status (experimental, deprecated, not_implemented)
        self.site.validate_field_status(&mut diag);
        self.i18n.validate_field_status(&mut diag);
        self.docs.validate_field_status(&mut diag);
        self.theme.validate_status(&mut diag);
        self.navbar.validate_field_status(&mut diag);
        self.footer.validate_field_status(&mut diag);

        self.site.validate(&mut diag);
        self.i18n.validate(&mut diag);
        self.docs.validate(&mut diag);
        self.theme.validate(&mut diag);
        self.navbar.validate(&mut diag);
        self.footer.validate(&mut diag);
        self.analytics.validate(&mut diag);
        self.search.validate(&mut diag);

        // On-disk checks only once the file location is known
        if !self.root.as_os_str().is_empty() {
            self.docs.validate_paths(&self.root, &mut diag);
            self.theme.validate_paths(&self.root, &mut diag);
            self.validate_static_files(&mut diag);
        }

        placeholder::check(self, &mut diag);
        diag
    }

    /// Warn when `favicon`, `image` or the navbar logo are missing from the static directory.
    fn validate_static_files(&self, diag: &mut ConfigDiagnostics) {
        let static_dir = self.root.join(&self.docs.static_dir);
        let logo = self.navbar.logo.as_ref();
        let files = [
            (SiteSectionConfig::FIELDS.favicon, self.site.favicon.as_deref()),
            (SiteSectionConfig::FIELDS.image, self.site.image.as_deref()),
            (LogoConfig::FIELDS.src, logo.map(|l| l.src.as_str())),
            (LogoConfig::FIELDS.src_dark, logo.and_then(|l| l.src_dark.as_deref())),
        ];
        for (field, file) in files {
            if let Some(file) = file.filter(|f| !f.is_empty())
                && !static_dir.join(file.trim_start_matches('/')).is_file()
            {
                diag.warn(
                    field,
                    format!(
                        "file `{file}` not found in `{}`",
                        self.docs.static_dir.display()
                    ),
                );
            }
        }
    }

    // ========================================================================
    // derived URLs
    // ========================================================================

    /// Absolute URL of an internal site path (`url` + `base_url` + `path`).
    ///
    /// # Examples
    /// ```ignore
    /// // url = "https://ms.generasibelajar.com", base_url = "/belajar/"
    /// config.permalink("/blog") // Some("https://ms.generasibelajar.com/belajar/blog")
    /// ```
    pub fn permalink(&self, path: &str) -> Option<String> {
        let url = self.site.url.as_deref()?;
        Some(format!(
            "{}{}",
            url.trim_end_matches('/'),
            join_base(&self.site.base_url, path)
        ))
    }

    /// Repository URL built from `organization_name` and `project_name`.
    pub fn source_url(&self) -> Option<String> {
        self.site.source_url()
    }

    /// "Edit this page" URL of a document, given its path inside `docs.path`.
    ///
    /// Uses `docs.edit_url` when set, else the GitHub repository's `main` branch.
    pub fn edit_url_for(&self, doc: &str) -> Option<String> {
        let base = match &self.docs.edit_url {
            Some(edit_url) => edit_url.trim_end_matches('/').to_string(),
            None => format!("{}/edit/main", self.source_url()?),
        };
        let docs_dir = self.docs.path.to_string_lossy();
        let docs_dir = docs_dir.trim_matches('/');
        let doc = doc.trim_start_matches('/');
        Some(if docs_dir.is_empty() {
            format!("{base}/{doc}")
        } else {
            format!("{base}/{docs_dir}/{doc}")
        })
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config content, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (mut parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed.i18n.normalize();
    parsed
}

/// The configuration of a real documentation site, in docsite.toml form.
#[cfg(test)]
pub const SAMPLE_CONFIG: &str = r#"
[site]
title = "Mastering Solidity"
tagline = "Belajar Solidity dari dasar hingga mahir"
favicon = "img/sol.png"
url = "https://ms.generasibelajar.com"
base_url = "/"
organization_name = "Brave-teknologi"
project_name = "belajar-solidity"
image = "img/card.png"
on_broken_links = "throw"

[i18n]
default_locale = "id"
locales = ["id"]

[docs]
sidebar_path = "sidebars.ts"
edit_url = "https://github.com/Brave-teknologi/belajar-solidity/edit/main"
route_base_path = "/"

[theme]
custom_css = "src/css/custom.css"

[theme.prism]
theme = "github"
dark_theme = "dracula"
additional_languages = ["solidity"]

[navbar]
title = "Mastering Solidity"
logo = { alt = "Mastering Solidity Logo", src = "img/sol.png" }

[[navbar.items]]
to = "/blog"
label = "Blog"
position = "left"

[[navbar.items]]
href = "https://github.com/Brave-teknologi/belajar-solidity"
label = "GitHub"
position = "right"

[footer]
style = "dark"
copyright = "Copyright © {year} Generasibelajar. Presented by Braveteknologi."

[[footer.links]]
title = "Legal"
items = [
    { label = "Privacy", to = "https://generasibelajar.com/privacy" },
    { label = "Terms", to = "https://generasibelajar.com/terms" },
]

[[footer.links]]
title = "Komunitas"
items = [
    { label = "Discord", href = "https://discordapp.com/invite/docusaurus" },
    { label = "X", href = "https://x.com/gen_belajar" },
]

[[footer.links]]
title = "Lainnya"
items = [
    { label = "Blog", to = "/blog" },
    { label = "GitHub", href = "https://github.com/Brave-teknologi/belajar-solidity" },
]

[analytics.gtag]
tracking_id = "G-PTLCNENXEL"
anonymize_ip = true

[search.algolia]
app_id = "CT3U9DBRZS"
api_key = "1bdfd826e699f2b7bb82938dd2e66f4d"
index_name = "ms-generasibelajar"
"#;

// ============================================================================
// tests
// ============================================================================
