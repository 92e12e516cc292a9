//! `[site]` section configuration.
//!
//! Site identity and deployment location.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Mastering Solidity"
//! tagline = "Belajar Solidity dari dasar hingga mahir"
//! favicon = "img/sol.png"
//! url = "https://ms.generasibelajar.com"
//! base_url = "/"
//! organization_name = "Brave-teknologi"
//! project_name = "belajar-solidity"
//! on_broken_links = "throw"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostic, ConfigDiagnostics};
use crate::utils::route::normalize_base_url;

/// How to react to a broken link.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportingSeverity {
    /// Fail the check.
    #[default]
    Throw,
    /// Print a warning and continue.
    Warn,
    /// Print a plain log line.
    Log,
    /// Skip the check entirely.
    Ignore,
}

/// Site identity and deployment location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Site title, shown in the browser tab.
    pub title: String,

    /// Short description shown under the title.
    pub tagline: String,

    /// Favicon path, relative to the static directory.
    pub favicon: Option<String>,

    /// Production URL without path (e.g., "https://docs.example.org").
    pub url: Option<String>,

    /// Path under which the site is served. Must begin and end with `/`.
    #[config(default = "/")]
    pub base_url: String,

    /// Source-hosting organization or user name.
    pub organization_name: Option<String>,

    /// Source-hosting repository name.
    pub project_name: Option<String>,

    /// Social card image, relative to the static directory.
    pub image: Option<String>,

    /// Behavior on broken internal links: throw | warn | log | ignore.
    #[config(default = "throw")]
    pub on_broken_links: ReportingSeverity,

    /// Behavior on broken markdown links: throw | warn | log | ignore.
    #[config(status = deprecated)]
    pub on_broken_markdown_links: ReportingSeverity,

    /// Append or strip trailing slashes of generated URLs.
    pub trailing_slash: Option<bool>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            favicon: None,
            url: None,
            base_url: "/".into(),
            organization_name: None,
            project_name: None,
            image: None,
            on_broken_links: ReportingSeverity::Throw,
            on_broken_markdown_links: ReportingSeverity::Warn,
            trailing_slash: None,
        }
    }
}

impl SiteSectionConfig {
    /// Validate site identity and location.
    ///
    /// # Checks
    /// - `title` is non-empty
    /// - `url` is set and is an http(s) URL with a host
    /// - `base_url` begins and ends with `/`
    /// - `organization_name` and `project_name` are set together
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(
                ConfigDiagnostic::missing(Self::FIELDS.title, "required field is missing")
                    .with_hint(format!("set {}, e.g.: \"My Docs\"", Self::FIELDS.title)),
            );
        }

        match &self.url {
            None => diag.error(
                ConfigDiagnostic::missing(Self::FIELDS.url, "required field is missing")
                    .with_hint(format!(
                        "set {}, e.g.: \"https://docs.example.org\"",
                        Self::FIELDS.url
                    )),
            ),
            Some(url) => self.validate_url(url, diag),
        }

        self.validate_base_url(diag);

        match (&self.organization_name, &self.project_name) {
            (Some(_), None) => diag.warn_with_hint(
                Self::FIELDS.project_name,
                "organization_name is set without project_name, source links are disabled",
                format!("set {}", Self::FIELDS.project_name),
            ),
            (None, Some(_)) => diag.warn_with_hint(
                Self::FIELDS.organization_name,
                "project_name is set without organization_name, source links are disabled",
                format!("set {}", Self::FIELDS.organization_name),
            ),
            _ => {}
        }
    }

    fn validate_url(&self, url: &str, diag: &mut ConfigDiagnostics) {
        let parsed = match url::Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                diag.error(
                    ConfigDiagnostic::invalid(Self::FIELDS.url, format!("invalid URL: {e}"))
                        .with_hint("use format like https://example.com"),
                );
                return;
            }
        };

        if !matches!(parsed.scheme(), "http" | "https") {
            diag.error(
                ConfigDiagnostic::invalid(
                    Self::FIELDS.url,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                )
                .with_hint("use format like https://example.com"),
            );
        }
        if parsed.host_str().is_none() {
            diag.error(
                ConfigDiagnostic::invalid(Self::FIELDS.url, "URL must have a valid host")
                    .with_hint("use format like https://example.com"),
            );
        }

        let path = parsed.path().trim_matches('/');
        if !path.is_empty() {
            diag.warn_with_hint(
                Self::FIELDS.url,
                format!("URL contains the path `/{path}/`, which is ignored"),
                format!("move it into {}: \"/{path}/\"", Self::FIELDS.base_url),
            );
        }
    }

    fn validate_base_url(&self, diag: &mut ConfigDiagnostics) {
        let base = &self.base_url;
        let message = if !base.starts_with('/') {
            "must begin with `/`"
        } else if !base.ends_with('/') {
            "must end with `/`"
        } else if *base != normalize_base_url(base) {
            "must not contain empty path segments"
        } else {
            return;
        };

        diag.error(
            ConfigDiagnostic::invalid(Self::FIELDS.base_url, message)
                .with_hint(format!("use \"{}\"", normalize_base_url(base))),
        );
    }

    /// Repository URL on GitHub, when both source-hosting names are set.
    pub fn source_url(&self) -> Option<String> {
        match (&self.organization_name, &self.project_name) {
            (Some(org), Some(project)) => Some(format!("https://github.com/{org}/{project}")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiagnosticKind;

    fn site(url: &str, base_url: &str) -> SiteSectionConfig {
        SiteSectionConfig {
            title: "Mastering Solidity".into(),
            url: Some(url.into()),
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    fn errors(site: &SiteSectionConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        diag
    }

    #[test]
    fn test_valid_site() {
        let diag = errors(&site("https://ms.generasibelajar.com", "/"));
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_missing_title_and_url() {
        let diag = errors(&SiteSectionConfig::default());
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["site.title", "site.url"]);
        assert!(
            diag.errors()
                .iter()
                .all(|e| e.kind == DiagnosticKind::Missing)
        );
    }

    #[test]
    fn test_base_url_must_be_slash_delimited() {
        for bad in ["docs/", "/docs", "", "/a//b/"] {
            let diag = errors(&site("https://example.org", bad));
            assert_eq!(diag.len(), 1, "base_url {bad:?}");
            assert_eq!(diag.errors()[0].field.as_str(), "site.base_url");
        }
        assert!(errors(&site("https://example.org", "/belajar-solidity/")).is_empty());
    }

    #[test]
    fn test_url_checks() {
        let diag = errors(&site("ftp://files.example.org", "/"));
        assert!(diag.errors()[0].message.contains("scheme 'ftp'"));

        let diag = errors(&site("not a url", "/"));
        assert!(diag.errors()[0].message.contains("invalid URL"));

        let diag = errors(&site("https://example.github.io/project", "/"));
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_source_url() {
        let mut site = site("https://ms.generasibelajar.com", "/");
        assert_eq!(site.source_url(), None);

        site.organization_name = Some("Brave-teknologi".into());
        let diag = errors(&site);
        assert_eq!(diag.warnings()[0].field.as_str(), "site.project_name");

        site.project_name = Some("belajar-solidity".into());
        assert_eq!(
            site.source_url().as_deref(),
            Some("https://github.com/Brave-teknologi/belajar-solidity")
        );
    }
}
