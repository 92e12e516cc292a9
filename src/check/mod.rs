//! Broken internal link detection for navbar and footer targets.
//!
//! Internal targets (`to = "/blog"`) must map to a doc, a blog route, a
//! standalone page or a static file under the site root. External URLs are
//! never fetched.

mod index;

pub use index::RouteIndex;

use std::fmt;

use owo_colors::{OwoColorize, Stream};

use crate::config::{
    ConfigDiagnostic, ConfigDiagnostics, FieldLocation, FooterConfig, LogoConfig, NavbarConfig,
    ReportingSeverity, SiteConfig,
};
use crate::link::LinkTarget;
use crate::log;
use crate::utils::plural_count;

/// An internal link with no matching path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    /// Where the link is configured (e.g. `navbar.items[0]`).
    pub field: FieldLocation,
    /// The configured target.
    pub target: String,
}

impl fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{} {} {}",
            "[".if_supports_color(Stream::Stdout, |t| t.dimmed()),
            self.field.as_str().if_supports_color(Stream::Stdout, |t| t.cyan()),
            "]".if_supports_color(Stream::Stdout, |t| t.dimmed()),
            "→".if_supports_color(Stream::Stdout, |t| t.red()),
            self.target
        )
    }
}

/// Checks configured internal links against the files on disk.
pub struct LinkChecker<'a> {
    config: &'a SiteConfig,
    index: RouteIndex,
}

impl<'a> LinkChecker<'a> {
    /// Scan the site root of `config`.
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            index: RouteIndex::scan(config),
        }
    }

    pub fn index(&self) -> &RouteIndex {
        &self.index
    }

    /// Every internal navbar, logo and footer target, with its location.
    fn internal_targets(&self) -> Vec<(FieldLocation, String)> {
        let navbar = &self.config.navbar;
        let footer = &self.config.footer;
        let mut targets = Vec::new();

        let mut push = |field: FieldLocation, target: Option<LinkTarget>| {
            if let Some(LinkTarget::Internal(path)) = target {
                targets.push((field, path));
            }
        };

        if let Some(href) = navbar.logo.as_ref().and_then(|l| l.href.as_deref()) {
            push(LogoConfig::FIELDS.href.into(), LinkTarget::parse_str(href).ok());
        }
        for (i, item) in navbar.items.iter().enumerate() {
            push(NavbarConfig::FIELDS.items.at(i), item.target().ok());
        }
        for (i, group) in footer.links.iter().enumerate() {
            let at = FooterConfig::FIELDS.links.at(i);
            for (j, item) in group.items.iter().enumerate() {
                push(at.child_at("items", j), item.target().ok());
            }
        }
        targets
    }

    /// Internal targets that map to no existing path.
    pub fn broken_links(&self) -> Vec<BrokenLink> {
        self.internal_targets()
            .into_iter()
            .filter(|(_, target)| !self.index.contains(target))
            .map(|(field, target)| BrokenLink { field, target })
            .collect()
    }

    /// Report broken links according to `site.on_broken_links`.
    ///
    /// Returns the number of broken links found.
    pub fn report(&self, diag: &mut ConfigDiagnostics) -> usize {
        let severity = self.config.site.on_broken_links;
        if severity == ReportingSeverity::Ignore {
            return 0;
        }

        let broken = self.broken_links();
        for link in &broken {
            let message = format!("broken link `{}`", link.target);
            match severity {
                ReportingSeverity::Throw => diag.error(
                    ConfigDiagnostic::reference(link.field.clone(), message)
                        .with_hint("set site.on_broken_links = \"warn\" to continue anyway"),
                ),
                ReportingSeverity::Warn => diag.warn(link.field.clone(), message),
                ReportingSeverity::Log => log!("check"; "{link}"),
                ReportingSeverity::Ignore => {}
            }
        }

        if !broken.is_empty() {
            log!(
                "check";
                "{} among {}",
                plural_count(broken.len(), "broken link"),
                plural_count(self.index.len(), "known path")
            );
        }
        broken.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DiagnosticKind, SAMPLE_CONFIG, test_parse_config};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn site_with(files: &[&str], content: &str) -> (TempDir, SiteConfig) {
        let dir = TempDir::new().unwrap();
        for rel in files {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
        let mut config = test_parse_config(content);
        config.root = dir.path().to_path_buf();
        (dir, config)
    }

    #[test]
    fn test_sample_site_links() {
        let (_dir, config) = site_with(&["docs/intro.md"], SAMPLE_CONFIG);
        let checker = LinkChecker::new(&config);

        // Navbar and footer both link to /blog, which has no directory
        let broken = checker.broken_links();
        let fields: Vec<_> = broken.iter().map(|b| b.field.as_str()).collect();
        assert_eq!(fields, ["navbar.items[0]", "footer.links[2].items[0]"]);
        assert!(broken.iter().all(|b| b.target == "/blog"));

        let (_dir, config) = site_with(&["docs/intro.md", "blog/2024-01-15-hello.md"], SAMPLE_CONFIG);
        assert!(LinkChecker::new(&config).broken_links().is_empty());
    }

    #[test]
    fn test_severity_levels() {
        let content = r#"
            [[navbar.items]]
            label = "Guide"
            to = "/docs/guide"
        "#;

        let (_dir, config) = site_with(&[], content);
        let mut diag = ConfigDiagnostics::new();
        assert_eq!(LinkChecker::new(&config).report(&mut diag), 1);
        assert_eq!(diag.errors()[0].kind, DiagnosticKind::Reference);
        assert!(diag.errors()[0].message.contains("/docs/guide"));

        let (_dir, config) = site_with(
            &[],
            &format!("[site]\non_broken_links = \"warn\"\n{content}"),
        );
        let mut diag = ConfigDiagnostics::new();
        LinkChecker::new(&config).report(&mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);

        let (_dir, config) = site_with(
            &[],
            &format!("[site]\non_broken_links = \"ignore\"\n{content}"),
        );
        let mut diag = ConfigDiagnostics::new();
        assert_eq!(LinkChecker::new(&config).report(&mut diag), 0);
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_front_matter_routes_resolve() {
        let content = r#"
            [docs]
            route_base_path = "/"

            [[navbar.items]]
            label = "Home"
            to = "/"

            [[navbar.items]]
            label = "Start"
            to = "/getting-started"
        "#;
        let (dir, config) = site_with(&["docs/02-setup.md"], content);
        fs::write(
            dir.path().join("docs/01-intro.md"),
            "---\nid: getting-started\n---\n",
        )
        .unwrap();
        fs::write(dir.path().join("docs/02-setup.md"), "---\nslug: /\n---\n").unwrap();

        let checker = LinkChecker::new(&config);
        assert!(checker.broken_links().is_empty());
        let mut diag = ConfigDiagnostics::new();
        assert_eq!(checker.report(&mut diag), 0);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_static_and_logo_targets() {
        let content = r#"
            [navbar]
            logo = { alt = "Logo", src = "img/logo.svg", href = "/docs/" }

            [[footer.links]]
            title = "Files"
            items = [
                { label = "Slides", to = "/files/slides.pdf" },
                { label = "Anchor", to = "/docs/intro#setup" },
            ]
        "#;
        let (dir, config) = site_with(&["static/files/slides.pdf", "docs/intro.md"], content);
        let broken = LinkChecker::new(&config).broken_links();
        assert_eq!(broken.len(), 1);
        assert_eq!(broken[0].field.as_str(), "navbar.logo.href");

        fs::write(dir.path().join(Path::new("docs/index.md")), "").unwrap();
        assert!(LinkChecker::new(&config).broken_links().is_empty());
    }
}
