//! `[navbar]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [navbar]
//! title = "Mastering Solidity"
//! logo = { alt = "Solidity Logo", src = "img/sol.png" }
//!
//! [[navbar.items]]
//! label = "Tutorial"
//! to = "/docs/intro"
//! position = "left"
//!
//! [[navbar.items]]
//! label = "GitHub"
//! href = "https://github.com/Brave-teknologi/belajar-solidity"
//! position = "right"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use super::item::check_link;
use crate::config::{ConfigDiagnostic, ConfigDiagnostics};
use crate::link::{LinkTarget, LinkTargetError};

/// Side of the navbar an item is placed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Left,
    Right,
}

/// A navbar entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarItem {
    pub label: String,
    pub to: Option<String>,
    pub href: Option<String>,
    pub position: NavPosition,
}

impl NavbarItem {
    pub fn target(&self) -> Result<LinkTarget, LinkTargetError> {
        LinkTarget::parse(self.to.as_deref(), self.href.as_deref())
    }
}

/// Navbar logo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "navbar.logo")]
pub struct LogoConfig {
    /// Alternative text.
    pub alt: String,

    /// Image path, relative to the static directory.
    pub src: String,

    /// Image used in dark mode.
    pub src_dark: Option<String>,

    /// Link target of the logo. Defaults to the base URL.
    pub href: Option<String>,
}

/// Top navigation bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "navbar")]
pub struct NavbarConfig {
    /// Text shown next to the logo.
    pub title: Option<String>,

    /// Hide the navbar while scrolling down.
    pub hide_on_scroll: bool,

    /// Logo image.
    #[config(skip)]
    pub logo: Option<LogoConfig>,

    /// Entries, in display order.
    pub items: Vec<NavbarItem>,
}

impl NavbarConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(logo) = &self.logo {
            if logo.src.trim().is_empty() {
                diag.error(ConfigDiagnostic::missing(
                    LogoConfig::FIELDS.src,
                    "logo has no image source",
                ));
            }
            if logo.alt.trim().is_empty() {
                diag.warn(LogoConfig::FIELDS.alt, "logo has no alternative text");
            }
            if let Some(href) = &logo.href
                && let Err(e) = LinkTarget::parse_str(href)
            {
                diag.error(ConfigDiagnostic::invalid(LogoConfig::FIELDS.href, e.to_string()));
            }
        }

        for (i, item) in self.items.iter().enumerate() {
            check_link(&Self::FIELDS.items.at(i), &item.label, item.target(), diag);
        }
    }

    /// Items placed on the given side, in configured order.
    pub fn items_at(&self, position: NavPosition) -> impl Iterator<Item = &NavbarItem> {
        self.items.iter().filter(move |i| i.position == position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> NavbarConfig {
        toml::from_str(content).unwrap()
    }

    fn check(navbar: &NavbarConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        navbar.validate(&mut diag);
        diag
    }

    #[test]
    fn test_parse_navbar() {
        let navbar = parse(
            r#"
            title = "Mastering Solidity"
            logo = { alt = "Solidity Logo", src = "img/sol.png" }

            [[items]]
            label = "Tutorial"
            to = "/docs/intro"

            [[items]]
            label = "GitHub"
            href = "https://github.com/Brave-teknologi/belajar-solidity"
            position = "right"
            "#,
        );
        assert!(check(&navbar).is_empty());
        assert_eq!(navbar.items_at(NavPosition::Left).count(), 1);
        assert_eq!(
            navbar.items_at(NavPosition::Right).next().map(|i| i.label.as_str()),
            Some("GitHub")
        );
    }

    #[test]
    fn test_empty_label_fails() {
        let navbar = parse(
            r#"
            [[items]]
            label = ""
            to = "/blog"
            "#,
        );
        let diag = check(&navbar);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "navbar.items[0].label");
        assert!(diag.to_string().contains("empty label"));
    }

    #[test]
    fn test_unknown_position_is_parse_error() {
        let err = toml::from_str::<NavbarConfig>(
            r#"
            [[items]]
            label = "Blog"
            to = "/blog"
            position = "center"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("center"));
    }

    #[test]
    fn test_logo_checks() {
        let navbar = NavbarConfig {
            logo: Some(LogoConfig {
                href: Some("home".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let diag = check(&navbar);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["navbar.logo.src", "navbar.logo.href"]);
        assert_eq!(diag.warnings()[0].field.as_str(), "navbar.logo.alt");
    }
}
