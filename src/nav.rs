//! Rendered navigation: navbar and footer with resolved hrefs.
//!
//! Only `site.base_url`, `[navbar]` and `[footer]` are read. Analytics and
//! search settings never reach this module.

use chrono::Datelike;
use serde::Serialize;

use crate::config::{FooterStyle, NavPosition, NavbarItem, SiteConfig};
use crate::link::{LinkTarget, LinkTargetError};
use crate::utils::route::{is_external_link, join_base};

/// A link ready to be emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub external: bool,
}

impl NavLink {
    fn new(label: &str, target: &LinkTarget, base_url: &str) -> Self {
        Self {
            label: label.to_string(),
            href: target.resolve(base_url),
            external: target.is_external(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLogo {
    pub alt: String,
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_dark: Option<String>,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    pub title: String,
    pub items: Vec<NavLink>,
}

/// Navbar and footer of every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub title: Option<String>,
    pub logo: Option<NavLogo>,
    pub hide_on_scroll: bool,
    pub left: Vec<NavLink>,
    pub right: Vec<NavLink>,
    pub footer_style: FooterStyle,
    pub footer: Vec<NavGroup>,
    pub copyright: Option<String>,
}

impl Navigation {
    /// Build with the current year substituted into the copyright line.
    pub fn from_config(config: &SiteConfig) -> Result<Self, LinkTargetError> {
        Self::build(config, chrono::Utc::now().year())
    }

    /// Build from a validated config.
    ///
    /// Fails on the first item without a usable target, which `validate`
    /// already reports with its location.
    pub fn build(config: &SiteConfig, year: i32) -> Result<Self, LinkTargetError> {
        let base_url = config.site.base_url.as_str();
        let navbar = &config.navbar;

        let link = |label: &str, target: Result<LinkTarget, LinkTargetError>| {
            target.map(|target| NavLink::new(label, &target, base_url))
        };
        let side = |position: NavPosition| -> Result<Vec<NavLink>, LinkTargetError> {
            navbar
                .items_at(position)
                .map(|item: &NavbarItem| link(&item.label, item.target()))
                .collect()
        };

        let logo = match &navbar.logo {
            Some(logo) => Some(NavLogo {
                alt: logo.alt.clone(),
                src: static_href(base_url, &logo.src),
                src_dark: logo.src_dark.as_deref().map(|src| static_href(base_url, src)),
                href: match &logo.href {
                    Some(href) => LinkTarget::parse_str(href)?.resolve(base_url),
                    None => join_base(base_url, "/"),
                },
            }),
            None => None,
        };

        let footer = config
            .footer
            .links
            .iter()
            .map(|group| -> Result<NavGroup, LinkTargetError> {
                let items = group
                    .items
                    .iter()
                    .map(|item| link(&item.label, item.target()))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(NavGroup {
                    title: group.title.clone(),
                    items,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            title: navbar.title.clone(),
            logo,
            hide_on_scroll: navbar.hide_on_scroll,
            left: side(NavPosition::Left)?,
            right: side(NavPosition::Right)?,
            footer_style: config.footer.style,
            footer,
            copyright: config.footer.render_copyright(year),
        })
    }
}

/// Static files are served from the base URL unless already absolute.
fn static_href(base_url: &str, src: &str) -> String {
    if is_external_link(src) {
        src.to_string()
    } else {
        join_base(base_url, src)
    }
}
