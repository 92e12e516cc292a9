//! `[footer]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [footer]
//! style = "dark"
//! copyright = "Copyright © {year} Generasi Belajar."
//!
//! [[footer.links]]
//! title = "Docs"
//! items = [{ label = "Tutorial", to = "/docs/intro" }]
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use super::item::LinkItem;
use crate::config::{ConfigDiagnostic, ConfigDiagnostics};

/// Footer color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

/// A titled column of footer links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterGroup {
    pub title: String,
    pub items: Vec<LinkItem>,
}

/// Site footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "footer")]
pub struct FooterConfig {
    /// Color scheme: dark | light.
    #[config(default = "light")]
    pub style: FooterStyle,

    /// Copyright line. `{year}` is replaced with the current year.
    pub copyright: Option<String>,

    /// Link columns, in display order.
    pub links: Vec<FooterGroup>,
}

impl FooterConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, group) in self.links.iter().enumerate() {
            let at = Self::FIELDS.links.at(i);
            if group.title.trim().is_empty() {
                diag.error(ConfigDiagnostic::missing(at.child("title"), "empty title"));
            }
            if group.items.is_empty() {
                diag.warn(at.child("items"), "link group has no items");
            }
            for (j, item) in group.items.iter().enumerate() {
                item.validate(&at.child_at("items", j), diag);
            }
        }
    }

    /// Copyright line with `{year}` substituted.
    pub fn render_copyright(&self, year: i32) -> Option<String> {
        self.copyright
            .as_ref()
            .map(|c| c.replace("{year}", &year.to_string()))
    }
}
