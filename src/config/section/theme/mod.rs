//! `[theme]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! custom_css = "src/css/custom.css"
//! color_mode = "dark"
//!
//! [theme.prism]
//! theme = "github"
//! dark_theme = "dracula"
//! ```

mod prism;

pub use prism::{PrismConfig, PrismTheme};

use std::path::{Path, PathBuf};

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Initial color mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// Theme section configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeSectionConfig {
    /// Stylesheet appended after the theme's own (relative to site root).
    pub custom_css: Option<PathBuf>,

    /// Color mode on first visit: light | dark.
    #[config(default = "light")]
    pub color_mode: ColorMode,

    /// Syntax highlighting.
    #[config(skip)]
    pub prism: PrismConfig,
}

impl ThemeSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.prism.validate(diag);
    }

    /// Warn when `custom_css` is missing under `root`.
    pub fn validate_paths(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        if let Some(css) = &self.custom_css
            && !root.join(css).is_file()
        {
            diag.warn(
                Self::FIELDS.custom_css,
                format!("file `{}` does not exist", css.display()),
            );
        }
    }

    /// Field status checks for this section and `[theme.prism]`.
    pub fn validate_status(&self, diag: &mut ConfigDiagnostics) {
        self.validate_field_status(diag);
        self.prism.validate_field_status(diag);
    }
}
