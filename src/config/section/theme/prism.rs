//! `[theme.prism]` syntax highlighting configuration.
//!
//! ```toml
//! [theme.prism]
//! theme = "github"
//! dark_theme = "dracula"
//! additional_languages = ["solidity", "toml"]
//! ```

use std::collections::BTreeSet;
use std::sync::LazyLock;

use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostic, ConfigDiagnostics};

/// Grammar names: lowercase, digits and dashes (`solidity`, `js-extras`).
static LANGUAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]*$").unwrap());

/// Grammars that ship with the default highlighter build.
const BUNDLED_LANGUAGES: &[&str] = &[
    "markup",
    "jsx",
    "tsx",
    "swift",
    "kotlin",
    "objectivec",
    "js-extras",
    "reason",
    "rust",
    "graphql",
    "yaml",
    "go",
    "cpp",
    "markdown",
    "python",
    "json",
];

/// Built-in Prism color themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrismTheme {
    Dracula,
    DuotoneDark,
    DuotoneLight,
    #[default]
    Github,
    GruvboxMaterialDark,
    GruvboxMaterialLight,
    JettwaveDark,
    JettwaveLight,
    NightOwl,
    NightOwlLight,
    OceanicNext,
    Okaidia,
    OneDark,
    OneLight,
    Palenight,
    ShadesOfPurple,
    Synthwave84,
    Ultramin,
    VsDark,
    VsLight,
}

/// Code block highlighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.prism")]
pub struct PrismConfig {
    /// Light mode theme.
    #[config(default = "github")]
    pub theme: PrismTheme,

    /// Dark mode theme.
    #[config(default = "dracula")]
    pub dark_theme: PrismTheme,

    /// Extra grammars to load, beyond the bundled set.
    pub additional_languages: BTreeSet<String>,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            theme: PrismTheme::Github,
            dark_theme: PrismTheme::Dracula,
            additional_languages: BTreeSet::new(),
        }
    }
}

impl PrismConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for lang in &self.additional_languages {
            if !LANGUAGE_RE.is_match(lang) {
                diag.error(
                    ConfigDiagnostic::invalid(
                        Self::FIELDS.additional_languages,
                        format!("`{lang}` is not a grammar name"),
                    )
                    .with_hint(format!("use \"{}\"", lang.to_ascii_lowercase())),
                );
            } else if BUNDLED_LANGUAGES.contains(&lang.as_str()) {
                diag.warn(
                    Self::FIELDS.additional_languages,
                    format!("`{lang}` is bundled by default and need not be listed"),
                );
            }
        }
    }
}
