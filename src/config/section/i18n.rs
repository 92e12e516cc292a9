//! `[i18n]` section configuration.
//!
//! ```toml
//! [i18n]
//! default_locale = "en"
//! locales = ["en", "id"]
//! ```

use std::sync::LazyLock;

use macros::Config;
use regex::Regex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostic, ConfigDiagnostics};

/// Language, optional script and optional region subtags (`en`, `pt-BR`, `zh-Hans-CN`).
static LOCALE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z]{4})?(-([A-Za-z]{2}|[0-9]{3}))?$").unwrap()
});

fn is_locale_tag(tag: &str) -> bool {
    LOCALE_RE.is_match(tag)
}

/// Internationalization settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "i18n")]
pub struct I18nConfig {
    /// Locale served at the site root (BCP 47, e.g. "en").
    pub default_locale: Option<String>,

    /// All published locales. Empty means only `default_locale`.
    pub locales: Vec<String>,

    /// Directory holding translated content, relative to the site root.
    #[config(default = "i18n")]
    pub path: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: None,
            locales: Vec::new(),
            path: "i18n".into(),
        }
    }
}

impl I18nConfig {
    /// Locales that will be built, `default_locale` first.
    pub fn effective_locales(&self) -> Vec<&str> {
        let Some(default) = self.default_locale.as_deref() else {
            return self.locales.iter().map(String::as_str).collect();
        };
        let mut locales = vec![default];
        locales.extend(
            self.locales
                .iter()
                .map(String::as_str)
                .filter(|l| *l != default),
        );
        locales
    }

    /// Whether more than one locale is published.
    pub fn is_multilingual(&self) -> bool {
        self.effective_locales().len() > 1
    }

    /// Trim locale tags and fill `locales` with `default_locale` when left empty.
    pub(crate) fn normalize(&mut self) {
        if let Some(default) = &mut self.default_locale {
            *default = default.trim().to_string();
        }
        for locale in &mut self.locales {
            *locale = locale.trim().to_string();
        }
        if self.locales.is_empty()
            && let Some(default) = &self.default_locale
        {
            self.locales.push(default.clone());
        }
        if self.path.is_empty() {
            self.path = "i18n".into();
        }
    }

    /// Validate locale tags and their consistency.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match self.default_locale.as_deref().map(str::trim) {
            None | Some("") => diag.error(
                ConfigDiagnostic::missing(Self::FIELDS.default_locale, "required field is missing")
                    .with_hint(format!("set {} = \"en\"", Self::FIELDS.default_locale)),
            ),
            Some(tag) if !is_locale_tag(tag) => diag.error(
                ConfigDiagnostic::invalid(
                    Self::FIELDS.default_locale,
                    format!("`{tag}` is not a valid locale tag"),
                )
                .with_hint("use a BCP 47 tag like \"en\" or \"pt-BR\""),
            ),
            Some(tag) if !self.locales.is_empty() && !self.locales.iter().any(|l| l == tag) => {
                diag.error(
                    ConfigDiagnostic::reference(
                        Self::FIELDS.default_locale,
                        format!("locale not listed in {}: `{tag}`", Self::FIELDS.locales.as_str()),
                    )
                    .with_hint(format!("add \"{tag}\" to {}", Self::FIELDS.locales)),
                )
            }
            Some(_) => {}
        }

        let mut seen = FxHashSet::default();
        for (i, locale) in self.locales.iter().enumerate() {
            if !is_locale_tag(locale) {
                diag.error(
                    ConfigDiagnostic::invalid(
                        Self::FIELDS.locales.at(i),
                        format!("`{locale}` is not a valid locale tag"),
                    )
                    .with_hint("use a BCP 47 tag like \"en\" or \"pt-BR\""),
                );
            } else if !seen.insert(locale.to_ascii_lowercase()) {
                diag.warn(
                    Self::FIELDS.locales.at(i),
                    format!("duplicate locale `{locale}`"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiagnosticKind;

    fn i18n(default: Option<&str>, locales: &[&str]) -> I18nConfig {
        I18nConfig {
            default_locale: default.map(Into::into),
            locales: locales.iter().map(|s| s.to_string()).collect(),
            path: "i18n".into(),
        }
    }

    fn check(config: &I18nConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        diag
    }

    #[test]
    fn test_locale_tags() {
        for ok in ["en", "id", "fil", "pt-BR", "zh-Hans", "zh-Hans-CN", "es-419"] {
            assert!(is_locale_tag(ok), "{ok}");
        }
        for bad in ["", "e", "english", "en_US", "en-", "pt-BRA1"] {
            assert!(!is_locale_tag(bad), "{bad}");
        }
    }

    #[test]
    fn test_default_locale_must_be_listed() {
        let diag = check(&i18n(Some("fr"), &["en", "id"]));
        assert_eq!(diag.len(), 1);
        let err = &diag.errors()[0];
        assert_eq!(err.kind, DiagnosticKind::Reference);
        assert_eq!(err.field.as_str(), "i18n.default_locale");
        assert!(err.message.contains("locale not listed"));
    }

    #[test]
    fn test_missing_default_locale() {
        let diag = check(&i18n(None, &["en"]));
        assert_eq!(diag.errors()[0].kind, DiagnosticKind::Missing);
    }

    #[test]
    fn test_empty_locales_mean_default_only() {
        let mut config = i18n(Some("en"), &[]);
        assert!(check(&config).is_empty());
        assert_eq!(config.effective_locales(), ["en"]);

        config.normalize();
        assert_eq!(config.locales, ["en"]);
        assert!(!config.is_multilingual());
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let mut config = i18n(Some("id "), &[]);
        config.normalize();
        assert_eq!(config.default_locale.as_deref(), Some("id"));
        assert_eq!(config.locales, ["id"]);
        assert!(check(&config).is_empty());

        let mut config = i18n(Some(" id"), &["en", "id "]);
        config.normalize();
        assert!(check(&config).is_empty());
        assert_eq!(config.effective_locales(), ["id", "en"]);
    }

    #[test]
    fn test_effective_locales_default_first() {
        let config = i18n(Some("id"), &["en", "id"]);
        assert_eq!(config.effective_locales(), ["id", "en"]);
        assert!(config.is_multilingual());
    }

    #[test]
    fn test_duplicate_and_malformed_locales() {
        let diag = check(&i18n(Some("en"), &["en", "EN", "en_US"]));
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "i18n.locales[2]");
        assert_eq!(diag.warnings()[0].field.as_str(), "i18n.locales[1]");
    }
}
