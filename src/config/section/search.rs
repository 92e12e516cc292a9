//! `[search]` section configuration.
//!
//! ```toml
//! [search.algolia]
//! app_id = "BH4D9OD16A"
//! api_key = "..."
//! index_name = "belajar-solidity"
//! contextual_search = true
//! ```

use std::sync::LazyLock;

use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostic, ConfigDiagnostics, FieldPath};

static APP_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z0-9]{10}$").unwrap());

/// Algolia DocSearch settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "search.algolia")]
pub struct AlgoliaConfig {
    /// Application ID.
    pub app_id: String,

    /// Public search-only API key.
    pub api_key: String,

    /// Index to query.
    pub index_name: String,

    /// Restrict results to the current locale and version.
    #[config(default = "true")]
    pub contextual_search: bool,
}

impl Default for AlgoliaConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            api_key: String::new(),
            index_name: String::new(),
            contextual_search: true,
        }
    }
}

/// Search integrations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub algolia: Option<AlgoliaConfig>,
}

impl SearchConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(algolia) = &self.algolia else { return };
        let fields = AlgoliaConfig::FIELDS;

        let keys: [(FieldPath, &str); 3] = [
            (fields.app_id, algolia.app_id.as_str()),
            (fields.api_key, algolia.api_key.as_str()),
            (fields.index_name, algolia.index_name.as_str()),
        ];
        for (field, value) in keys {
            if value.trim().is_empty() {
                diag.error(
                    ConfigDiagnostic::missing(field, "required field is missing")
                        .with_hint("remove [search.algolia] to disable search"),
                );
            }
        }

        let app_id = algolia.app_id.trim();
        if !app_id.is_empty() && !APP_ID_RE.is_match(app_id) {
            diag.warn(
                fields.app_id,
                format!("`{app_id}` does not look like an Algolia application ID"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(algolia: AlgoliaConfig) -> ConfigDiagnostics {
        let search = SearchConfig {
            algolia: Some(algolia),
        };
        let mut diag = ConfigDiagnostics::new();
        search.validate(&mut diag);
        diag
    }

    #[test]
    fn test_all_keys_required() {
        let diag = check(AlgoliaConfig {
            app_id: "BH4D9OD16A".into(),
            ..Default::default()
        });
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["search.algolia.api_key", "search.algolia.index_name"]);
    }

    #[test]
    fn test_app_id_shape() {
        let diag = check(AlgoliaConfig {
            app_id: "my-app".into(),
            api_key: "0123abcd".into(),
            index_name: "docs".into(),
            contextual_search: false,
        });
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }
}
