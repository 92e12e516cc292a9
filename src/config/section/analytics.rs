//! `[analytics]` section configuration.
//!
//! Only passed through to the generated pages; nothing here affects
//! navigation or routing.
//!
//! ```toml
//! [analytics.gtag]
//! tracking_id = "G-1RRPKEZ3XN"
//! anonymize_ip = true
//! ```

use std::sync::LazyLock;

use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostic, ConfigDiagnostics};

/// GA4 (`G-`), tag manager (`GT-`), ads (`AW-`) or universal analytics (`UA-n-n`).
static TRACKING_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(G|GT|AW)-[A-Z0-9]+$|^UA-[0-9]+-[0-9]+$").unwrap());

/// Google tag settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "analytics.gtag")]
pub struct GtagConfig {
    /// Measurement ID, e.g. "G-XXXXXXXXXX".
    pub tracking_id: String,

    /// Anonymize visitor IP addresses.
    pub anonymize_ip: bool,
}

/// Analytics integrations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub gtag: Option<GtagConfig>,
}

impl AnalyticsConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(gtag) = &self.gtag else { return };
        let id = gtag.tracking_id.trim();

        if id.is_empty() {
            diag.error(
                ConfigDiagnostic::missing(GtagConfig::FIELDS.tracking_id, "required field is missing")
                    .with_hint("remove [analytics.gtag] to disable analytics"),
            );
        } else if !TRACKING_ID_RE.is_match(id) {
            diag.error(
                ConfigDiagnostic::invalid(
                    GtagConfig::FIELDS.tracking_id,
                    format!("`{id}` is not a tracking ID"),
                )
                .with_hint("expected G-..., GT-..., AW-... or UA-...-..."),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(tracking_id: &str) -> ConfigDiagnostics {
        let analytics = AnalyticsConfig {
            gtag: Some(GtagConfig {
                tracking_id: tracking_id.into(),
                anonymize_ip: true,
            }),
        };
        let mut diag = ConfigDiagnostics::new();
        analytics.validate(&mut diag);
        diag
    }

    #[test]
    fn test_tracking_ids() {
        for ok in ["G-1RRPKEZ3XN", "GT-ABC123", "AW-99", "UA-12345-1"] {
            assert!(check(ok).is_empty(), "{ok}");
        }
        for bad in ["g-abc", "UA-12345", "G-", "1RRPKEZ3XN"] {
            assert_eq!(check(bad).len(), 1, "{bad}");
        }
    }

    #[test]
    fn test_empty_tracking_id() {
        let diag = check("  ");
        assert_eq!(diag.errors()[0].field.as_str(), "analytics.gtag.tracking_id");
    }

    #[test]
    fn test_absent_section_is_valid() {
        let mut diag = ConfigDiagnostics::new();
        AnalyticsConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
    }
}
