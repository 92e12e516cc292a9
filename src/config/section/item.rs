//! Link items shared by `[navbar]` and `[footer]`.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostic, ConfigDiagnostics, FieldLocation};
use crate::link::{LinkTarget, LinkTargetError};

/// A labeled link with exactly one of `to` or `href`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkItem {
    pub label: String,
    pub to: Option<String>,
    pub href: Option<String>,
}

impl LinkItem {
    pub fn target(&self) -> Result<LinkTarget, LinkTargetError> {
        LinkTarget::parse(self.to.as_deref(), self.href.as_deref())
    }

    pub fn validate(&self, at: &FieldLocation, diag: &mut ConfigDiagnostics) {
        check_link(at, &self.label, self.target(), diag);
    }
}

/// Report an empty label or an unusable target of the item at `at`.
pub(crate) fn check_link(
    at: &FieldLocation,
    label: &str,
    target: Result<LinkTarget, LinkTargetError>,
    diag: &mut ConfigDiagnostics,
) {
    if label.trim().is_empty() {
        diag.error(ConfigDiagnostic::missing(at.child("label"), "empty label"));
    }

    match target {
        Ok(_) => {}
        Err(LinkTargetError::Missing) => diag.error(
            ConfigDiagnostic::missing(at.clone(), LinkTargetError::Missing.to_string())
                .with_hint("internal pages use `to = \"/path\"`, external sites `href = \"https://...\"`"),
        ),
        Err(e @ LinkTargetError::Ambiguous) => diag.error(
            ConfigDiagnostic::invalid(at.clone(), e.to_string()).with_hint("keep only one of them"),
        ),
        Err(e) => diag.error(ConfigDiagnostic::invalid(at.clone(), e.to_string())),
    }
}
