//! Field status checks for config validation.
//!
//! The `Config` derive calls these when a field or section marked
//! experimental, not_implemented or deprecated differs from its default.

use super::{ConfigDiagnostic, FieldLocation};
use crate::config::ConfigDiagnostics;

/// Field status for validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Experimental,
    NotImplemented,
    Deprecated,
}

impl FieldStatus {
    /// Get status label for display.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Experimental => "experimental",
            Self::NotImplemented => "not implemented",
            Self::Deprecated => "deprecated",
        }
    }
}

/// Check field status and report diagnostics
pub fn check_field_status(field_path: &str, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    report(
        FieldLocation::from(field_path.to_string()),
        status,
        "field",
        diag,
    );
}

/// Check section-level status and report diagnostics
pub fn check_section_status(section: &str, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    report(
        FieldLocation::from(format!("[{section}]")),
        status,
        "section",
        diag,
    );
}

fn report(field: FieldLocation, status: FieldStatus, what: &str, diag: &mut ConfigDiagnostics) {
    match status {
        FieldStatus::NotImplemented => diag.error(
            ConfigDiagnostic::invalid(field, format!("this {what} is {}", status.label()))
                .with_hint(format!("remove this {what}")),
        ),
        FieldStatus::Deprecated => diag.warn(
            field,
            format!("this {what} is deprecated and will be removed in a future version"),
        ),
        FieldStatus::Experimental => diag.experimental_hint(field),
    }
}
