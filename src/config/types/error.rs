//! Configuration error types.

use super::FieldLocation;
use crate::logger::log_stderr;
use owo_colors::{OwoColorize, Stream, Style};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    /// Syntax errors and type mismatches; the message names the offending key.
    #[error("failed to parse `{0}`:\n{1}")]
    Parse(PathBuf, toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// What went wrong with a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A required field is absent or empty.
    Missing,
    /// A field is present but malformed.
    Invalid,
    /// A field refers to something that does not exist
    /// (unlisted locale, broken internal link).
    Reference,
}

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Config field location (e.g., "navbar.items[0].label")
    pub field: FieldLocation,
    pub kind: DiagnosticKind,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(
        field: impl Into<FieldLocation>,
        kind: DiagnosticKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
            hint: None,
        }
    }

    pub fn missing(field: impl Into<FieldLocation>, message: impl Into<String>) -> Self {
        Self::new(field, DiagnosticKind::Missing, message)
    }

    pub fn invalid(field: impl Into<FieldLocation>, message: impl Into<String>) -> Self {
        Self::new(field, DiagnosticKind::Invalid, message)
    }

    pub fn reference(field: impl Into<FieldLocation>, message: impl Into<String>) -> Self {
        Self::new(field, DiagnosticKind::Reference, message)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            "[".if_supports_color(Stream::Stderr, |t| t.dimmed()),
            self.field.as_str().if_supports_color(Stream::Stderr, |t| t.cyan()),
            "]".if_supports_color(Stream::Stderr, |t| t.dimmed())
        )?;
        write!(
            f,
            "{} {}",
            "→".if_supports_color(Stream::Stderr, |t| t.red()),
            self.message
        )?;
        if let Some(hint) = &self.hint {
            write!(
                f,
                "\n  {} {}",
                "hint:".if_supports_color(Stream::Stderr, |t| t.yellow()),
                hint
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Collected warnings (deprecated fields, unknown keys, placeholders).
    warnings: Vec<ConfigDiagnostic>,
    /// Collected hints (experimental fields/sections).
    hints: Vec<FieldLocation>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, diagnostic: ConfigDiagnostic) {
        self.errors.push(diagnostic);
    }

    /// Add a warning (collected for batch display).
    pub fn warn(&mut self, field: impl Into<FieldLocation>, message: impl Into<String>) {
        self.warnings
            .push(ConfigDiagnostic::invalid(field, message));
    }

    /// Add a warning carrying a fix hint.
    pub fn warn_with_hint(
        &mut self,
        field: impl Into<FieldLocation>,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.warnings
            .push(ConfigDiagnostic::invalid(field, message).with_hint(hint));
    }

    /// Add a hint for experimental fields (collected for batch display).
    pub fn experimental_hint(&mut self, field: impl Into<FieldLocation>) {
        self.hints.push(field.into());
    }

    /// Turn every collected warning into an error (`--strict`).
    pub fn promote_warnings(&mut self) {
        self.errors.append(&mut self.warnings);
    }

    /// Print collected warnings and hints to stderr in a grouped format.
    pub fn print_hints_and_warnings(&self) {
        for warning in &self.warnings {
            log_stderr(
                "warning",
                &format!("[{}] {}", warning.field.as_str(), warning.message),
            );
            if let Some(hint) = &warning.hint {
                eprintln!(
                    "  {} {}",
                    "hint:".if_supports_color(Stream::Stderr, |t| t.yellow()),
                    hint
                );
            }
        }

        if !self.hints.is_empty() {
            log_stderr(
                "hint",
                "experimental fields or sections, may change or be removed:",
            );
            for field in &self.hints {
                eprintln!("- {}", field.as_str());
            }
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}\n",
            "config validation failed:"
                .if_supports_color(Stream::Stderr, |t| t.style(Style::new().red().bold()))
        )?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".if_supports_color(Stream::Stderr, |t| t.dimmed()),
                self.errors
                    .len()
                    .if_supports_color(Stream::Stderr, |t| t.style(Style::new().red().bold())),
                "errors".if_supports_color(Stream::Stderr, |t| t.dimmed())
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
