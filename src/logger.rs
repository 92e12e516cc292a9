//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `log_stderr` for diagnostics
//! - `debug!` macro, only printed with `--verbose`, written to stderr
//!
//! Only `log!` writes to stdout, so `docsite nav` output stays valid JSON.
//!
//! # Example
//!
//! ```ignore
//! log!("check"; "validating {}", path.display());
//! debug!("config"; "resolved base url {}", base_url);
//! ```

use owo_colors::{OwoColorize, Stream};
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message to stderr (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log_stderr($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix to stdout
#[inline]
pub fn log(module: &str, message: &str) {
    let mut stdout = stdout().lock();
    write_line(&mut stdout, Stream::Stdout, module, message);
}

/// Log a message with a colored module prefix to stderr
#[inline]
pub fn log_stderr(module: &str, message: &str) {
    let mut stderr = stderr().lock();
    write_line(&mut stderr, Stream::Stderr, module, message);
}

fn write_line(out: &mut impl Write, stream: Stream, module: &str, message: &str) {
    let prefix = colorize_prefix(module, stream);
    writeln!(out, "{prefix} {message}").ok();
    out.flush().ok();
}

/// Apply color to a module prefix based on module type
///
/// Colors follow `--color` through the `owo-colors` override.
#[inline]
fn colorize_prefix(module: &str, stream: Stream) -> String {
    let prefix = format!("[{module}]");
    let styled = prefix.if_supports_color(stream, |p| match module.to_ascii_lowercase().as_str() {
        "check" => p.bright_blue().bold().to_string(),
        "ok" => p.bright_green().bold().to_string(),
        "error" => p.bright_red().bold().to_string(),
        "hint" => p.bright_cyan().bold().to_string(),
        _ => p.bright_yellow().bold().to_string(),
    });
    styled.to_string()
}

// ============================================================================
// Tests
// ============================================================================
