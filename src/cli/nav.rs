//! `docsite nav`: print the rendered navigation as JSON.

use std::fs;
use std::io::{Write, stdout};

use anyhow::{Context, Result};

use crate::cli::args::NavArgs;
use crate::config::{LoadOptions, SiteConfig};
use crate::log;
use crate::nav::Navigation;

/// Config diagnostics go to stderr; stdout carries only the JSON document.
pub fn print_nav(opts: &LoadOptions, args: &NavArgs) -> Result<()> {
    write_nav(opts, args, &mut stdout().lock())
}

fn write_nav(opts: &LoadOptions, args: &NavArgs, out: &mut impl Write) -> Result<()> {
    let config = SiteConfig::load(opts)?;
    let nav = Navigation::from_config(&config)?;
    let formatted = render(&nav, args.pretty)?;

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("Failed to create '{}'", output_path.display()))?;
        writeln!(file, "{formatted}")?;
        log!("nav"; "wrote output to {}", output_path.display());
    } else {
        writeln!(out, "{formatted}")?;
    }
    Ok(())
}

fn render(nav: &Navigation, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(nav)
    } else {
        serde_json::to_string(nav)
    }
}
