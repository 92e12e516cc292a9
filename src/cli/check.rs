//! `docsite check`: validate the configuration and its internal links.

use anyhow::Result;

use crate::check::LinkChecker;
use crate::cli::args::CheckArgs;
use crate::config::{ConfigDiagnostics, ConfigError, LoadOptions, SiteConfig};
use crate::log;
use crate::utils::plural_count;

/// Load and validate, then check navbar and footer links on disk.
pub fn check_site(opts: &LoadOptions, args: &CheckArgs) -> Result<()> {
    let config = SiteConfig::load(opts)?;
    log!("check"; "{} is valid", config.config_path.display());

    if args.no_links {
        return Ok(());
    }

    let mut diag = ConfigDiagnostics::new();
    let checker = LinkChecker::new(&config);
    let broken = checker.report(&mut diag);
    if args.strict {
        diag.promote_warnings();
    }
    diag.print_hints_and_warnings();
    diag.into_result().map_err(ConfigError::Diagnostics)?;

    if broken == 0 {
        log!(
            "ok";
            "all links resolve ({} indexed)",
            plural_count(checker.index().len(), "path")
        );
    }
    Ok(())
}
