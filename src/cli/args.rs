//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::LoadOptions;

/// Documentation site configuration checker
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: docsite.toml)
    #[arg(short = 'C', long, global = true, default_value = "docsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a commented docsite.toml
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template instead of writing files
        #[arg(short, long)]
        dry: bool,
    },

    /// Validate the configuration and its internal links
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Print the rendered navbar and footer as JSON
    #[command(visible_alias = "n")]
    Nav {
        #[command(flatten)]
        args: NavArgs,
    },
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Treat warnings (unknown fields, placeholders, deprecated fields) as errors
    #[arg(short, long)]
    pub strict: bool,

    /// Skip the broken internal link check
    #[arg(long)]
    pub no_links: bool,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// Nav command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct NavArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// Overrides applied to `[site]` after parsing, before validation.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OverrideArgs {
    /// Override `site.url` for deployment.
    ///
    /// Useful in CI where the production URL differs from the one in docsite.toml.
    ///
    /// Example:
    ///   docsite check --url "https://ms.generasibelajar.com"
    #[arg(short = 'U', long, value_hint = clap::ValueHint::Url)]
    pub url: Option<String>,

    /// Override `site.base_url` (e.g. `/belajar-solidity/` for a project page).
    #[arg(short = 'B', long)]
    pub base_url: Option<String>,
}

impl Cli {
    /// Options for `SiteConfig::load` from the global and per-command flags.
    pub fn load_options(&self) -> LoadOptions {
        let mut opts = LoadOptions::new(&self.config);
        let overrides = match &self.command {
            Commands::Check { args } => {
                opts.strict = args.strict;
                &args.overrides
            }
            Commands::Nav { args } => &args.overrides,
            Commands::Init { .. } => return opts,
        };
        opts.url = overrides.url.clone();
        opts.base_url = overrides.base_url.clone();
        opts
    }
}
