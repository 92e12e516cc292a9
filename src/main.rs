//! docsite - configuration checker for documentation sites.

#![allow(dead_code)]

mod check;
mod cli;
mod config;
mod link;
mod logger;
mod nav;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(name.as_deref(), *dry),
        Commands::Check { args } => cli::check::check_site(&cli.load_options(), args),
        Commands::Nav { args } => cli::nav::print_nav(&cli.load_options(), args),
    }
}
