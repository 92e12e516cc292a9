//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod nav;

pub use args::{CheckArgs, Cli, Commands, NavArgs, OverrideArgs};
