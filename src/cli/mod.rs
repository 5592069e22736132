//! Command-line surface of the `gt` binary

pub mod args;
pub mod commands;

pub use args::Cli;
