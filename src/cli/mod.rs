/// Clap command definitions.
pub mod commands;

/// One handler function per command.
pub mod handlers;

pub use commands::{Cli, Commands};
