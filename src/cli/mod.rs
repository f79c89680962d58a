//! Command-line interface for tcprobe.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    ClasspathArgs, ClassifyArgs, Cli, Commands, LoaderArgs, ModulesArgs, ValidateArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
