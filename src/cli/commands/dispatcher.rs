//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// Check failures (an invalid install, a rejected module) are reported
    /// through `ui` and a failing [`CommandResult`], not as `Err`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: ProbeConfig,
}

impl CommandDispatcher {
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Classify(args) => {
                let cmd = super::classify::ClassifyCommand::new(args.clone());
                cmd.execute(ui)
            }
            Commands::Validate(args) => {
                let cmd = super::validate::ValidateCommand::new(&self.config, args.clone());
                cmd.execute(ui)
            }
            Commands::Classpath(args) => {
                let cmd = super::classpath::ClasspathCommand::new(&self.config, args.clone());
                cmd.execute(ui)
            }
            Commands::Modules(args) => {
                let cmd = super::modules::ModulesCommand::new(args.clone());
                cmd.execute(ui)
            }
            Commands::Loader(args) => {
                let cmd = super::loader::LoaderCommand::new(&self.config, args.clone());
                cmd.execute(ui)
            }
        }
    }
}
