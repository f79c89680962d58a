//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`].

pub mod classify;
pub mod classpath;
pub mod dispatcher;
pub mod display;
pub mod loader;
pub mod modules;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
