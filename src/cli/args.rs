//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// tcprobe - tc Server install classification and compatibility checks.
#[derive(Debug, Parser)]
#[command(name = "tcprobe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ./.tcprobe.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify an install directory by name
    Classify(ClassifyArgs),

    /// Check that a directory is a valid install
    Validate(ValidateArgs),

    /// Show the runtime classpath of an install
    Classpath(ClasspathArgs),

    /// Show or check the web module versions a runtime accepts
    Modules(ModulesArgs),

    /// Install or remove the class loader jar of an instance
    Loader(LoaderArgs),
}

/// Arguments for the `classify` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ClassifyArgs {
    /// Install directory to classify
    pub path: PathBuf,

    /// Runtime-type id to compare against the path
    #[arg(long)]
    pub runtime_id: Option<String>,

    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ValidateArgs {
    /// Candidate install root
    pub path: PathBuf,

    /// Runtime-type id (derived from the path if omitted)
    #[arg(long)]
    pub runtime_id: Option<String>,
}

/// Arguments for the `classpath` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ClasspathArgs {
    /// Install root
    pub install: PathBuf,

    /// Instance directory searched for the logging jar
    #[arg(long)]
    pub config_root: Option<PathBuf>,

    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `modules` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ModulesArgs {
    /// Runtime-type id
    #[arg(long)]
    pub runtime_id: String,

    /// Tomcat install the runtime runs on; decides the loader jar answer
    #[arg(long)]
    pub tomcat_location: Option<PathBuf>,

    /// Web module version to check
    #[arg(long)]
    pub check: Option<String>,

    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `loader` command.
#[derive(Debug, Clone, clap::Args)]
#[command(group(ArgGroup::new("action").required(true).args(["enable", "disable"])))]
#[command(group(ArgGroup::new("tomcat").required(true).args(["tomcat_location", "runtime_id"])))]
pub struct LoaderArgs {
    /// Instance base directory (catalina.base)
    pub base_dir: PathBuf,

    /// Tomcat install directory; its name picks the Tomcat line
    #[arg(long)]
    pub tomcat_location: Option<PathBuf>,

    /// Host runtime-type id of the Tomcat line
    #[arg(long)]
    pub runtime_id: Option<String>,

    /// Install the loader jar (serve modules without publishing)
    #[arg(long)]
    pub enable: bool,

    /// Remove the loader jar
    #[arg(long)]
    pub disable: bool,

    /// Also add the jar to common.loader in conf/catalina.properties
    #[arg(long)]
    pub test_env: bool,

    /// Directory holding the bundled loader jars (overrides loader_jar_dir)
    #[arg(long)]
    pub loader_dir: Option<PathBuf>,
}
