//! tcprobe CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tcprobe::cli::{Cli, CommandDispatcher};
use tcprobe::config::load_config;
use tcprobe::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("tcprobe=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tcprobe=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Output mode requested on the command line, if any.
fn flag_output_mode(cli: &Cli) -> Option<OutputMode> {
    if cli.quiet {
        Some(OutputMode::Quiet)
    } else if cli.verbose {
        Some(OutputMode::Verbose)
    } else {
        None
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("tcprobe starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let working_dir = std::env::current_dir().unwrap_or_default();
    let config = match load_config(&working_dir, cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let mut ui = create_ui(flag_output_mode(&cli).unwrap_or_default());
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    // Flags win over the configured default
    let output_mode =
        flag_output_mode(&cli).unwrap_or_else(|| config.settings.default_output.into());
    let mut ui = create_ui(output_mode);

    let dispatcher = CommandDispatcher::new(config);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
