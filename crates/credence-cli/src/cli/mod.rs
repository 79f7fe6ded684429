//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Run the CLI application.
pub async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config = Config::load()?;

    // Command line wins over the saved settings
    let ctx = commands::Context {
        preset: cli.preset.or(config.preset).unwrap_or_default(),
        config_file: cli.config.or(config.config_file),
        output_format: cli.output.or(config.output_format).unwrap_or_default(),
        explain: cli.explain || config.explain_by_default,
        verbose: cli.verbose,
        no_color: cli.no_color,
    };

    debug!(
        preset = %ctx.preset,
        output = %ctx.output_format,
        config_file = ?ctx.config_file,
        "settings resolved"
    );

    // Dispatch to appropriate command
    match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(ctx, args).await,
        Commands::Shell => commands::shell::execute(ctx).await,
        Commands::Presets => commands::presets::execute(&ctx).map(|()| ExitCode::SUCCESS),
        Commands::Config(args) => commands::config::execute(&ctx, args).map(|()| ExitCode::SUCCESS),
    }
}

/// Log to stderr; `RUST_LOG` wins, otherwise warnings only unless `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "credence=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
