//! wc-connect CLI - validate WooCommerce Connect service definitions
//!
//! This is the main entry point for the wc-connect CLI application, providing
//! commands for validating services documents, listing error codes, and
//! managing configuration.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands, OutputFormat};
use colored::control;
use config::Config;
use error::{Error, Result};
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Configuration is loaded first so its [logging] section applies
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => exit_with(&e, cli.use_color()),
    };

    let use_color = cli.use_color() && config.output.color;
    control::set_override(use_color);

    // Initialize logging
    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(cli, config) {
        Ok(()) => process::exit(0),
        Err(e) => exit_with(&e, use_color),
    }
}

fn exit_with(error: &Error, use_color: bool) -> ! {
    eprintln!("{}", error::format_error(error, use_color));

    if error.should_show_help() {
        eprintln!("\nFor more information, try '--help'");
    }

    process::exit(error.exit_code());
}

/// Main application logic
#[instrument(skip_all, fields(command = ?cli.command))]
fn run(cli: Cli, config: Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let format = resolve_output_format(&cli, &config)?;
    let mut output = OutputWriter::new(
        format,
        cli.use_color() && config.output.color,
        cli.quiet,
        config.output.progress,
    );

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    // Handle the subcommand
    match cli.command {
        Commands::Validate(args) => handlers::handle_validate(args, &config, &mut output),
        Commands::Codes => handlers::handle_codes(&mut output),
        Commands::Config(args) => {
            handlers::handle_config(args, &config, cli.config.as_deref(), &mut output)
        }
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Load and check the configuration named by `--config` or found by default
fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::load_with_file(cli.config.as_deref())?;
    config.validate()?;
    Ok(config)
}

/// `--output` wins over the configured format
fn resolve_output_format(cli: &Cli, config: &Config) -> Result<OutputFormat> {
    match cli.output {
        Some(format) => Ok(format),
        None => OutputFormat::from_config_name(&config.output.format).ok_or_else(|| {
            Error::config(format!("Unknown output format '{}'", config.output.format))
        }),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    // Create logging configuration from CLI args, the config file and environment
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());
    logging_config.merge_with_config(&config.logging, cli.verbosity_level());
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}
