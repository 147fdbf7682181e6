//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigGetArgs, ConfigInitArgs, ConfigShowArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use std::path::Path;

/// Handle the config command
///
/// `explicit_path` is the file given with `--config`, if any.
pub fn handle_config(
    args: ConfigArgs,
    config: &Config,
    explicit_path: Option<&Path>,
    output: &mut OutputWriter,
) -> Result<()> {
    match args.action {
        ConfigAction::Init(init_args) => handle_config_init(init_args, output),
        ConfigAction::Show(show_args) => handle_config_show(show_args, config, output),
        ConfigAction::Get(get_args) => handle_config_get(get_args, config, output),
        ConfigAction::Path => handle_config_path(explicit_path, output),
    }
}

/// Handle config init subcommand
fn handle_config_init(args: ConfigInitArgs, output: &mut OutputWriter) -> Result<()> {
    if args.path.exists() && !args.force {
        return Err(Error::config(format!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        )));
    }

    Config::default().save(&args.path)?;
    tracing::info!(path = %args.path.display(), "Wrote default configuration");
    output.success(&format!("✓ Created config at {}", args.path.display()))
}

/// Handle config show subcommand
fn handle_config_show(
    args: ConfigShowArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let rendered = config.render(args.format)?;
    output.writeln(rendered.trim_end())
}

/// Handle config get subcommand
fn handle_config_get(args: ConfigGetArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let value = config.get_value(&args.key)?;
    output.writeln(&value)
}

/// Handle config path subcommand
fn handle_config_path(explicit_path: Option<&Path>, output: &mut OutputWriter) -> Result<()> {
    match explicit_path
        .map(Path::to_path_buf)
        .or_else(Config::find_config_file)
    {
        Some(path) => output.writeln(&path.display().to_string()),
        None => output.writeln("none (using built-in defaults)"),
    }
}
