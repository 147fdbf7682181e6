//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod codes;
mod completions;
mod config;
mod validate;

pub use codes::handle_codes;
pub use completions::handle_completions;
pub use config::handle_config;
pub use validate::handle_validate;
