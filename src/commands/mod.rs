//! Command implementations for siteutils.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, one module per command.

mod append;
mod generate;
mod mode;
mod publish;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(args),
        Command::Append(args) => append::cmd_append(args),
        Command::Mode(args) => mode::cmd_mode(args),
        Command::Publish(args) => publish::cmd_publish(args),
        Command::Preview => publish::cmd_preview(),
    }
}
