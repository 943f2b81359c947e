//! Implementation of the `siteutils append` command.
//!
//! Append mode: add image-link lines to the end of an existing (or new)
//! document. No template is involved and prior content is never touched.
//!
//! The target is opened exactly once per invocation, after every input
//! directory has been validated and every line rendered, so a failing run
//! leaves the target byte-for-byte unchanged.

use crate::cli::AppendArgs;
use crate::error::{Result, SiteError};
use crate::markdown;
use std::fs::OpenOptions;
use std::io::Write;

/// Execute the `siteutils append` command.
pub fn cmd_append(args: AppendArgs) -> Result<()> {
    let lines = markdown::render_lines(&args.dirs)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.target)
        .map_err(|e| SiteError::Io(format!("failed to open '{}': {}", args.target, e)))?;

    file.write_all(lines.as_bytes())
        .map_err(|e| SiteError::Io(format!("failed to write '{}': {}", args.target, e)))?;
    file.sync_all()
        .map_err(|e| SiteError::Io(format!("failed to sync '{}': {}", args.target, e)))?;

    println!("Appended images to '{}'", args.target);

    Ok(())
}
