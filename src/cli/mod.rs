//! CLI argument parsing for siteutils.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand, ValueEnum};

/// Siteutils: personal command-line utilities for maintaining a static website.
///
/// Covers the content pipeline end to end:
/// - Generate or extend markdown/MDX documents of image links
/// - Toggle the site's maintenance flag in the remote edge config
/// - Publish staged content to the production branch
#[derive(Parser, Debug)]
#[command(name = "siteutils")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for siteutils.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a .md|.mdx file with all images from one or more directories.
    ///
    /// Writes one markdown image link per file, alt text derived from the
    /// filename, optionally preceded by a template file's contents.
    Generate(GenerateArgs),

    /// Append image links from one or more directories to a file.
    ///
    /// Existing content is preserved; the file is created if missing.
    /// No template is copied in this mode.
    Append(AppendArgs),

    /// Set the website's mode via the remote edge config.
    ///
    /// Requires $VERCEL_ACCESS_TOKEN and $VERCEL_EDGE_CONFIG_ID.
    Mode(ModeArgs),

    /// Commit staged content and merge it into the production branch.
    ///
    /// Runs from the staging branch as a sequence of individually checked
    /// git steps: stage, commit, push, merge to production, push, switch back.
    Publish(PublishArgs),

    /// Launch the local dev server ({package manager} run dev).
    Preview,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Image directories to scan, emitted in the order given.
    ///
    /// Each directory path is embedded verbatim as the link prefix;
    /// include a trailing slash if the links should have one.
    #[arg(required = true)]
    pub dirs: Vec<String>,

    /// Name of the generated output file (extension is added).
    #[arg(short, long, default_value = "generated")]
    pub output: String,

    /// Copy the content of this file before the images.
    #[arg(short, long)]
    pub template: Option<String>,

    /// Output a .md file (instead of the default .mdx).
    #[arg(long)]
    pub md: bool,
}

/// Arguments for the `append` command.
#[derive(Parser, Debug)]
pub struct AppendArgs {
    /// Image directories to scan, emitted in the order given.
    ///
    /// Each directory path is embedded verbatim as the link prefix;
    /// include a trailing slash if the links should have one.
    #[arg(required = true)]
    pub dirs: Vec<String>,

    /// File to append to (created if missing).
    #[arg(short = 'T', long)]
    pub target: String,
}

/// Arguments for the `mode` command.
#[derive(Parser, Debug)]
pub struct ModeArgs {
    /// Mode to put the site in.
    #[arg(value_enum)]
    pub mode: SiteMode,
}

/// Site-wide operating mode, stored as the `maintenance` edge-config key.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteMode {
    /// Normal operation (`maintenance` = "0").
    Standard,
    /// Maintenance page shown (`maintenance` = "1").
    Maintenance,
}

/// Arguments for the `publish` command.
#[derive(Parser, Debug)]
pub struct PublishArgs {
    /// Commit message (default: "Site update YYYY-MM-DD").
    #[arg(short, long)]
    pub message: Option<String>,

    /// Launch the dev server after a successful publish.
    #[arg(long)]
    pub dev: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
