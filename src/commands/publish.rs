//! Implementation of the `siteutils publish` command.
//!
//! Publishes staged content: commit whatever is in the working tree on the
//! staging branch, push it, merge staging into the production branch, push
//! that, and return to staging. Each step is a discrete git invocation whose
//! result is checked individually, so a partial failure names the exact step
//! that broke instead of dying somewhere inside a chained one-liner.

use crate::cli::PublishArgs;
use crate::config::PublishConfig;
use crate::error::{Result, SiteError};
use crate::git;
use chrono::Local;
use std::path::Path;
use std::process::Command;

/// One git step in the publish plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStep {
    /// Short human name, used in error messages.
    pub description: &'static str,
    /// Argv passed to git.
    pub args: Vec<String>,
}

impl PlannedStep {
    fn new(description: &'static str, args: &[&str]) -> Self {
        Self {
            description,
            args: args.iter().map(|a| (*a).to_string()).collect(),
        }
    }
}

/// Build the ordered publish plan.
///
/// The stage/commit steps are skipped when the working tree is clean, so an
/// earlier committed-but-unpushed state still publishes.
pub fn plan_steps(config: &PublishConfig, message: &str, dirty: bool) -> Vec<PlannedStep> {
    let staging = config.staging_branch.as_str();
    let production = config.production_branch.as_str();

    let mut steps = Vec::new();
    if dirty {
        steps.push(PlannedStep::new("stage changes", &["add", "-A"]));
        steps.push(PlannedStep::new(
            "commit staged changes",
            &["commit", "-m", message],
        ));
    }
    steps.push(PlannedStep::new(
        "push staging branch",
        &["push", "origin", staging],
    ));
    steps.push(PlannedStep::new(
        "switch to production branch",
        &["switch", production],
    ));
    steps.push(PlannedStep::new("merge staging branch", &["merge", staging]));
    steps.push(PlannedStep::new(
        "push production branch",
        &["push", "origin", production],
    ));
    steps.push(PlannedStep::new(
        "switch back to staging branch",
        &["switch", staging],
    ));

    steps
}

/// Run the publish plan against `repo`.
///
/// Refuses to run unless the current branch is the staging branch; the plan
/// would otherwise merge and push the wrong history.
pub fn run_publish(repo: &Path, config: &PublishConfig, message: &str) -> Result<()> {
    let branch = git::current_branch(repo)?;
    if branch != config.staging_branch {
        return Err(SiteError::Git(format!(
            "publish must run from branch '{}' (currently on '{}')",
            config.staging_branch, branch
        )));
    }

    let dirty = git::has_changes(repo)?;

    for step in plan_steps(config, message, dirty) {
        let args: Vec<&str> = step.args.iter().map(String::as_str).collect();
        git::run_git(repo, &args).map_err(|err| match err {
            SiteError::Git(msg) => {
                SiteError::Git(format!("{}: {}", step.description, msg))
            }
            other => other,
        })?;
    }

    Ok(())
}

/// Default commit message, dated for easy scanning of the site history.
pub fn default_message() -> String {
    format!("Site update {}", Local::now().format("%Y-%m-%d"))
}

/// Execute the `siteutils publish` command.
pub fn cmd_publish(args: PublishArgs) -> Result<()> {
    let repo = git::repo_root(Path::new("."))?;
    let config = PublishConfig::from_env();
    let message = args.message.unwrap_or_else(default_message);

    run_publish(&repo, &config, &message)?;
    println!(
        "Published '{}' to '{}'.",
        config.staging_branch, config.production_branch
    );

    if args.dev {
        // The publish itself already succeeded; a dev-server failure is
        // only worth a warning at this point.
        if let Err(err) = run_dev_server(&config) {
            eprintln!("Warning: {}", err);
        }
    }

    Ok(())
}

/// Execute the `siteutils preview` command.
pub fn cmd_preview() -> Result<()> {
    let config = PublishConfig::from_env();
    run_dev_server(&config)
}

/// Launch `{package_manager} run dev` with inherited stdio and wait for it.
fn run_dev_server(config: &PublishConfig) -> Result<()> {
    println!("Starting dev server ({} run dev)...", config.package_manager);

    let status = Command::new(&config.package_manager)
        .args(["run", "dev"])
        .status()
        .map_err(|e| {
            SiteError::Io(format!(
                "failed to launch '{} run dev': {}",
                config.package_manager, e
            ))
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(SiteError::Io(format!(
            "'{} run dev' exited with {}",
            config.package_manager, status
        )))
    }
}
