//! Git command runner for siteutils.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling. Publish steps run as discrete argv
//! invocations through this module, never as a concatenated shell string, so
//! a partial failure is always attributable to a specific step.

use crate::error::{Result, SiteError};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns true if stdout is empty.
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }
}

/// Run a git command with the specified working directory.
///
/// Returns [`SiteError::Git`] on a non-zero exit, carrying the subcommand
/// name, the exit code, and whichever of stderr/stdout is non-empty.
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            SiteError::Git(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(SiteError::Git(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Get the repository root using `git rev-parse --show-toplevel`.
///
/// Reported as [`SiteError::InvalidPath`] rather than a git failure: running
/// outside a repository is a usage error, not a failed publish step.
pub fn repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let output = Command::new("git")
        .current_dir(cwd.as_ref())
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .map_err(|e| SiteError::Git(format!("failed to execute git rev-parse: {}", e)))?;

    if output.status.success() {
        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(PathBuf::from(root))
    } else {
        Err(SiteError::InvalidPath(
            "not inside a git repository".to_string(),
        ))
    }
}

/// Name of the currently checked-out branch.
pub fn current_branch<P: AsRef<Path>>(repo: P) -> Result<String> {
    let output = run_git(repo, &["rev-parse", "--abbrev-ref", "HEAD"])?;
    Ok(output.stdout)
}

/// Whether the working tree has uncommitted changes (staged, unstaged, or
/// untracked).
pub fn has_changes<P: AsRef<Path>>(repo: P) -> Result<bool> {
    let output = run_git(repo, &["status", "--porcelain"])?;
    Ok(!output.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::create_test_repo;

    #[test]
    fn run_git_captures_stdout() {
        let repo = create_test_repo();

        let output = run_git(repo.path(), &["rev-parse", "--abbrev-ref", "HEAD"]).unwrap();
        assert_eq!(output.stdout, "staging");
    }

    #[test]
    fn run_git_failure_carries_subcommand_and_stderr() {
        let repo = create_test_repo();

        let err = run_git(repo.path(), &["checkout", "no-such-branch"]).unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, SiteError::Git(_)));
        assert!(msg.contains("git checkout failed"), "message: {}", msg);
        assert!(msg.contains("no-such-branch"), "message: {}", msg);
    }

    #[test]
    fn repo_root_outside_repository_is_invalid_path() {
        let temp = tempfile::TempDir::new().unwrap();

        let err = repo_root(temp.path()).unwrap_err();
        assert!(matches!(err, SiteError::InvalidPath(_)));
    }

    #[test]
    fn repo_root_resolves_from_subdirectory() {
        let repo = create_test_repo();
        let nested = repo.path().join("content");
        std::fs::create_dir(&nested).unwrap();

        let root = repo_root(&nested).unwrap();
        assert_eq!(root.canonicalize().unwrap(), repo.path().canonicalize().unwrap());
    }

    #[test]
    fn current_branch_and_has_changes() {
        let repo = create_test_repo();

        assert_eq!(current_branch(repo.path()).unwrap(), "staging");
        assert!(!has_changes(repo.path()).unwrap());

        std::fs::write(repo.path().join("new.txt"), "x\n").unwrap();
        assert!(has_changes(repo.path()).unwrap());
    }
}
