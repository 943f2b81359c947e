use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Scratch git repository checked out on a `staging` branch with one commit.
pub(crate) fn create_test_repo() -> TempDir {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());
    temp
}

pub(crate) struct PublishFixture {
    // Holds the temp dir alive for the fixture's lifetime.
    _temp: TempDir,
    /// Working repository on the `staging` branch, `main` also present.
    pub repo: PathBuf,
    /// Bare repository acting as `origin`, with both branches pushed.
    pub origin: PathBuf,
}

/// Scratch repo plus a bare "origin" remote, the setup `publish` expects.
pub(crate) fn create_publish_fixture() -> PublishFixture {
    let temp = TempDir::new().unwrap();
    let repo = temp.path().join("site");
    let origin = temp.path().join("origin.git");

    git(temp.path(), &["init", "--bare", "origin.git"]);

    std::fs::create_dir(&repo).unwrap();
    init_repo(&repo);
    // Production branch at the same initial commit.
    git(&repo, &["branch", "main"]);

    let origin_str = origin.to_string_lossy().to_string();
    git(&repo, &["remote", "add", "origin", &origin_str]);
    git(&repo, &["push", "origin", "staging", "main"]);

    PublishFixture {
        _temp: temp,
        repo,
        origin,
    }
}

fn init_repo(path: &Path) {
    git(path, &["init"]);
    // Deterministic branch name across environments: set HEAD to an unborn
    // `staging` branch before the first commit.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/staging"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);

    std::fs::write(path.join("index.md"), "# Site\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial content"]);
}

/// Run git, panicking with full output on failure; returns trimmed stdout.
pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
