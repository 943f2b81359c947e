//! Atomic file writes.
//!
//! Create-mode document generation must be all-or-nothing: an invalid input
//! directory or an empty derived alt text must never leave a truncated or
//! half-written document on disk. All writes follow the same pattern:
//!
//! 1. Write content to a temporary file in the target's directory
//! 2. Sync the file to disk
//! 3. Rename it over the target
//!
//! Rename is atomic on POSIX when source and destination share a filesystem,
//! which holds here because the temporary file lives next to the target. On
//! crash a stray `.{filename}.tmp` may remain.

use crate::error::{Result, SiteError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to `path`, replacing any existing file.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(SiteError::InvalidPath(format!(
            "output directory '{}' does not exist",
            parent.display()
        )));
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SiteError::Io(format!("failed to replace '{}': {}", path.display(), e))
    })?;

    // Sync the parent directory so the rename itself is durable.
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Temporary file path in the same directory as the target.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| SiteError::InvalidPath(format!("invalid file path '{}'", target.display())))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path)
        .map_err(|e| SiteError::Io(format!("failed to create '{}': {}", path.display(), e)))?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        SiteError::Io(format!("failed to write '{}': {}", path.display(), e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        SiteError::Io(format!("failed to sync '{}': {}", path.display(), e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_new_file() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.mdx");

        atomic_write(&target, b"hello\n").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"hello\n");
    }

    #[test]
    fn replaces_existing_file() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.mdx");
        fs::write(&target, b"old").unwrap();

        atomic_write(&target, b"new").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"new");
    }

    #[test]
    fn leaves_no_temp_file_behind() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.mdx");

        atomic_write(&target, b"content").unwrap();

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["out.mdx".to_string()]);
    }

    #[test]
    fn missing_parent_directory_is_invalid_path() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("missing").join("out.mdx");

        let err = atomic_write(&target, b"content").unwrap_err();
        assert!(matches!(err, SiteError::InvalidPath(_)));
    }
}
