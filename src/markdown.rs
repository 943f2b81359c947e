//! Markdown image link generation.
//!
//! This is the core of siteutils: scan image directories, derive human-readable
//! alt text from filenames, and render one markdown image-link line per file.
//!
//! All validation happens before any rendering output is handed to a writer,
//! so an invalid directory or an empty derived alt text never produces a
//! partially generated document.

use crate::error::{Result, SiteError};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Matches the filename characters that become spaces in alt text.
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[-_]").expect("Invalid separator regex"));

/// Matches the final extension segment: the last `.` and everything after it.
static EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[^.]*$").expect("Invalid extension regex"));

/// A discovered file within a source directory.
///
/// `source_dir` is the caller-supplied directory path, embedded verbatim as
/// the link-target prefix: it is not normalized, not URL-encoded, and no path
/// separator is inserted between it and `name`. Callers wanting a separator
/// must supply a trailing one themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// The file's base name as returned by the directory listing.
    pub name: String,
    /// The directory path the entry was found under, used as the link prefix.
    pub source_dir: String,
}

/// List image candidates in `dir`.
///
/// Every regular file whose name does not start with `.` is a candidate;
/// there is no extension or MIME filtering and no recursion into
/// subdirectories. Entry order is whatever the underlying directory listing
/// yields, which is deliberately not sorted.
///
/// # Errors
///
/// * [`SiteError::InvalidPath`] if `dir` does not exist or is not a directory
/// * [`SiteError::Io`] if the directory cannot be read
pub fn scan_images(dir: &str) -> Result<Vec<ImageEntry>> {
    let path = Path::new(dir);

    if !path.exists() {
        return Err(SiteError::InvalidPath(format!(
            "directory '{}' does not exist",
            dir
        )));
    }
    if !path.is_dir() {
        return Err(SiteError::InvalidPath(format!(
            "'{}' is not a directory",
            dir
        )));
    }

    let read_dir = fs::read_dir(path)
        .map_err(|e| SiteError::Io(format!("failed to read directory '{}': {}", dir, e)))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry
            .map_err(|e| SiteError::Io(format!("failed to read directory '{}': {}", dir, e)))?;

        let file_type = entry.file_type().map_err(|e| {
            SiteError::Io(format!(
                "failed to inspect '{}': {}",
                entry.path().display(),
                e
            ))
        })?;
        if !file_type.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();

        // Dot-files are never treated as images, regardless of extension.
        if name.starts_with('.') {
            continue;
        }

        entries.push(ImageEntry {
            name,
            source_dir: dir.to_string(),
        });
    }

    Ok(entries)
}

/// Derive alt text from a filename.
///
/// Hyphens and underscores become spaces, the final extension segment is
/// stripped, and the first character is upper-cased.
///
/// # Errors
///
/// [`SiteError::EmptyName`] if the result is empty (e.g. `"_.png"`), which
/// would otherwise emit malformed markdown.
pub fn alt_text(name: &str) -> Result<String> {
    let spaced = SEPARATORS.replace_all(name, " ");
    let stripped = EXTENSION.replace(&spaced, "");

    // Whitespace-only counts as empty: a separator-only name like "_.png"
    // reduces to a bare space after the replacements.
    if stripped.trim().is_empty() {
        return Err(SiteError::EmptyName(name.to_string()));
    }

    let mut chars = stripped.chars();
    match chars.next() {
        Some(first) => Ok(first.to_uppercase().collect::<String>() + chars.as_str()),
        None => Err(SiteError::EmptyName(name.to_string())),
    }
}

/// Render one markdown image-link line, newline-terminated.
///
/// The line has the form `![{alt}]({source_dir}{name})` with the directory
/// prefix concatenated verbatim.
pub fn image_line(entry: &ImageEntry) -> Result<String> {
    let alt = alt_text(&entry.name)?;
    Ok(format!("![{}]({}{})\n", alt, entry.source_dir, entry.name))
}

/// Render the image-link lines for all `dirs`, in call order.
///
/// Every directory is scanned (and therefore validated) before any line is
/// rendered, and every line is rendered before anything is returned, so a
/// failure anywhere yields no output at all. Directories are not separated by
/// blank lines or headers.
pub fn render_lines(dirs: &[String]) -> Result<String> {
    let mut scanned = Vec::with_capacity(dirs.len());
    for dir in dirs {
        scanned.push(scan_images(dir)?);
    }

    let mut out = String::new();
    for entries in &scanned {
        for entry in entries {
            out.push_str(&image_line(entry)?);
        }
    }

    Ok(out)
}
