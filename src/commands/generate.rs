//! Implementation of the `siteutils generate` command.
//!
//! Create mode: produce a new `.md`/`.mdx` document of image links, optionally
//! seeded with a template file's contents. The document is assembled fully in
//! memory and written atomically, so a failed run never leaves a partial or
//! truncated file.

use crate::cli::GenerateArgs;
use crate::error::{Result, SiteError};
use crate::fs::atomic_write;
use crate::markdown;
use std::fs;
use std::path::Path;

/// Execute the `siteutils generate` command.
pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let extension = if args.md { ".md" } else { ".mdx" };
    let output_path = format!("{}{}", args.output, extension);

    // Validate and render everything before the output file is touched.
    let template = match &args.template {
        Some(path) => Some(read_template(path)?),
        None => None,
    };
    let lines = markdown::render_lines(&args.dirs)?;

    let mut content =
        String::with_capacity(template.as_ref().map_or(0, |t| t.len()) + lines.len());
    if let Some(template) = &template {
        content.push_str(template);
    }
    content.push_str(&lines);

    atomic_write(Path::new(&output_path), content.as_bytes())?;

    if let Some(path) = &args.template {
        println!("Copied '{}' content to '{}'", path, output_path);
    }
    println!("Generated {} file '{}'", extension, output_path);

    Ok(())
}

/// Read the template file, validating it up front.
fn read_template(path: &str) -> Result<String> {
    let template = Path::new(path);

    if !template.exists() {
        return Err(SiteError::InvalidPath(format!(
            "template file '{}' does not exist",
            path
        )));
    }
    if !template.is_file() {
        return Err(SiteError::InvalidPath(format!("'{}' is not a file", path)));
    }

    fs::read_to_string(template)
        .map_err(|e| SiteError::Io(format!("failed to read template '{}': {}", path, e)))
}
