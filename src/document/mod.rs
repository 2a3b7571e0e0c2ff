//! Document text acquisition.
//!
//! Thin collaborator around the filesystem: reads pre-decoded plain-text
//! formats and hands the core an already-materialized text blob. Binary
//! formats (docx, pdf) are deliberately unsupported here — extracting them
//! is an external concern, and their output can be fed in as `.txt`.

use std::fs;
use std::path::Path;

use crate::error::{LacunaError, Result};

/// Extensions this collaborator can read.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "md"];

/// Read the text content of a document.
pub fn extract_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(LacunaError::DocumentNotFound {
            path: path.to_path_buf(),
        });
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(LacunaError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: format!(".{extension}"),
            supported: SUPPORTED_EXTENSIONS
                .iter()
                .map(|e| format!(".{e}"))
                .collect::<Vec<_>>()
                .join(", "),
        });
    }

    Ok(fs::read_to_string(path)?)
}

/// Recursively collect supported documents under each input path.
///
/// Directories are walked depth-first with entries sorted by name; explicit
/// file arguments are taken as-is when supported. Duplicates (the same path
/// reachable through two inputs) are removed, first occurrence wins.
pub fn collect_documents(inputs: &[impl AsRef<Path>]) -> Result<Vec<std::path::PathBuf>> {
    let mut found = Vec::new();

    for input in inputs {
        let path = input.as_ref();
        if path.is_dir() {
            collect_dir(path, &mut found)?;
        } else if path.is_file() && is_supported(path) {
            found.push(path.to_path_buf());
        }
    }

    let mut unique = Vec::with_capacity(found.len());
    for path in found {
        if !unique.contains(&path) {
            unique.push(path);
        }
    }
    Ok(unique)
}

fn collect_dir(dir: &Path, found: &mut Vec<std::path::PathBuf>) -> Result<()> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<std::io::Result<_>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            collect_dir(&path, found)?;
        } else if is_supported(&path) {
            found.push(path);
        }
    }
    Ok(())
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}
