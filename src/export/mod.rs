//! Extraction output persistence.
//!
//! Writes the three artifacts of a requirement-extraction run: the full
//! record set as JSON, a flat CSV for spreadsheet triage, and a short
//! Markdown summary. Pure I/O around the core's output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::requirements::Requirement;

/// How many requirements the Markdown summary lists.
const SUMMARY_LIMIT: usize = 30;

/// Paths of the artifacts written by [`write_all`].
#[derive(Debug, Clone)]
pub struct ExportPaths {
    pub json: PathBuf,
    pub csv: PathBuf,
    pub summary: PathBuf,
}

/// Write all three artifacts into `out_dir`, creating it if needed.
pub fn write_all(
    out_dir: &Path,
    requirements: &[Requirement],
    source_count: usize,
) -> Result<ExportPaths> {
    fs::create_dir_all(out_dir)?;

    let paths = ExportPaths {
        json: out_dir.join("requirements.json"),
        csv: out_dir.join("requirements.csv"),
        summary: out_dir.join("requirements_summary.md"),
    };

    fs::write(&paths.json, serde_json::to_string_pretty(requirements)?)?;
    fs::write(&paths.csv, render_csv(requirements))?;
    fs::write(&paths.summary, render_summary(requirements, source_count))?;

    Ok(paths)
}

/// Render the flat CSV view: id, source, section, requirement, keywords.
pub fn render_csv(requirements: &[Requirement]) -> String {
    let mut out = String::from("id,source,section,requirement,keywords\n");
    for req in requirements {
        let row = [
            req.id.as_str(),
            req.source.as_deref().unwrap_or(""),
            req.category.as_str(),
            req.text.as_str(),
            &req.keywords.join(","),
        ]
        .map(csv_field)
        .join(",");
        out.push_str(&row);
        out.push('\n');
    }
    out
}

/// Render the Markdown summary with counts and the first entries.
pub fn render_summary(requirements: &[Requirement], source_count: usize) -> String {
    let mut lines = Vec::new();
    lines.push("# Requirements Summary".to_string());
    lines.push(String::new());
    lines.push(format!("- Source documents: {source_count}"));
    lines.push(format!("- Requirements extracted: {}", requirements.len()));
    lines.push(String::new());
    lines.push("## Top Requirements".to_string());
    lines.push(String::new());
    for req in requirements.iter().take(SUMMARY_LIMIT) {
        let section = if req.category.is_empty() {
            String::new()
        } else {
            format!(" ({})", req.category)
        };
        lines.push(format!("- `{}`{}: {}", req.id, section, req.text));
    }
    lines.join("\n")
}

/// Quote a CSV field when it contains a comma, quote, or newline.
fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
