//! Extract command implementation.
//!
//! `lacuna extract` walks the input documents, classifies their paragraphs
//! with the questionnaire heuristics, and writes the requirement set as
//! JSON, CSV, and a Markdown summary.

use crate::cli::args::ExtractArgs;
use crate::document;
use crate::error::{LacunaError, Result};
use crate::export;
use crate::requirements::{format_id, parse_requirement_paragraphs, segment_paragraphs};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The extract command implementation.
pub struct ExtractCommand {
    args: ExtractArgs,
}

impl ExtractCommand {
    /// Create a new extract command.
    pub fn new(args: ExtractArgs) -> Self {
        Self { args }
    }
}

impl Command for ExtractCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let documents = document::collect_documents(&self.args.input)?;
        if documents.is_empty() {
            return Err(LacunaError::InvalidArgument {
                message: "no supported documents found under the --input paths".into(),
            });
        }

        let mut requirements = Vec::new();
        for path in &documents {
            let text = document::extract_text(path)?;
            let paragraphs = segment_paragraphs(&text);
            let extracted = parse_requirement_paragraphs(&paragraphs);
            out.detail(&format!(
                "{}: {} requirement(s)",
                path.display(),
                extracted.len()
            ));
            for req in extracted {
                // Re-sequence ids across documents and tag the origin.
                let seq = requirements.len() + 1;
                let mut req = req.with_source(path.display().to_string());
                req.id = format_id(seq);
                requirements.push(req);
            }
        }

        let paths = export::write_all(&self.args.output_dir, &requirements, documents.len())?;
        out.status(&format!("Wrote: {}", paths.json.display()));
        out.status(&format!("Wrote: {}", paths.csv.display()));
        out.status(&format!("Wrote: {}", paths.summary.display()));
        out.success(&format!(
            "Extracted {} requirements from {} file(s)",
            requirements.len(),
            documents.len()
        ));

        Ok(CommandResult::success())
    }
}
