//! Select command implementation.
//!
//! `lacuna select` extracts document keywords and scores every catalog
//! entity against them, printing the selection as JSON. A catalog load
//! failure is reported as a JSON error object with a non-zero exit — the
//! matcher is never invoked on a broken catalog.

use serde_json::json;

use crate::catalog::load_catalog;
use crate::cli::args::SelectArgs;
use crate::document;
use crate::error::{LacunaError, Result};
use crate::keywords::KeywordExtractor;
use crate::matcher::{select_entities, FieldWeights};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// Keywords echoed in the selection result.
const REPORTED_KEYWORDS: usize = 10;

/// The select command implementation.
pub struct SelectCommand {
    args: SelectArgs,
}

impl SelectCommand {
    /// Create a new select command.
    pub fn new(args: SelectArgs) -> Self {
        Self { args }
    }

    fn document_text(&self) -> Result<String> {
        if let Some(path) = &self.args.document {
            return document::extract_text(path);
        }
        if let Some(text) = &self.args.text {
            return Ok(text.clone());
        }
        Err(LacunaError::InvalidArgument {
            message: "select needs --document or --text".into(),
        })
    }
}

impl Command for SelectCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let text = self.document_text()?;
        let keywords = KeywordExtractor::document_terms().extract(&text);
        tracing::debug!(keyword_count = keywords.len(), "extracted document keywords");

        let catalog = match load_catalog(&self.args.library) {
            Ok(catalog) => catalog,
            Err(err) => {
                out.result(&json!({ "error": err.to_string() }).to_string());
                return Ok(CommandResult::failure(1));
            }
        };

        let selected = select_entities(
            &catalog,
            &keywords,
            self.args.threshold,
            &FieldWeights::default(),
        );
        out.detail(&format!(
            "{} of {} entities at or above threshold {}",
            selected.len(),
            catalog.len(),
            self.args.threshold
        ));

        let result = json!({
            "keywords": keywords.iter().take(REPORTED_KEYWORDS).collect::<Vec<_>>(),
            "notebooks": selected,
        });
        out.result(&serde_json::to_string_pretty(&result)?);

        Ok(CommandResult::success())
    }
}
