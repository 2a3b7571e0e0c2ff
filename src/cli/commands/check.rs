//! Check command implementation.
//!
//! `lacuna check` parses a requirements listing, matches every requirement
//! against the document, and renders the gap-analysis and recommendation
//! reports (or the raw aggregate as JSON).

use crate::cli::args::CheckArgs;
use crate::document;
use crate::error::Result;
use crate::matcher::compliance::apply_verdict;
use crate::report::{aggregate, render_gap_report, render_recommendations};
use crate::requirements::parse_requirement_listing;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};
use super::ReportSections;

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let document_content = document::extract_text(&self.args.document)?;
        let requirements_text = document::extract_text(&self.args.requirements)?;

        let mut requirements = parse_requirement_listing(&requirements_text);
        out.status(&format!("Parsed {} requirements", requirements.len()));
        tracing::debug!(
            document = %self.args.document.display(),
            count = requirements.len(),
            "running compliance check"
        );

        for requirement in &mut requirements {
            let outcome = apply_verdict(requirement, &document_content);
            out.detail(&format!(
                "{} [{}] matched {} keyword(s)",
                requirement.id, requirement.category, outcome.matched
            ));
        }

        let result = aggregate(&requirements);

        if self.args.json {
            out.result(&serde_json::to_string_pretty(&result)?);
            return Ok(CommandResult::success());
        }

        let sections = ReportSections::from_options(&self.args.output);
        if sections.gap {
            out.result(&render_gap_report(&result));
        }
        if sections.recommendations {
            out.result(&render_recommendations(&result));
        }

        Ok(CommandResult::success())
    }
}
