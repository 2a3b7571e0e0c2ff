//! Review command implementation.
//!
//! `lacuna review` is the orchestrator: it extracts the document text,
//! selects relevant notebooks from the catalog, fetches each notebook's
//! requirements answer, runs the compliance analysis per answer, merges the
//! per-notebook results, and writes the full alignment report.

use std::path::PathBuf;

use chrono::Local;

use crate::catalog::load_catalog;
use crate::cli::args::ReviewArgs;
use crate::document;
use crate::error::{LacunaError, Result};
use crate::keywords::KeywordExtractor;
use crate::matcher::compliance::apply_verdict;
use crate::matcher::{select_entities, FieldWeights, ScoredEntity};
use crate::report::{aggregate, render_review_report, ComplianceResult, ReviewQuery};
use crate::requirements::parse_requirement_listing;
use crate::sources::{review_question, AnswerSource, CommandAnswerSource, FileAnswerSource};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};
use super::ReportSections;

/// The review command implementation.
pub struct ReviewCommand {
    args: ReviewArgs,
}

impl ReviewCommand {
    /// Create a new review command.
    pub fn new(args: ReviewArgs) -> Self {
        Self { args }
    }

    fn answer_source(&self) -> Result<Box<dyn AnswerSource>> {
        if let Some(dir) = &self.args.answers_dir {
            return Ok(Box::new(FileAnswerSource::new(dir.clone())));
        }
        if let Some(template) = &self.args.ask_command {
            return Ok(Box::new(CommandAnswerSource::new(template.clone())));
        }
        Err(LacunaError::InvalidArgument {
            message: "review needs --answers-dir or --ask-command".into(),
        })
    }

    fn report_path(&self) -> PathBuf {
        if let Some(path) = &self.args.report {
            return path.clone();
        }
        let stem = self
            .args
            .document
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        PathBuf::from(format!("{stem}_alignment_report.md"))
    }

    /// Fetch answers and analyze compliance per notebook, merging results.
    fn analyze(
        &self,
        notebooks: &[ScoredEntity],
        document_content: &str,
        source: &dyn AnswerSource,
        out: &Output,
    ) -> (Vec<ReviewQuery>, ComplianceResult) {
        let question = review_question(&self.args.depth);
        let mut queries = Vec::new();
        let mut combined = ComplianceResult::default();

        for nb in notebooks {
            out.status(&format!("Querying: {}...", nb.entity.name));
            let answer = match source.fetch(&nb.entity, question) {
                Ok(answer) => answer,
                Err(err) => {
                    out.warning(&format!("Skipping {}: {}", nb.entity.name, err));
                    tracing::warn!(notebook = %nb.entity.id, error = %err, "answer fetch failed");
                    continue;
                }
            };

            let mut requirements = parse_requirement_listing(&answer);
            for requirement in &mut requirements {
                apply_verdict(requirement, document_content);
            }
            combined.merge(aggregate(&requirements));

            queries.push(ReviewQuery {
                notebook_name: nb.entity.name.clone(),
                question: question.to_string(),
                answer,
            });
        }

        (queries, combined)
    }
}

impl Command for ReviewCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let source = self.answer_source()?;

        out.status(&format!(
            "Reviewing document: {}",
            self.args.document.display()
        ));

        let document_content = document::extract_text(&self.args.document)?;
        out.status(&format!(
            "Extracted {} characters",
            document_content.chars().count()
        ));

        let keywords = KeywordExtractor::document_terms().extract(&document_content);
        let catalog = load_catalog(&self.args.library)?;
        let notebooks = select_entities(
            &catalog,
            &keywords,
            self.args.threshold,
            &FieldWeights::default(),
        );

        if notebooks.is_empty() {
            out.error("No relevant notebooks found. Try lowering the threshold.");
            return Ok(CommandResult::failure(1));
        }
        out.status(&format!("Found {} relevant notebook(s)", notebooks.len()));
        for nb in &notebooks {
            out.detail(&format!("- {} (score: {})", nb.entity.name, nb.score));
        }

        let (queries, result) = self.analyze(&notebooks, &document_content, source.as_ref(), out);
        if queries.is_empty() {
            out.error("Failed to query any notebooks");
            return Ok(CommandResult::failure(1));
        }

        let sections = ReportSections::from_options(&self.args.output);
        let report = render_review_report(
            &self.args.document.display().to_string(),
            &notebooks,
            &queries,
            &result,
            sections.gap,
            sections.recommendations,
            Local::now(),
        );

        let report_path = self.report_path();
        std::fs::write(&report_path, &report)?;
        out.success(&format!("Report generated: {}", report_path.display()));
        out.result(&report);

        Ok(CommandResult::success())
    }
}
