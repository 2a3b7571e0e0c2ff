//! Requirement extraction.
//!
//! Two extraction front-ends produce the same [`Requirement`] records:
//!
//! - [`listing`] parses numbered-category + bulleted-item text, the shape of
//!   a generative answer listing obligations.
//! - [`paragraph`] classifies heading-delimited paragraphs of a structured
//!   document (questionnaires, DDQs) with line-level heuristics.
//!
//! Both assign sequential ids, populate keywords at extraction time, and
//! leave the match verdict unset for a later matcher run.

pub mod listing;
pub mod model;
pub mod paragraph;

pub use listing::parse_requirement_listing;
pub use model::Requirement;
pub use paragraph::{is_heading, parse_requirement_paragraphs, segment_paragraphs, Paragraph};

/// Category label used when no heading precedes a requirement.
pub const DEFAULT_CATEGORY: &str = "General";

/// Format a sequential requirement id (`R0001`, `R0002`, ...).
pub(crate) fn format_id(seq: usize) -> String {
    format!("R{:04}", seq)
}

/// Collapse runs of whitespace into single spaces and trim.
pub fn normalize_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
