//! The requirement record shared by both extractors.

use serde::{Deserialize, Serialize};

/// One extracted obligation or question.
///
/// `found` and `evidence` start unset and are written once by a matcher run;
/// everything else is fixed at extraction time. A `found` verdict is always
/// backed by at least one evidence snippet, because the matcher derives both
/// from the same whole-word occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// Sequential identifier assigned at extraction time (`R0001`, ...).
    pub id: String,

    /// Originating file, when the extractor knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Nearest preceding heading/category label, or `"General"`.
    #[serde(rename = "section")]
    pub category: String,

    /// Normalized requirement sentence, whitespace-collapsed.
    #[serde(rename = "requirement")]
    pub text: String,

    /// Ranked keywords, bounded by the extractor's top-N budget.
    pub keywords: Vec<String>,

    /// Match verdict; false until a matcher run marks it.
    #[serde(default)]
    pub found: bool,

    /// Evidence snippets supporting a `found` verdict.
    #[serde(default)]
    pub evidence: Vec<String>,
}

impl Requirement {
    /// Create an unmatched requirement.
    pub fn new(id: String, category: String, text: String, keywords: Vec<String>) -> Self {
        Self {
            id,
            source: None,
            category,
            text,
            keywords,
            found: false,
            evidence: Vec::new(),
        }
    }

    /// Attach the originating file path.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}
