//! Requirement-vs-document compliance matching.
//!
//! A requirement is "found" when enough of its top keywords occur as whole
//! words in the document. The threshold is a literal fixed rule, not a
//! tunable default:
//!
//! ```text
//! found  ⇔  matched >= max(2, ceil(0.4 × min(5, keyword_count)))
//! ```
//!
//! Only the top 5 keywords are consulted, so the ceiling term never exceeds
//! 2 in practice; the formula is preserved as-is.

use crate::matcher::context_snippet;
use crate::requirements::Requirement;

/// Keywords consulted per requirement.
const TOP_KEYWORDS: usize = 5;

/// Verdict and supporting evidence for one requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Whether the requirement counts as addressed.
    pub found: bool,
    /// Number of keywords located in the document.
    pub matched: usize,
    /// De-duplicated context snippets, one per matched keyword at most.
    pub evidence: Vec<String>,
}

impl MatchOutcome {
    fn miss() -> Self {
        Self {
            found: false,
            matched: 0,
            evidence: Vec::new(),
        }
    }
}

/// Check one requirement against document text.
///
/// A requirement with no keywords never matches — an empty keyword set is
/// not vacuously satisfied.
pub fn check_requirement(requirement: &Requirement, document: &str) -> MatchOutcome {
    let keywords: Vec<&String> = requirement.keywords.iter().take(TOP_KEYWORDS).collect();
    if keywords.is_empty() {
        return MatchOutcome::miss();
    }

    let doc_lower = document.to_lowercase();
    let mut matched = 0;
    let mut evidence: Vec<String> = Vec::new();

    for keyword in &keywords {
        if let Some(snippet) = context_snippet(&doc_lower, keyword) {
            matched += 1;
            // Duplicate snippets happen when keywords share a context window.
            if !evidence.contains(&snippet) {
                evidence.push(snippet);
            }
        }
    }

    MatchOutcome {
        found: matched >= found_threshold(keywords.len()),
        matched,
        evidence,
    }
}

/// Check a requirement and record the verdict on it.
pub fn apply_verdict(requirement: &mut Requirement, document: &str) -> MatchOutcome {
    let outcome = check_requirement(requirement, document);
    requirement.found = outcome.found;
    requirement.evidence = outcome.evidence.clone();
    outcome
}

/// `max(2, ceil(0.4 × n))` for the consulted keyword count `n`.
fn found_threshold(consulted: usize) -> usize {
    // ceil(2n/5) in integer arithmetic.
    let ceil_two_fifths = (2 * consulted).div_ceil(5);
    ceil_two_fifths.max(2)
}
