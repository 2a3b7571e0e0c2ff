//! Paragraph-form requirement extraction.
//!
//! Operates on heading-delimited paragraphs of a structured document
//! (questionnaires, due-diligence documents). The heading rule lives here —
//! not in the document collaborator — so alternate front-ends segmenting
//! other formats replicate exactly the same sectioning.
//!
//! Requirement-line classification is an ordered set of named predicate
//! rules, each unit-testable on its own, mirroring how error patterns are
//! registered elsewhere in this codebase.

use std::sync::LazyLock;

use regex::Regex;

use crate::keywords::KeywordExtractor;
use crate::requirements::{format_id, normalize_ws, Requirement};

/// A pre-segmented paragraph with its enclosing section heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Normalized paragraph text.
    pub text: String,
    /// Nearest preceding heading, trailing colon stripped; empty if none.
    pub section: String,
}

/// Headings longer than this are body text.
const MAX_HEADING_LEN: usize = 120;

/// Paragraphs shorter than this never qualify as requirements.
const MIN_REQUIREMENT_LEN: usize = 8;

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

lazy_regex!(RE_QUESTION_NUMBER, r"^(q(uestion)?\s*\d+[:.)-]?)");
lazy_regex!(RE_OUTLINE_PREFIX, r"^\d+(\.\d+)*[.)-]\s+");
lazy_regex!(
    RE_DIRECTIVE_VERB,
    r"\b(please|provide|describe|explain|confirm|state|attach|submit|include)\b"
);
lazy_regex!(RE_OBLIGATION_TERM, r"\b(shall|must|required|requirement)\b");

/// A named requirement-line predicate, matched against lowercased text.
pub struct LineRule {
    /// Rule name (for debugging and tests).
    pub name: &'static str,
    regex: &'static LazyLock<Regex>,
}

impl LineRule {
    /// Whether this rule fires for the given lowercased text.
    pub fn matches(&self, lowered: &str) -> bool {
        self.regex.is_match(lowered)
    }
}

/// Ordered requirement-line rules. Order is part of the contract: earlier
/// rules are the more specific ones, and tests pin each independently.
pub static REQUIREMENT_LINE_RULES: &[LineRule] = &[
    LineRule {
        name: "question-number",
        regex: &RE_QUESTION_NUMBER,
    },
    LineRule {
        name: "outline-prefix",
        regex: &RE_OUTLINE_PREFIX,
    },
    LineRule {
        name: "directive-verb",
        regex: &RE_DIRECTIVE_VERB,
    },
    LineRule {
        name: "obligation-term",
        regex: &RE_OBLIGATION_TERM,
    },
];

/// Heading rule: short line that either ends with a colon or whose
/// alphabetic content is entirely upper-case.
pub fn is_heading(text: &str) -> bool {
    if text.chars().count() > MAX_HEADING_LEN {
        return false;
    }
    if text.ends_with(':') {
        return true;
    }
    let alpha: String = text
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect();
    let has_alpha = alpha.chars().any(|c| c.is_ascii_alphabetic());
    has_alpha && !alpha.chars().any(|c| c.is_ascii_lowercase())
}

/// Whether a non-heading paragraph qualifies as a requirement.
pub fn is_requirement_line(text: &str) -> bool {
    if text.chars().count() < MIN_REQUIREMENT_LEN {
        return false;
    }
    if text.ends_with('?') {
        return true;
    }
    let lowered = text.to_lowercase();
    REQUIREMENT_LINE_RULES
        .iter()
        .any(|rule| rule.matches(&lowered))
}

/// Segment pre-decoded plain text into paragraphs with enclosing sections.
///
/// Applies the heading rule line by line; heading lines become the current
/// section for everything after them and produce no paragraph themselves.
pub fn segment_paragraphs(text: &str) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut current_section = String::new();

    for raw in text.lines() {
        let line = normalize_ws(raw);
        if line.is_empty() {
            continue;
        }
        if is_heading(&line) {
            current_section = line.trim_end_matches(':').to_string();
            continue;
        }
        paragraphs.push(Paragraph {
            text: line,
            section: current_section.clone(),
        });
    }

    paragraphs
}

/// Turn qualifying paragraphs into requirements.
///
/// Every qualifying paragraph gets a sequential id, its enclosing section as
/// category, and up to 8 frequency-ranked keywords under the directive
/// stopword set.
pub fn parse_requirement_paragraphs(paragraphs: &[Paragraph]) -> Vec<Requirement> {
    let extractor = KeywordExtractor::directive_terms();
    let mut requirements = Vec::new();

    for para in paragraphs {
        if !is_requirement_line(&para.text) {
            continue;
        }
        let keywords = extractor.extract(&para.text);
        requirements.push(Requirement::new(
            format_id(requirements.len() + 1),
            para.section.clone(),
            para.text.clone(),
            keywords,
        ));
    }

    requirements
}
