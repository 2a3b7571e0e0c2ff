//! Keyword-overlap matching.
//!
//! One matching vocabulary, two modes:
//!
//! - [`compliance`] — requirement vs. document text: a boolean verdict under
//!   a fixed overlap threshold, with evidence snippets.
//! - [`scoring`] — entity vs. keyword set: an additive relevance score with
//!   per-field weights.
//!
//! Both modes locate keywords in lowercased targets; shared helpers live
//! here so the two paths cannot drift apart numerically.

pub mod compliance;
pub mod scoring;

pub use compliance::{check_requirement, MatchOutcome};
pub use scoring::{score_entity, select_entities, FieldWeights, ScoredEntity};

use regex::Regex;

/// Maximum characters kept in an evidence snippet.
const MAX_SNIPPET_LEN: usize = 150;

/// Context window captured on either side of a matched keyword.
const CONTEXT_WINDOW: usize = 100;

/// Find the first whole-word occurrence of `keyword` in `target_lower` and
/// capture up to [`CONTEXT_WINDOW`] characters of context on each side.
///
/// Returns `None` when the keyword does not occur as a whole word. The
/// context window never crosses newlines; a keyword standing alone still
/// yields itself as the snippet, so a located keyword always produces a
/// non-empty snippet.
pub(crate) fn context_snippet(target_lower: &str, keyword: &str) -> Option<String> {
    let pattern = format!(
        r".{{0,{w}}}\b{kw}\b.{{0,{w}}}",
        w = CONTEXT_WINDOW,
        kw = regex::escape(keyword)
    );
    // Keywords are lowercase alphabetic tokens; the pattern is always valid.
    let re = Regex::new(&pattern).ok()?;
    let snippet = re.find(target_lower)?.as_str().trim();
    Some(truncate_chars(snippet, MAX_SNIPPET_LEN))
}

/// Truncate to at most `max` characters on a char boundary.
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_captures_surrounding_context() {
        let doc = "all privileged accounts use multi-factor authentication at login";
        let snippet = context_snippet(doc, "authentication").unwrap();
        assert!(snippet.contains("multi-factor authentication at login"));
    }

    #[test]
    fn snippet_requires_whole_word() {
        assert!(context_snippet("the factorial function", "factor").is_none());
        assert!(context_snippet("a multi-factor setup", "factor").is_some());
    }

    #[test]
    fn snippet_is_keyword_when_document_is_only_the_keyword() {
        let snippet = context_snippet("encryption", "encryption").unwrap();
        assert_eq!(snippet, "encryption");
    }

    #[test]
    fn snippet_absent_when_document_shorter_than_keyword() {
        assert!(context_snippet("enc", "encryption").is_none());
    }

    #[test]
    fn snippet_does_not_cross_newlines() {
        let doc = "unrelated preamble line\nencryption is enforced\ntrailing line";
        let snippet = context_snippet(doc, "encryption").unwrap();
        assert_eq!(snippet, "encryption is enforced");
    }

    #[test]
    fn snippet_is_bounded_at_150_chars() {
        let doc = format!("{} encryption {}", "a".repeat(200), "b".repeat(200));
        let snippet = context_snippet(&doc, "encryption").unwrap();
        assert!(snippet.chars().count() <= 150);
    }

    #[test]
    fn truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
