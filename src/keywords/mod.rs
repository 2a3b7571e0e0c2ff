//! Keyword extraction and ranking.
//!
//! Every other component works on keyword sets produced here. The extractor
//! lowercases its input, tokenizes on runs of alphabetic characters of
//! length >= 3, drops stopwords, then ranks the survivors under one of two
//! policies:
//!
//! - [`RankPolicy::LongestFirst`] — string length descending. Used for
//!   requirement text, where longer terms tend to be the specific ones
//!   ("authentication" over "all").
//! - [`RankPolicy::MostFrequent`] — occurrence count descending. Used for
//!   whole-document and questionnaire text, where repetition signals topic.
//!
//! Ties break by first occurrence in the input for both policies. The two
//! policies produce materially different keyword sets; call sites must not
//! swap one for the other.

use crate::error::{LacunaError, Result};

/// Ranking policy for extracted tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankPolicy {
    /// Longer tokens first; ties by first occurrence.
    LongestFirst,
    /// More frequent tokens first; ties by first occurrence.
    MostFrequent,
}

/// Stopwords for requirement-scoped extraction.
///
/// Articles, modals, and requirement boilerplate that carry no search value.
const REQUIREMENT_STOPWORDS: &[&str] = &[
    "you", "must", "should", "shall", "need", "required", "requires", "ensure", "establish",
    "maintain", "implement", "apply", "the", "and", "for", "with", "that", "this", "from", "have",
    "has", "been",
];

/// Stopwords for document-scoped extraction (notebook selection).
const DOCUMENT_STOPWORDS: &[&str] = &[
    "the",
    "and",
    "for",
    "with",
    "this",
    "that",
    "from",
    "have",
    "has",
    "will",
    "would",
    "could",
    "should",
    "may",
    "must",
    "can",
    "are",
    "was",
    "were",
    "been",
    "being",
    "not",
    "but",
    "all",
    "any",
    "such",
    "shall",
    "including",
    "which",
    "where",
    "when",
    "who",
    "what",
];

/// Stopwords tuned for directive questionnaire language.
const DIRECTIVE_STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "this", "from", "are", "was", "were", "have", "has",
    "will", "shall", "must", "should", "can", "you", "your", "please", "provide", "describe",
    "explain", "include", "state",
];

/// Extracts and ranks keywords from text.
///
/// Pure and deterministic: identical input and configuration always yield
/// the same ordered keyword sequence.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    policy: RankPolicy,
    top_n: usize,
    stopwords: &'static [&'static str],
}

impl KeywordExtractor {
    /// Create an extractor with an explicit configuration.
    ///
    /// Fails fast on `top_n == 0` — a zero keyword budget is configuration
    /// misuse, not corpus content.
    pub fn new(
        policy: RankPolicy,
        top_n: usize,
        stopwords: &'static [&'static str],
    ) -> Result<Self> {
        if top_n == 0 {
            return Err(LacunaError::InvalidArgument {
                message: "keyword top_n must be at least 1".into(),
            });
        }
        Ok(Self {
            policy,
            top_n,
            stopwords,
        })
    }

    /// Extractor for requirement sentences: longest-first, top 10.
    pub fn requirement_terms() -> Self {
        Self {
            policy: RankPolicy::LongestFirst,
            top_n: 10,
            stopwords: REQUIREMENT_STOPWORDS,
        }
    }

    /// Extractor for whole documents: most-frequent, top 20.
    pub fn document_terms() -> Self {
        Self {
            policy: RankPolicy::MostFrequent,
            top_n: 20,
            stopwords: DOCUMENT_STOPWORDS,
        }
    }

    /// Extractor for questionnaire paragraphs: most-frequent, top 8.
    pub fn directive_terms() -> Self {
        Self {
            policy: RankPolicy::MostFrequent,
            top_n: 8,
            stopwords: DIRECTIVE_STOPWORDS,
        }
    }

    /// Ranking policy in effect.
    pub fn policy(&self) -> RankPolicy {
        self.policy
    }

    /// Keyword budget in effect.
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Extract the top-N ranked keywords from `text`.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let tokens = tokenize(text);

        // Unique tokens in first-occurrence order, with counts.
        let mut order: Vec<(String, usize)> = Vec::new();
        for token in tokens {
            if self.stopwords.contains(&token.as_str()) {
                continue;
            }
            match order.iter_mut().find(|(w, _)| *w == token) {
                Some((_, count)) => *count += 1,
                None => order.push((token, 1)),
            }
        }

        // Stable sort preserves first-occurrence order among ties.
        match self.policy {
            RankPolicy::LongestFirst => {
                order.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
            }
            RankPolicy::MostFrequent => {
                order.sort_by(|a, b| b.1.cmp(&a.1));
            }
        }

        order.into_iter().take(self.top_n).map(|(w, _)| w).collect()
    }
}

/// Lowercase `text` and split it into runs of alphabetic characters of
/// length >= 3.
fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphabetic())
        .filter(|run| run.chars().count() >= 3)
        .map(|run| run.to_string())
        .collect()
}
