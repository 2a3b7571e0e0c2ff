//! Listing-form requirement extraction.
//!
//! Parses the numbered-category + bulleted-item shape typical of a generative
//! answer:
//!
//! ```text
//! 1. Governance and Internal Controls
//! • Must maintain a documented risk management framework
//! • Should review control effectiveness annually
//! ```
//!
//! Category lines set the grouping for every bullet that follows until the
//! next category line. Lines matching neither pattern are skipped silently;
//! text with no recognized structure yields an empty list, which is a valid
//! result.

use std::sync::LazyLock;

use regex::Regex;

use crate::keywords::KeywordExtractor;
use crate::requirements::{format_id, normalize_ws, Requirement, DEFAULT_CATEGORY};

static RE_CATEGORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s+(.+)").unwrap());
static RE_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[•◦]\s+(.+)").unwrap());

/// Category lines longer than this are treated as content, not headers.
const MAX_CATEGORY_LEN: usize = 100;

/// Bullet text must be strictly longer than this to count as a requirement.
const MIN_REQUIREMENT_LEN: usize = 20;

/// Parse requirements out of numbered-category + bullet text.
///
/// Ids are sequential within the call; category state is threaded locally
/// through the line loop, so the parser is reentrant.
pub fn parse_requirement_listing(text: &str) -> Vec<Requirement> {
    let extractor = KeywordExtractor::requirement_terms();
    let mut requirements = Vec::new();
    let mut current_category: Option<String> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        // Category headers are short numbered lines: "1. Access Control".
        if line.chars().count() < MAX_CATEGORY_LEN {
            if let Some(caps) = RE_CATEGORY.captures(line) {
                current_category = Some(caps[2].trim().to_string());
                continue;
            }
        }

        if let Some(caps) = RE_BULLET.captures(line) {
            let req_text = normalize_ws(caps[1].trim());
            // Very short bullets are noise, not obligations.
            if req_text.chars().count() > MIN_REQUIREMENT_LEN {
                let keywords = extractor.extract(&req_text);
                requirements.push(Requirement::new(
                    format_id(requirements.len() + 1),
                    current_category
                        .clone()
                        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
                    req_text,
                    keywords,
                ));
            }
        }
    }

    requirements
}
