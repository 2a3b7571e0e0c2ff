//! Report rendering.
//!
//! Renders a [`ComplianceResult`] into the two human-readable texts — the
//! gap analysis and the recommendation list — and assembles the full
//! alignment report around them. Categories always iterate in
//! first-encounter order, never sorted.

use chrono::{DateTime, Local};

use crate::matcher::ScoredEntity;
use crate::report::aggregate::ComplianceResult;

/// Shortened labels fall back to a period split only past this length.
const SHORT_LABEL_LEN: usize = 100;

/// Recommendations truncate requirement text past this length.
const MAX_RECOMMENDATION_LEN: usize = 200;

/// At most this many actions are listed per category.
const ACTIONS_PER_CATEGORY: usize = 5;

/// One notebook query/answer pair included in the review report.
#[derive(Debug, Clone)]
pub struct ReviewQuery {
    pub notebook_name: String,
    pub question: String,
    pub answer: String,
}

/// Render the gap-analysis text.
pub fn render_gap_report(result: &ComplianceResult) -> String {
    let mut report = Vec::new();

    report.push("## Gap Analysis\n".to_string());
    report.push(format!("**Total Requirements Checked:** {}", result.total));
    report.push(format!("**Requirements Covered:** {}", result.found));
    report.push(format!("**Requirements Missing:** {}\n", result.missing));

    if result.missing == 0 {
        report.push(
            "✅ **Excellent!** Your document appears to cover all identified requirements.\n"
                .to_string(),
        );
        return report.join("\n");
    }

    report.push("### Missing or Inadequate Requirements\n".to_string());

    for bucket in &result.categories {
        if bucket.missing == 0 {
            continue;
        }
        report.push(format!("\n#### {}", bucket.name));
        report.push(format!(
            "*Missing {} of {} requirements*\n",
            bucket.missing, bucket.total
        ));
        for req in &bucket.requirements {
            report.push(format!("- **{}**", short_label(&req.text)));
        }
    }

    report.push("\n".to_string());
    report.join("\n")
}

/// Render the numbered remediation actions.
///
/// Numbering is global and continuous across categories.
pub fn render_recommendations(result: &ComplianceResult) -> String {
    let mut report = Vec::new();

    report.push("## Recommendations\n".to_string());

    if result.missing == 0 {
        report.push(
            "Your document appears to cover all identified requirements. Consider:\n".to_string(),
        );
        report.push(
            "1. Reviewing the requirements in detail to ensure adequate depth of coverage"
                .to_string(),
        );
        report.push("2. Keeping the document updated as regulations evolve".to_string());
        report.push("3. Regular compliance audits\n".to_string());
        return report.join("\n");
    }

    report.push("### Priority Actions\n".to_string());

    let mut priority = 1;
    for bucket in &result.categories {
        if bucket.missing == 0 {
            continue;
        }
        report.push(format!("\n#### {}\n", bucket.name));

        for req in bucket.requirements.iter().take(ACTIONS_PER_CATEGORY) {
            let text = if req.text.chars().count() > MAX_RECOMMENDATION_LEN {
                format!("{}...", truncate(&req.text, MAX_RECOMMENDATION_LEN - 3))
            } else {
                req.text.clone()
            };
            report.push(format!("{priority}. **Add requirement:** {text}"));
            priority += 1;
        }
    }

    report.push("\n".to_string());
    report.join("\n")
}

/// Assemble the full alignment report: header, executive summary, source
/// notebooks, detailed query responses, then the gap analysis and/or
/// recommendations.
pub fn render_review_report(
    document_path: &str,
    notebooks: &[ScoredEntity],
    queries: &[ReviewQuery],
    result: &ComplianceResult,
    include_gap: bool,
    include_recommendations: bool,
    generated_at: DateTime<Local>,
) -> String {
    let mut report = Vec::new();

    report.push("# Document Compliance Review Report".to_string());
    report.push(format!("\n**Document:** {document_path}"));
    report.push(format!(
        "**Generated:** {}",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    report.push("\n---\n".to_string());

    report.push("## Executive Summary".to_string());
    report.push(format!(
        "\nReviewed document against {} relevant notebook(s):",
        notebooks.len()
    ));
    for nb in notebooks {
        report.push(format!(
            "- {} (relevance score: {})",
            nb.entity.name, nb.score
        ));
    }
    report.push("\n".to_string());

    report.push("## Source Notebooks".to_string());
    for nb in notebooks {
        report.push(format!("\n### {}", nb.entity.name));
        report.push(format!("- **Topics:** {}", nb.entity.topics.join(", ")));
        if let Some(url) = &nb.entity.url {
            report.push(format!("- **URL:** {url}"));
        }
        report.push(format!("- **Relevance Score:** {}", nb.score));
    }
    report.push("\n---\n".to_string());

    report.push("## Detailed Requirements".to_string());
    for query in queries {
        report.push(format!("\n### {}", query.notebook_name));
        report.push(format!("\n**Query:** {}\n", query.question));
        report.push(format!("**Response:**\n{}\n", query.answer));
        report.push("\n---\n".to_string());
    }

    if include_gap {
        report.push(render_gap_report(result));
    }
    if include_recommendations {
        report.push(render_recommendations(result));
    }

    report.join("\n")
}

/// Shortened requirement label for gap bullets: text before the first colon
/// if one exists, else text up to the first period plus ellipsis when the
/// full text is long, else the full text.
fn short_label(text: &str) -> String {
    if let Some(prefix) = text.split(':').next() {
        if prefix.len() < text.len() {
            return prefix.to_string();
        }
    }
    if text.contains('.') && text.chars().count() > SHORT_LABEL_LEN {
        let prefix = text.split('.').next().unwrap_or(text);
        return format!("{prefix}...");
    }
    text.to_string()
}

/// Truncate to at most `max` characters on a char boundary.
fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
