//! Aggregation and report rendering.
//!
//! [`aggregate`] folds matched requirements into category buckets;
//! [`render`] turns the aggregate into the gap-analysis and recommendation
//! texts, plus the full alignment report.

pub mod aggregate;
pub mod render;

pub use aggregate::{aggregate, CategoryBucket, ComplianceResult};
pub use render::{render_gap_report, render_recommendations, render_review_report, ReviewQuery};
