//! Lacuna - requirement extraction and document gap analysis.
//!
//! Lacuna reads requirement listings from subject-matter sources, checks a
//! document for keyword-level coverage of each requirement, and reports the
//! gaps: which requirements the document addresses, which it misses, and
//! what to do about them.
//!
//! # Modules
//!
//! - [`catalog`] - Notebook catalog loading and the matchable entity model
//! - [`cli`] - Command-line interface and argument parsing
//! - [`document`] - Document text extraction and directory walking
//! - [`error`] - Error types and result aliases
//! - [`export`] - Requirement export artifacts (JSON, CSV, summary)
//! - [`keywords`] - Keyword tokenization, stopwords, and ranking policies
//! - [`matcher`] - Compliance verdicts and entity relevance scoring
//! - [`report`] - Compliance aggregation and report rendering
//! - [`requirements`] - Requirement model and the two extraction parsers
//! - [`sources`] - Answer sources for notebook review queries
//! - [`ui`] - Terminal output with verbosity modes
//!
//! # Example
//!
//! ```
//! use lacuna::keywords::KeywordExtractor;
//! use lacuna::matcher::compliance::check_requirement;
//! use lacuna::requirements::Requirement;
//!
//! let text = "All user accounts must enforce multi-factor authentication";
//! let keywords = KeywordExtractor::requirement_terms().extract(text);
//! let requirement = Requirement::new(
//!     "R0001".into(),
//!     "Access Control".into(),
//!     text.into(),
//!     keywords,
//! );
//! let outcome = check_requirement(&requirement, "We require multi-factor authentication.");
//! assert!(outcome.found);
//! ```

pub mod catalog;
pub mod cli;
pub mod document;
pub mod error;
pub mod export;
pub mod keywords;
pub mod matcher;
pub mod report;
pub mod requirements;
pub mod sources;
pub mod ui;

pub use error::{LacunaError, Result};
