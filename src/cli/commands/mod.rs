//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! dispatched via [`CommandDispatcher`], which routes CLI subcommands to
//! their implementations.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod extract;
pub mod review;
pub mod select;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

/// Which report sections an `--output` selection enables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSections {
    pub gap: bool,
    pub recommendations: bool,
}

impl ReportSections {
    /// Parse the comma-separated `--output` values.
    pub fn from_options(options: &[String]) -> Self {
        let all = options.iter().any(|o| o == "all");
        Self {
            gap: all || options.iter().any(|o| o == "gap"),
            recommendations: all || options.iter().any(|o| o == "recommendations"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_enables_every_section() {
        let sections = ReportSections::from_options(&["all".to_string()]);
        assert!(sections.gap);
        assert!(sections.recommendations);
    }

    #[test]
    fn sections_parse_individually() {
        let sections = ReportSections::from_options(&["gap".to_string()]);
        assert!(sections.gap);
        assert!(!sections.recommendations);

        let sections = ReportSections::from_options(&["recommendations".to_string()]);
        assert!(!sections.gap);
        assert!(sections.recommendations);
    }

    #[test]
    fn unknown_options_enable_nothing() {
        let sections = ReportSections::from_options(&["alignment".to_string()]);
        assert!(!sections.gap);
        assert!(!sections.recommendations);
    }
}
