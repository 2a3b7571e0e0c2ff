//! Terminal output.
//!
//! Lacuna is a one-shot batch tool, so the UI surface is small: an
//! [`Output`] writer that respects verbosity and applies consistent styling
//! to status lines. Report bodies go to stdout unstyled so they can be
//! redirected into files.

pub mod output;

pub use output::{Output, OutputMode};
