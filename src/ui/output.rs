//! Output mode and writer.

use std::str::FromStr;

use console::style;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including per-step detail.
    Verbose,
    /// Show progress and status only.
    #[default]
    Normal,
    /// Show results only, no progress chatter.
    Quiet,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode shows progress/status lines.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows per-step detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Output writer that respects output mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write a status line if the mode allows it.
    pub fn status(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Write a detail line in verbose mode only.
    pub fn detail(&self, msg: &str) {
        if self.mode.shows_detail() {
            println!("{}", style(msg).dim());
        }
    }

    /// Write a success line if the mode allows status.
    pub fn success(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{} {}", style("✓").green(), msg);
        }
    }

    /// Write a warning line; warnings show in every mode.
    pub fn warning(&self, msg: &str) {
        eprintln!("{} {}", style("!").yellow(), msg);
    }

    /// Write an error line; errors show in every mode.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("✗").red().bold(), msg);
    }

    /// Write result content unconditionally and unstyled (reports, JSON).
    pub fn result(&self, content: &str) {
        println!("{}", content);
    }
}
