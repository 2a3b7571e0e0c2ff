//! Answer acquisition for the review orchestrator.
//!
//! Requirements come out of answers that an external knowledge-base tool
//! produces per notebook. That tool is a collaborator, so acquisition sits
//! behind [`AnswerSource`]: a file-backed source for pre-fetched answers and
//! a command-backed source that shells out to whatever CLI the user points
//! us at. A failing source is the caller's signal to skip that notebook,
//! not to abort the run.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::catalog::MatchableEntity;
use crate::error::{LacunaError, Result};

/// Produces the requirements answer for one catalog entity.
pub trait AnswerSource {
    /// Source name, used in logs and error messages.
    fn name(&self) -> &str;

    /// Fetch the answer text for `entity` given the review question.
    fn fetch(&self, entity: &MatchableEntity, question: &str) -> Result<String>;
}

/// Reads pre-fetched answers from a directory, `<entity-id>.txt` or `.md`.
pub struct FileAnswerSource {
    dir: PathBuf,
}

impl FileAnswerSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl AnswerSource for FileAnswerSource {
    fn name(&self) -> &str {
        "answers-dir"
    }

    fn fetch(&self, entity: &MatchableEntity, _question: &str) -> Result<String> {
        for extension in ["txt", "md"] {
            let candidate = self.dir.join(format!("{}.{extension}", entity.id));
            if candidate.exists() {
                return Ok(fs::read_to_string(candidate)?);
            }
        }
        Err(LacunaError::Source {
            name: self.name().to_string(),
            message: format!(
                "no answer file for '{}' under {}",
                entity.id,
                self.dir.display()
            ),
        })
    }
}

/// Runs a user-supplied command template, `{id}` and `{question}` replaced,
/// and captures stdout as the answer.
pub struct CommandAnswerSource {
    template: String,
}

impl CommandAnswerSource {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl AnswerSource for CommandAnswerSource {
    fn name(&self) -> &str {
        "ask-command"
    }

    fn fetch(&self, entity: &MatchableEntity, question: &str) -> Result<String> {
        let command = self
            .template
            .replace("{id}", &entity.id)
            .replace("{question}", question);

        let output = Command::new("sh")
            .arg("-c")
            .arg(&command)
            .output()
            .map_err(|e| LacunaError::Source {
                name: self.name().to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(LacunaError::Source {
                name: self.name().to_string(),
                message: format!(
                    "command exited with {}: {}",
                    output
                        .status
                        .code()
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "signal".to_string()),
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Build the review question for the requested depth.
pub fn review_question(depth: &str) -> &'static str {
    match depth {
        "quick" => {
            "What are the key requirements covered in this documentation? \
             Provide a high-level summary."
        }
        _ => {
            "What are the comprehensive requirements covered in this documentation? \
             Provide detailed information including all obligations, procedures, and standards."
        }
    }
}
