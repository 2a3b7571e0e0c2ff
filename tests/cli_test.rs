//! Integration tests for the CLI.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn lacuna() -> Command {
    Command::new(cargo_bin("lacuna"))
}

const REQUIREMENTS_LISTING: &str = "\
1. Access Control
• Must implement multi-factor authentication for all privileged accounts
• Should rotate credentials and review access rights quarterly
";

const POLICY_DOCUMENT: &str = "\
All administrator accounts use multi-factor authentication. \
Privileged access is logged and reviewed.
";

fn setup_check_fixtures() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let document = temp.path().join("policy.md");
    let requirements = temp.path().join("requirements.txt");
    fs::write(&document, POLICY_DOCUMENT).unwrap();
    fs::write(&requirements, REQUIREMENTS_LISTING).unwrap();
    (temp, document, requirements)
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = lacuna();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gap analysis"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = lacuna();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_a_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = lacuna();
    cmd.assert().failure();
    Ok(())
}

#[test]
fn check_reports_gap_and_recommendations() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, document, requirements) = setup_check_fixtures();
    let mut cmd = lacuna();
    cmd.arg("check")
        .arg("--document")
        .arg(&document)
        .arg("--requirements")
        .arg(&requirements);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Parsed 2 requirements"))
        .stdout(predicate::str::contains("**Total Requirements Checked:** 2"))
        .stdout(predicate::str::contains("**Requirements Covered:** 1"))
        .stdout(predicate::str::contains("**Requirements Missing:** 1"))
        .stdout(predicate::str::contains("#### Access Control"))
        .stdout(predicate::str::contains(
            "1. **Add requirement:** Should rotate credentials and review access rights quarterly",
        ));
    Ok(())
}

#[test]
fn check_can_limit_output_to_gap_section() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, document, requirements) = setup_check_fixtures();
    let mut cmd = lacuna();
    cmd.arg("check")
        .arg("--document")
        .arg(&document)
        .arg("--requirements")
        .arg(&requirements)
        .arg("--output")
        .arg("gap");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("## Gap Analysis"))
        .stdout(predicate::str::contains("## Recommendations").not());
    Ok(())
}

#[test]
fn check_json_emits_the_aggregate() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, document, requirements) = setup_check_fixtures();
    let mut cmd = lacuna();
    cmd.arg("check")
        .arg("--document")
        .arg(&document)
        .arg("--requirements")
        .arg(&requirements)
        .arg("--json");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 2"))
        .stdout(predicate::str::contains("\"by_category\""))
        .stdout(predicate::str::contains("## Gap Analysis").not());
    Ok(())
}

#[test]
fn check_quiet_suppresses_progress_but_not_reports() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, document, requirements) = setup_check_fixtures();
    let mut cmd = lacuna();
    cmd.arg("--quiet")
        .arg("check")
        .arg("--document")
        .arg(&document)
        .arg("--requirements")
        .arg(&requirements);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Parsed").not())
        .stdout(predicate::str::contains("## Gap Analysis"));
    Ok(())
}

#[test]
fn check_missing_document_fails_with_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let requirements = temp.path().join("requirements.txt");
    fs::write(&requirements, REQUIREMENTS_LISTING).unwrap();

    let mut cmd = lacuna();
    cmd.arg("check")
        .arg("--document")
        .arg(temp.path().join("absent.md"))
        .arg("--requirements")
        .arg(&requirements);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
    Ok(())
}

#[test]
fn check_rejects_unsupported_document_format() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let document = temp.path().join("policy.docx");
    let requirements = temp.path().join("requirements.txt");
    fs::write(&document, "binary-ish").unwrap();
    fs::write(&requirements, REQUIREMENTS_LISTING).unwrap();

    let mut cmd = lacuna();
    cmd.arg("check")
        .arg("--document")
        .arg(&document)
        .arg("--requirements")
        .arg(&requirements);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(".docx"))
        .stderr(predicate::str::contains(".txt"));
    Ok(())
}

const LIBRARY: &str = r#"{
  "notebooks": {
    "nb-sec": {
      "id": "nb-sec",
      "name": "Encryption Standards",
      "description": "Covers backup and security policies",
      "topics": ["encryption"]
    },
    "nb-hr": {
      "id": "nb-hr",
      "name": "Onboarding",
      "description": "New hire process",
      "topics": ["hiring"]
    }
  }
}"#;

#[test]
fn select_scores_and_filters_catalog_entities() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let library = temp.path().join("library.json");
    fs::write(&library, LIBRARY).unwrap();

    let mut cmd = lacuna();
    cmd.arg("select")
        .arg("--text")
        .arg("encryption encryption backup security")
        .arg("--library")
        .arg(&library);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Encryption Standards"))
        .stdout(predicate::str::contains("\"keywords\""))
        .stdout(predicate::str::contains("Onboarding").not());
    Ok(())
}

#[test]
fn select_missing_library_reports_json_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = lacuna();
    cmd.arg("select")
        .arg("--text")
        .arg("encryption")
        .arg("--library")
        .arg("/nonexistent/library.json");
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("\"error\""));
    Ok(())
}

#[test]
fn select_requires_document_or_text() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let library = temp.path().join("library.json");
    fs::write(&library, LIBRARY).unwrap();

    let mut cmd = lacuna();
    cmd.arg("select").arg("--library").arg(&library);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
    Ok(())
}

const QUESTIONNAIRE: &str = "\
SECURITY QUESTIONNAIRE

Do you maintain a documented incident response plan?

Please attach your latest penetration test summary.

Our office is located in Lisbon.
";

#[test]
fn extract_writes_three_artifacts() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("questionnaire.txt");
    let out_dir = temp.path().join("out");
    fs::write(&input, QUESTIONNAIRE).unwrap();

    let mut cmd = lacuna();
    cmd.arg("extract")
        .arg("--input")
        .arg(&input)
        .arg("--output-dir")
        .arg(&out_dir);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Extracted 2 requirements from 1 file(s)"));

    let json = fs::read_to_string(out_dir.join("requirements.json"))?;
    assert!(json.contains("\"R0001\""));
    assert!(json.contains("\"R0002\""));
    assert!(json.contains("SECURITY QUESTIONNAIRE"));
    assert!(json.contains("questionnaire.txt"));

    let csv = fs::read_to_string(out_dir.join("requirements.csv"))?;
    assert!(csv.starts_with("id,source,section,requirement,keywords"));

    let summary = fs::read_to_string(out_dir.join("requirements_summary.md"))?;
    assert!(summary.contains("Requirements extracted: 2"));
    Ok(())
}

#[test]
fn extract_with_no_supported_inputs_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let mut cmd = lacuna();
    cmd.arg("extract")
        .arg("--input")
        .arg(temp.path())
        .arg("--output-dir")
        .arg(temp.path().join("out"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
    Ok(())
}

const REVIEW_DOCUMENT: &str = "\
Encryption Policy

All customer data is protected with encryption at rest and encryption in \
transit. Backup copies are encrypted. Multi-factor authentication is \
enforced for privileged accounts.
";

const REVIEW_LIBRARY: &str = r#"{
  "notebooks": {
    "nb-sec": {
      "id": "nb-sec",
      "name": "Encryption Standards",
      "description": "Data encryption and backup requirements",
      "topics": ["encryption", "backup"]
    }
  }
}"#;

const REVIEW_ANSWER: &str = "\
1. Data Protection
• All customer data must be protected with encryption at rest
• Credentials must be rotated every ninety days
";

#[test]
fn review_end_to_end_writes_alignment_report() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let document = temp.path().join("policy.md");
    let library = temp.path().join("library.json");
    let answers = temp.path().join("answers");
    let report = temp.path().join("report.md");
    fs::write(&document, REVIEW_DOCUMENT).unwrap();
    fs::write(&library, REVIEW_LIBRARY).unwrap();
    fs::create_dir(&answers).unwrap();
    fs::write(answers.join("nb-sec.txt"), REVIEW_ANSWER).unwrap();

    let mut cmd = lacuna();
    cmd.arg("review")
        .arg("--document")
        .arg(&document)
        .arg("--library")
        .arg(&library)
        .arg("--answers-dir")
        .arg(&answers)
        .arg("--report")
        .arg(&report);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Report generated:"));

    let content = fs::read_to_string(&report)?;
    assert!(content.contains("# Document Compliance Review Report"));
    assert!(content.contains("Encryption Standards"));
    assert!(content.contains("## Gap Analysis"));
    assert!(content.contains("**Total Requirements Checked:** 2"));
    assert!(content.contains("**Requirements Missing:** 1"));
    assert!(content.contains(
        "**Add requirement:** Credentials must be rotated every ninety days"
    ));
    Ok(())
}

#[test]
fn review_with_no_relevant_notebooks_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let document = temp.path().join("policy.md");
    let library = temp.path().join("library.json");
    let answers = temp.path().join("answers");
    fs::write(&document, REVIEW_DOCUMENT).unwrap();
    fs::write(&library, REVIEW_LIBRARY).unwrap();
    fs::create_dir(&answers).unwrap();

    let mut cmd = lacuna();
    cmd.arg("review")
        .arg("--document")
        .arg(&document)
        .arg("--library")
        .arg(&library)
        .arg("--answers-dir")
        .arg(&answers)
        .arg("--threshold")
        .arg("1000");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No relevant notebooks"));
    Ok(())
}

#[test]
fn review_requires_an_answer_source() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let document = temp.path().join("policy.md");
    let library = temp.path().join("library.json");
    fs::write(&document, REVIEW_DOCUMENT).unwrap();
    fs::write(&library, REVIEW_LIBRARY).unwrap();

    let mut cmd = lacuna();
    cmd.arg("review")
        .arg("--document")
        .arg(&document)
        .arg("--library")
        .arg(&library);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
    Ok(())
}

#[test]
fn completions_generates_bash_script() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = lacuna();
    cmd.arg("completions").arg("bash");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("lacuna"));
    Ok(())
}
