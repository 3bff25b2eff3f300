//! Integration tests for `release-readme check`

use crate::helpers::{RELEASE_WORKFLOW_README, TestRepo, run_ok, run_release_readme};
use anyhow::Result;

fn release_repo() -> Result<TestRepo> {
  let repo = TestRepo::new()?;
  repo.manifest(&[("release", "1.4.0")])?;
  repo.config(&[("release", "release-workflow")])?;
  repo.write("release/README.md", RELEASE_WORKFLOW_README)?;
  Ok(repo)
}

#[test]
fn test_check_fails_when_out_of_date() -> Result<()> {
  let repo = release_repo()?;

  let output = run_release_readme(&repo.path, &["check"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(3));
  assert!(stderr.contains("out of date"));
  assert!(stderr.contains("README.md"));
  // check never writes
  assert_eq!(repo.read("release/README.md")?, RELEASE_WORKFLOW_README);

  Ok(())
}

#[test]
fn test_check_passes_after_update() -> Result<()> {
  let repo = release_repo()?;

  run_ok(&repo.path, &["update"])?;
  let output = run_ok(&repo.path, &["check"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("All READMEs are up to date"));

  Ok(())
}

#[test]
fn test_check_json_reports_pending_changes() -> Result<()> {
  let repo = release_repo()?;

  let output = run_release_readme(&repo.path, &["check", "--json"])?;
  let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;

  assert_eq!(output.status.code(), Some(3));
  assert_eq!(report["dry_run"], true);
  assert_eq!(report["files_modified"], true);

  Ok(())
}
