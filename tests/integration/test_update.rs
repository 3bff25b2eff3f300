//! Integration tests for `release-readme update`

use crate::helpers::{NPM_PUBLISH_README, RELEASE_WORKFLOW_README, TestRepo, run_ok, run_release_readme};
use anyhow::Result;
use std::process::Command;

const BADGE_1_4_0: &str = "![Version](https://img.shields.io/badge/version-1.4.0-blue)";

fn release_repo() -> Result<TestRepo> {
  let repo = TestRepo::new()?;
  repo.manifest(&[("release", "1.4.0")])?;
  repo.config(&[("release", "release-workflow")])?;
  repo.write("release/README.md", RELEASE_WORKFLOW_README)?;
  Ok(repo)
}

#[test]
fn test_update_rewrites_badge_and_references() -> Result<()> {
  let repo = release_repo()?;

  run_ok(&repo.path, &["update", "--github-output", "out.txt"])?;

  let readme = repo.read("release/README.md")?;
  assert!(readme.starts_with(&format!("# Release workflow\n\n{}\n\nBuilds", BADGE_1_4_0)));
  assert!(readme.contains("uses: acme/reusable-workflows/.github/workflows/release.yml@release-workflow-v1.4.0"));
  assert!(!readme.contains("@main"));

  assert_eq!(repo.read("out.txt")?, "files_modified=true\n");

  Ok(())
}

#[test]
fn test_update_twice_is_idempotent() -> Result<()> {
  let repo = release_repo()?;

  run_ok(&repo.path, &["update"])?;
  let first = repo.read("release/README.md")?;

  run_ok(&repo.path, &["update", "--github-output", "out.txt"])?;
  assert_eq!(repo.read("release/README.md")?, first);
  assert_eq!(repo.read("out.txt")?, "files_modified=false\n");

  Ok(())
}

#[test]
fn test_update_moves_previous_release_tag() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.manifest(&[("release", "1.4.0")])?;
  repo.config(&[("release", "release-workflow")])?;
  repo.write(
    "release/README.md",
    "# Release\n\n![Version](https://img.shields.io/badge/version-1.3.0-blue)\n\n\
     uses: acme/reusable-workflows/.github/workflows/release.yml@release-workflow-v1.3.0\n",
  )?;

  run_ok(&repo.path, &["update"])?;

  let readme = repo.read("release/README.md")?;
  assert_eq!(
    readme,
    format!(
      "# Release\n\n{}\n\nuses: acme/reusable-workflows/.github/workflows/release.yml@release-workflow-v1.4.0\n",
      BADGE_1_4_0
    )
  );

  Ok(())
}

#[test]
fn test_update_builtin_components() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.manifest(&[("release", "1.4.0"), ("npm-publish", "2.0.0")])?;
  repo.config(&[("release", "release-workflow"), ("npm-publish", "npm-publish-workflow")])?;
  repo.write("release/README.md", RELEASE_WORKFLOW_README)?;
  repo.write("npm-publish/README.md", NPM_PUBLISH_README)?;

  let output = run_ok(&repo.path, &["update", "--json", "--github-output", "out.txt"])?;
  let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;

  assert_eq!(report["updated"].as_array().map(Vec::len), Some(2));
  assert_eq!(report["skipped"].as_array().map(Vec::len), Some(0));
  assert_eq!(report["files_modified"], true);

  let npm = repo.read("npm-publish/README.md")?;
  assert!(npm.contains("version-2.0.0-blue"));
  assert!(npm.contains("reusable-workflows/.github/workflows/npm-publish.yml@npm-publish-workflow-v2.0.0"));
  assert!(!npm.contains("@npm-publish-workflow-v1.9.0"));
  assert!(repo.read("release/README.md")?.contains("release.yml@release-workflow-v1.4.0"));

  assert_eq!(repo.read("out.txt")?, "files_modified=true\n");

  Ok(())
}

#[test]
fn test_update_skips_unknown_component_and_missing_readme() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.manifest(&[("release", "1.4.0"), ("npm-publish", "2.0.0"), ("legacy", "3.0.0")])?;
  repo.config(&[
    ("release", "release-workflow"),
    ("npm-publish", "npm-publish-workflow"),
    ("legacy", "legacy-deploy"),
  ])?;
  repo.write("release/README.md", RELEASE_WORKFLOW_README)?;

  let output = run_ok(&repo.path, &["update", "--json", "--github-output", "out.txt"])?;
  let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;

  assert_eq!(report["files_modified"], true);
  assert_eq!(report["updated"].as_array().map(Vec::len), Some(1));
  assert_eq!(report["updated"][0]["tag_name"], "release-workflow-v1.4.0");

  // Manifest order, not sorted order
  let skipped = report["skipped"].as_array().expect("skipped should be an array");
  assert_eq!(skipped.len(), 2);
  assert_eq!(skipped[0]["package_path"], "npm-publish");
  assert_eq!(skipped[0]["reason"]["kind"], "missing_readme");
  assert_eq!(skipped[1]["package_path"], "legacy");
  assert_eq!(skipped[1]["reason"]["kind"], "unknown_component");

  assert_eq!(repo.read("out.txt")?, "files_modified=true\n");

  Ok(())
}

#[test]
fn test_update_dry_run_leaves_files_alone() -> Result<()> {
  let repo = release_repo()?;

  let output = run_ok(&repo.path, &["update", "--dry-run"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("Would update"));
  assert!(stdout.contains("Dry-run"));
  assert_eq!(repo.read("release/README.md")?, RELEASE_WORKFLOW_README);

  Ok(())
}

#[test]
fn test_update_with_root_and_explicit_paths() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write("release/manifest.json", r#"{ "release": "2.0.0" }"#)?;
  repo.write(
    "release/config.json",
    r#"{ "packages": { "release": { "component": "release-workflow" } } }"#,
  )?;
  repo.write("site/release/README.md", "# Release\n")?;

  run_ok(
    &repo.path,
    &[
      "update",
      "--manifest",
      "release/manifest.json",
      "--config",
      "release/config.json",
      "--root",
      "site",
    ],
  )?;

  assert_eq!(
    repo.read("site/release/README.md")?,
    "# Release\n\n![Version](https://img.shields.io/badge/version-2.0.0-blue)\n"
  );

  Ok(())
}

#[test]
fn test_update_uses_registry_file() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.manifest(&[("deploy", "0.2.0")])?;
  repo.config(&[("deploy", "deploy")])?;
  repo.write(
    "release-readme.toml",
    r#"
repository = "ci-templates"

[components.deploy]
directory = "docs/deploy"
workflow = "deploy.yaml"
"#,
  )?;
  repo.write(
    "docs/deploy/README.md",
    "# Deploy\n\nuses: acme/ci-templates/.github/workflows/deploy.yaml@main\n",
  )?;

  run_ok(&repo.path, &["update"])?;

  let readme = repo.read("docs/deploy/README.md")?;
  assert!(readme.contains("version-0.2.0-blue"));
  assert!(readme.contains("ci-templates/.github/workflows/deploy.yaml@deploy-v0.2.0"));

  Ok(())
}

#[test]
fn test_update_malformed_config_fails() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.manifest(&[("release", "1.4.0")])?;
  repo.write(
    "release-please-config.json",
    r#"{ "packages": { "release": { "component": 42 } } }"#,
  )?;

  let output = run_release_readme(&repo.path, &["update"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr.contains("Malformed configuration"), "stderr: {}", stderr);

  Ok(())
}

#[test]
fn test_update_missing_manifest_fails() -> Result<()> {
  let repo = TestRepo::new()?;

  let output = run_release_readme(&repo.path, &["update"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr.contains(".release-please-manifest.json"));

  Ok(())
}

#[test]
fn test_update_in_github_actions() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.manifest(&[("legacy", "3.0.0")])?;
  repo.config(&[("legacy", "legacy-deploy")])?;
  let output_file = repo.path.join("github_output");

  let output = Command::new(env!("CARGO_BIN_EXE_release-readme"))
    .current_dir(&repo.path)
    .arg("update")
    .env("GITHUB_ACTIONS", "true")
    .env("GITHUB_OUTPUT", &output_file)
    .output()?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(output.status.success());
  assert!(stdout.contains("::warning title=README skipped::legacy: unknown component 'legacy-deploy'"));
  assert_eq!(std::fs::read_to_string(&output_file)?, "files_modified=false\n");

  Ok(())
}
