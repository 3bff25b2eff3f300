//! `update` and `check` commands

use crate::core::config::{ReleaseConfig, ReleaseManifest};
use crate::core::error::{ReadmeError, ReadmeResult};
use crate::core::registry::ComponentRegistry;
use crate::core::store::FsStore;
use crate::core::update::update_readmes;
use crate::report::UpdateReport;
use crate::report::github::GitHubReporter;
use std::path::PathBuf;

/// Input file locations shared by `update` and `check`
#[derive(Debug, Clone)]
pub struct Inputs {
  pub manifest: PathBuf,
  pub config: PathBuf,
  /// Repository root README directories are relative to
  pub root: PathBuf,
  /// Registry file; discovered under `root` when not given
  pub registry: Option<PathBuf>,
}

struct Loaded {
  manifest: ReleaseManifest,
  config: ReleaseConfig,
  registry: ComponentRegistry,
}

impl Inputs {
  fn load(&self) -> ReadmeResult<Loaded> {
    let manifest = ReleaseManifest::load(&self.manifest)?;
    let config = ReleaseConfig::load(&self.config)?;
    let registry = match &self.registry {
      Some(path) => ComponentRegistry::load(path)?,
      None => ComponentRegistry::discover(&self.root)?,
    };

    tracing::debug!(
      packages = manifest.len(),
      registry = %registry.source().map(|p| p.display().to_string()).unwrap_or_else(|| "built-in".to_string()),
      "loaded inputs"
    );

    Ok(Loaded {
      manifest,
      config,
      registry,
    })
  }

  fn run(&self, dry_run: bool) -> ReadmeResult<UpdateReport> {
    let loaded = self.load()?;
    if loaded.manifest.is_empty() {
      tracing::warn!(manifest = %self.manifest.display(), "manifest has no packages");
    }

    let mut store = FsStore::new(&self.root);
    update_readmes(
      &loaded.manifest,
      &loaded.config,
      &loaded.registry,
      &mut store,
      dry_run,
    )
  }
}

/// Run the update command
pub fn run_update(inputs: &Inputs, dry_run: bool, json: bool, github_output: Option<PathBuf>) -> ReadmeResult<()> {
  let report = inputs.run(dry_run)?;

  let mut reporter = GitHubReporter::from_env(github_output);
  if json {
    // Workflow commands share stdout with the JSON document
    reporter.annotations = false;
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    report.print();
  }

  reporter.publish(&report)
}

/// Run the check command
///
/// Fails with [`ReadmeError::OutOfDate`] when any README would change.
pub fn run_check(inputs: &Inputs, json: bool) -> ReadmeResult<()> {
  let report = inputs.run(true)?;

  if json {
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    for skipped in &report.skipped {
      println!("⚠️  Skipped {}: {}", skipped.package_path, skipped.reason);
    }
  }

  if report.files_modified {
    return Err(ReadmeError::OutOfDate {
      files: report.changed_paths(),
    });
  }

  if !json {
    println!("✅ All READMEs are up to date");
  }
  Ok(())
}
