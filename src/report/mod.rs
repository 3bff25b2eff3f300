//! Run report
//!
//! The update pass accumulates an [`UpdateReport`] and returns it; nothing is
//! published until the caller decides to (stdout, JSON, GitHub output).

pub mod github;

use crate::core::resolve::{ReadmeTarget, SkippedEntry};
use serde::Serialize;
use std::path::PathBuf;

/// One README that was (or in dry-run would be) rewritten
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadmeChange {
  pub package_path: String,
  pub readme_path: PathBuf,
  pub component: String,
  pub version: String,
  pub tag_name: String,
}

impl ReadmeChange {
  pub fn from_target(target: &ReadmeTarget) -> Self {
    Self {
      package_path: target.package_path.clone(),
      readme_path: target.readme_path.clone(),
      component: target.component.clone(),
      version: target.version.clone(),
      tag_name: target.tag_name(),
    }
  }
}

/// Outcome of an update pass over the manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateReport {
  pub updated: Vec<ReadmeChange>,
  pub unchanged: Vec<PathBuf>,
  pub skipped: Vec<SkippedEntry>,
  /// True iff at least one processed README changed
  pub files_modified: bool,
  pub dry_run: bool,
}

impl UpdateReport {
  pub fn new(dry_run: bool) -> Self {
    Self {
      dry_run,
      ..Default::default()
    }
  }

  pub fn record_changed(&mut self, target: &ReadmeTarget) {
    self.updated.push(ReadmeChange::from_target(target));
    self.files_modified = true;
  }

  pub fn record_unchanged(&mut self, target: &ReadmeTarget) {
    self.unchanged.push(target.readme_path.clone());
  }

  pub fn record_skipped(&mut self, skipped: SkippedEntry) {
    self.skipped.push(skipped);
  }

  /// Paths of every README that changed
  pub fn changed_paths(&self) -> Vec<PathBuf> {
    self.updated.iter().map(|c| c.readme_path.clone()).collect()
  }

  /// Human-readable summary on stdout
  pub fn print(&self) {
    let verb = if self.dry_run { "Would update" } else { "Updated" };

    for change in &self.updated {
      println!(
        "📝 {} {} ({} → {})",
        verb,
        change.readme_path.display(),
        change.component,
        change.tag_name
      );
    }
    for path in &self.unchanged {
      println!("✅ Up to date: {}", path.display());
    }
    for skipped in &self.skipped {
      println!("⚠️  Skipped {}: {}", skipped.package_path, skipped.reason);
    }

    println!();
    if self.files_modified {
      println!("{} {} README file(s)", verb, self.updated.len());
    } else {
      println!("✅ All READMEs are up to date");
    }
    if self.dry_run {
      println!("🔍 Dry-run mode (no changes applied)");
    }
  }
}
