//! The update pass: resolve, rewrite, persist, accumulate
//!
//! Entries are processed one at a time in manifest order. Skipped entries are
//! logged and recorded; an I/O failure on a README that exists aborts the run.

use crate::core::config::{ReleaseConfig, ReleaseManifest};
use crate::core::error::ReadmeResult;
use crate::core::registry::ComponentRegistry;
use crate::core::resolve::resolve;
use crate::core::store::ReadmeStore;
use crate::readme::rewrite;
use crate::report::UpdateReport;

/// Bring every resolvable README in line with the manifest
///
/// With `dry_run` nothing is written; the report still says what would change.
pub fn update_readmes(
  manifest: &ReleaseManifest,
  config: &ReleaseConfig,
  registry: &ComponentRegistry,
  store: &mut dyn ReadmeStore,
  dry_run: bool,
) -> ReadmeResult<UpdateReport> {
  let mut report = UpdateReport::new(dry_run);
  let resolution = resolve(manifest, config, registry, &*store);

  for skipped in resolution.skipped {
    tracing::warn!(package = %skipped.package_path, "skipping: {}", skipped.reason);
    report.record_skipped(skipped);
  }

  for target in &resolution.targets {
    let tag_name = target.tag_name();
    let workflow_path = registry.workflow_path(&target.workflow_file);
    tracing::info!(
      readme = %target.readme_path.display(),
      version = %target.version,
      tag = %tag_name,
      "processing"
    );

    let content = store.read(&target.readme_path)?;
    let result = rewrite(&content, &target.version, &workflow_path, &tag_name);

    if !result.changed {
      tracing::debug!(readme = %target.readme_path.display(), "already up to date");
      report.record_unchanged(target);
      continue;
    }

    if !dry_run {
      store.write(&target.readme_path, &result.content)?;
    }
    report.record_changed(target);
  }

  Ok(report)
}
