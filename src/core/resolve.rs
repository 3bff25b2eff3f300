//! Manifest entry -> README target resolution
//!
//! Every manifest entry either becomes a [`ReadmeTarget`] or a
//! [`SkippedEntry`]. Skips are never fatal.

use crate::core::config::{ReleaseConfig, ReleaseManifest};
use crate::core::registry::ComponentRegistry;
use crate::core::store::ReadmeStore;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// README file name inside each component directory
pub const README_FILE: &str = "README.md";

/// A README that should be brought in line with a released version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadmeTarget {
  pub package_path: String,
  pub readme_path: PathBuf,
  pub version: String,
  pub component: String,
  pub workflow_file: String,
}

impl ReadmeTarget {
  /// Version-qualified tag for this release, e.g. `release-workflow-v1.4.0`
  pub fn tag_name(&self) -> String {
    format!("{}-v{}", self.component, self.version)
  }
}

/// Why a manifest entry was not processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
  /// Package has no component in the release config
  Unconfigured,
  /// Component is not in the registry
  UnknownComponent { component: String },
  /// Component directory has no README
  MissingReadme { path: PathBuf },
}

impl fmt::Display for SkipReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SkipReason::Unconfigured => write!(f, "no component configured"),
      SkipReason::UnknownComponent { component } => write!(f, "unknown component '{}'", component),
      SkipReason::MissingReadme { path } => write!(f, "README not found at {}", path.display()),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
  pub package_path: String,
  pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
  pub targets: Vec<ReadmeTarget>,
  pub skipped: Vec<SkippedEntry>,
}

/// Resolve every manifest entry against the release config and the registry
pub fn resolve(
  manifest: &ReleaseManifest,
  config: &ReleaseConfig,
  registry: &ComponentRegistry,
  store: &dyn ReadmeStore,
) -> Resolution {
  let mut resolution = Resolution::default();

  for entry in manifest.entries() {
    let skip = |reason| SkippedEntry {
      package_path: entry.package_path.clone(),
      reason,
    };

    let Some(component) = config.component_for(&entry.package_path) else {
      resolution.skipped.push(skip(SkipReason::Unconfigured));
      continue;
    };

    let Some(component_entry) = registry.get(component) else {
      resolution.skipped.push(skip(SkipReason::UnknownComponent {
        component: component.to_string(),
      }));
      continue;
    };

    let readme_path = component_entry.directory.join(README_FILE);
    if !store.exists(&readme_path) {
      resolution
        .skipped
        .push(skip(SkipReason::MissingReadme { path: readme_path }));
      continue;
    }

    resolution.targets.push(ReadmeTarget {
      package_path: entry.package_path,
      readme_path,
      version: entry.version,
      component: component.to_string(),
      workflow_file: component_entry.workflow.clone(),
    });
  }

  resolution
}
