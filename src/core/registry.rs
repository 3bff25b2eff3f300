//! Component registry: component name -> README directory + workflow file
//!
//! A built-in table ships with the binary. A repository can replace it with a
//! registry file, searched in order: release-readme.toml, .release-readme.toml,
//! .github/release-readme.toml
//!
//! ```toml
//! repository = "reusable-workflows"
//!
//! [components.release-workflow]
//! directory = "release"
//! workflow = "release.yml"
//! ```

use crate::core::config::malformed;
use crate::core::error::{ReadmeResult, ResultExt};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Repository name that prefixes every workflow reference
pub const DEFAULT_REPOSITORY: &str = "reusable-workflows";

const BUILTIN_COMPONENTS: &[(&str, &str, &str)] = &[
  ("release-workflow", "release", "release.yml"),
  ("npm-publish-workflow", "npm-publish", "npm-publish.yml"),
];

/// Where a component's README lives and which workflow file it documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEntry {
  /// README directory, relative to the repository root
  pub directory: PathBuf,
  /// Workflow file name under `.github/workflows/`
  pub workflow: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
  #[serde(default)]
  repository: Option<String>,
  #[serde(default)]
  components: BTreeMap<String, ComponentEntry>,
}

/// Process-wide, read-only component table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentRegistry {
  repository: String,
  components: BTreeMap<String, ComponentEntry>,
  /// Registry file this table was loaded from (None = built-in)
  #[serde(skip_serializing_if = "Option::is_none")]
  source: Option<PathBuf>,
}

impl Default for ComponentRegistry {
  fn default() -> Self {
    Self::builtin()
  }
}

impl ComponentRegistry {
  /// The table compiled into the binary
  pub fn builtin() -> Self {
    let components = BUILTIN_COMPONENTS
      .iter()
      .map(|(name, directory, workflow)| {
        (
          name.to_string(),
          ComponentEntry {
            directory: PathBuf::from(directory),
            workflow: workflow.to_string(),
          },
        )
      })
      .collect();

    Self {
      repository: DEFAULT_REPOSITORY.to_string(),
      components,
      source: None,
    }
  }

  /// Find registry file in search order
  pub fn find_registry_path(root: &Path) -> Option<PathBuf> {
    let candidates = vec![
      root.join("release-readme.toml"),
      root.join(".release-readme.toml"),
      root.join(".github").join("release-readme.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load the registry for a repository root, falling back to the built-in table
  pub fn discover(root: &Path) -> ReadmeResult<Self> {
    match Self::find_registry_path(root) {
      Some(path) => Self::load(&path),
      None => Ok(Self::builtin()),
    }
  }

  /// Load a registry file. Its components replace the built-in table.
  pub fn load(path: &Path) -> ReadmeResult<Self> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read registry {}", path.display()))?;
    let file: RegistryFile = toml_edit::de::from_str(&content).map_err(|e| malformed(path, e.to_string()))?;

    let registry = Self {
      repository: file.repository.unwrap_or_else(|| DEFAULT_REPOSITORY.to_string()),
      components: file.components,
      source: Some(path.to_path_buf()),
    };
    registry.validate(path)?;
    Ok(registry)
  }

  fn validate(&self, path: &Path) -> ReadmeResult<()> {
    if self.repository.trim().is_empty() {
      return Err(malformed(path, "repository name must not be empty"));
    }

    for (name, entry) in &self.components {
      if entry.directory.as_os_str().is_empty() {
        return Err(malformed(path, format!("component '{}' has an empty directory", name)));
      }
      if !(entry.workflow.ends_with(".yml") || entry.workflow.ends_with(".yaml")) {
        return Err(malformed(
          path,
          format!(
            "component '{}' workflow '{}' must be a .yml or .yaml file",
            name, entry.workflow
          ),
        ));
      }
      if entry.workflow.contains('/') {
        return Err(malformed(
          path,
          format!("component '{}' workflow must be a file name, not a path", name),
        ));
      }
    }

    Ok(())
  }

  pub fn get(&self, component: &str) -> Option<&ComponentEntry> {
    self.components.get(component)
  }

  pub fn repository(&self) -> &str {
    &self.repository
  }

  pub fn source(&self) -> Option<&Path> {
    self.source.as_deref()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentEntry)> {
    self.components.iter().map(|(name, entry)| (name.as_str(), entry))
  }

  /// `<repository>/.github/workflows/<workflow>`, the text usage examples reference
  pub fn workflow_path(&self, workflow: &str) -> String {
    format!("{}/.github/workflows/{}", self.repository, workflow)
  }
}
