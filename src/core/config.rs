//! Typed loaders for the two release inputs
//!
//! - the release manifest: `{ "<package path>": "<version>" }`
//! - the release config: `{ "packages": { "<package path>": { "component": "<name>" } } }`
//!
//! Both are deserialized into explicit records at the boundary. Anything that
//! does not fit the records is a [`ConfigError::Malformed`].

use crate::core::error::{ConfigError, ReadmeResult, ResultExt};
use serde::de::{self, DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default manifest location, relative to the working directory
pub const DEFAULT_MANIFEST: &str = ".release-please-manifest.json";

/// Default release config location, relative to the working directory
pub const DEFAULT_CONFIG: &str = "release-please-config.json";

/// One released package: where it lives and what version it is at
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
  pub package_path: String,
  pub version: String,
}

/// Release manifest mapping package paths to their released versions
///
/// Entries keep the order they have in the manifest file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseManifest {
  packages: Vec<(String, String)>,
}

impl<'de> Deserialize<'de> for ReleaseManifest {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct ManifestVisitor;

    impl<'de> Visitor<'de> for ManifestVisitor {
      type Value = ReleaseManifest;

      fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of package paths to version strings")
      }

      fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
      where
        A: MapAccess<'de>,
      {
        let mut seen = BTreeSet::new();
        let mut packages = Vec::new();

        while let Some((package_path, version)) = map.next_entry::<String, String>()? {
          if !seen.insert(package_path.clone()) {
            return Err(de::Error::custom(format!("duplicate package path '{}'", package_path)));
          }
          packages.push((package_path, version));
        }
        Ok(ReleaseManifest { packages })
      }
    }

    deserializer.deserialize_map(ManifestVisitor)
  }
}

impl ReleaseManifest {
  /// Load and validate a manifest file
  pub fn load(path: &Path) -> ReadmeResult<Self> {
    let manifest: ReleaseManifest = read_json(path)?;
    manifest.validate(path)?;
    Ok(manifest)
  }

  /// Build a manifest from in-memory pairs
  #[cfg(test)]
  pub fn from_entries<I, K, V>(entries: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    Self {
      packages: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
    }
  }

  fn validate(&self, path: &Path) -> ReadmeResult<()> {
    for (package_path, version) in &self.packages {
      if package_path.trim().is_empty() {
        return Err(malformed(path, "empty package path"));
      }
      if version.trim().is_empty() {
        return Err(malformed(path, format!("empty version for package '{}'", package_path)));
      }
    }
    Ok(())
  }

  /// Iterate over manifest entries in file order
  pub fn entries(&self) -> impl Iterator<Item = ManifestEntry> + '_ {
    self.packages.iter().map(|(package_path, version)| ManifestEntry {
      package_path: package_path.clone(),
      version: version.clone(),
    })
  }

  pub fn len(&self) -> usize {
    self.packages.len()
  }

  pub fn is_empty(&self) -> bool {
    self.packages.is_empty()
  }
}

/// Per-package release settings
///
/// Release tooling puts plenty of other keys here; only `component` matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageConfig {
  #[serde(default)]
  pub component: Option<String>,
}

/// Release config mapping package paths to their component
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReleaseConfig {
  pub packages: BTreeMap<String, PackageConfig>,
}

impl ReleaseConfig {
  /// Load and validate a release config file
  pub fn load(path: &Path) -> ReadmeResult<Self> {
    let config: ReleaseConfig = read_json(path)?;
    config.validate(path)?;
    Ok(config)
  }

  /// Build a config from `(package path, component)` pairs
  #[cfg(test)]
  pub fn from_components<I, K, V>(entries: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    Self {
      packages: entries
        .into_iter()
        .map(|(k, v)| {
          (
            k.into(),
            PackageConfig {
              component: Some(v.into()),
            },
          )
        })
        .collect(),
    }
  }

  fn validate(&self, path: &Path) -> ReadmeResult<()> {
    for (package_path, package) in &self.packages {
      if let Some(component) = &package.component
        && component.trim().is_empty()
      {
        return Err(malformed(path, format!("empty component for package '{}'", package_path)));
      }
    }
    Ok(())
  }

  /// Component name configured for a package path, if any
  pub fn component_for(&self, package_path: &str) -> Option<&str> {
    self.packages.get(package_path).and_then(|p| p.component.as_deref())
  }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> ReadmeResult<T> {
  if !path.exists() {
    return Err(ConfigError::NotFound { path: path.to_path_buf() }.into());
  }

  let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
  serde_json::from_str(&content).map_err(|e| malformed(path, e.to_string()))
}

pub(crate) fn malformed(path: &Path, reason: impl Into<String>) -> crate::core::error::ReadmeError {
  ConfigError::Malformed {
    path: PathBuf::from(path),
    reason: reason.into(),
  }
  .into()
}
