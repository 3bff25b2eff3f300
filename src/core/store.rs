//! Filesystem collaborator for README files
//!
//! The resolver only needs `exists`; the update pass reads and writes. Paths
//! are always relative to the repository root so reports stay readable.

use crate::core::error::{ReadmeResult, ResultExt};
use std::fs;
use std::path::{Path, PathBuf};

/// Text file access used by the resolver and the update pass
pub trait ReadmeStore {
  /// Whether a file exists at `path`
  fn exists(&self, path: &Path) -> bool;

  /// Read a file as UTF-8 text
  fn read(&self, path: &Path) -> ReadmeResult<String>;

  /// Replace a file's contents
  fn write(&mut self, path: &Path, content: &str) -> ReadmeResult<()>;
}

/// Store backed by the real filesystem under a repository root
#[derive(Debug, Clone)]
pub struct FsStore {
  root: PathBuf,
}

impl FsStore {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }
}

impl ReadmeStore for FsStore {
  fn exists(&self, path: &Path) -> bool {
    self.root.join(path).is_file()
  }

  fn read(&self, path: &Path) -> ReadmeResult<String> {
    let full = self.root.join(path);
    fs::read_to_string(&full).with_context(|| format!("Failed to read {}", full.display()))
  }

  fn write(&mut self, path: &Path, content: &str) -> ReadmeResult<()> {
    let full = self.root.join(path);
    fs::write(&full, content).with_context(|| format!("Failed to write {}", full.display()))
  }
}
