//! GitHub Actions reporting: warning annotations and step outputs

use crate::core::error::{ReadmeResult, ResultExt};
use crate::report::UpdateReport;
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Step output that tells later steps whether a commit is needed
pub const FILES_MODIFIED: &str = "files_modified";

/// Where and how to publish results for a workflow run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitHubReporter {
  /// Step output file (`$GITHUB_OUTPUT`)
  pub output_path: Option<PathBuf>,
  /// Emit `::warning::` workflow commands
  pub annotations: bool,
}

impl GitHubReporter {
  /// Build from the environment; an explicit output path wins over `$GITHUB_OUTPUT`
  pub fn from_env(explicit_output: Option<PathBuf>) -> Self {
    let output_path = explicit_output.or_else(|| env::var_os("GITHUB_OUTPUT").map(PathBuf::from));
    let annotations = env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true");
    Self {
      output_path,
      annotations,
    }
  }

  /// Warning annotations for every skipped entry
  pub fn annotations(&self, report: &UpdateReport) -> Vec<String> {
    if !self.annotations {
      return Vec::new();
    }

    report
      .skipped
      .iter()
      .map(|s| {
        format!(
          "::warning title=README skipped::{}",
          escape_data(&format!("{}: {}", s.package_path, s.reason))
        )
      })
      .collect()
  }

  /// Emit annotations and append `files_modified` to the output file
  pub fn publish(&self, report: &UpdateReport) -> ReadmeResult<()> {
    for line in self.annotations(report) {
      println!("{}", line);
    }

    if let Some(path) = &self.output_path {
      let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open GitHub output file {}", path.display()))?;
      writeln!(file, "{}={}", FILES_MODIFIED, report.files_modified)
        .with_context(|| format!("Failed to write GitHub output file {}", path.display()))?;
      tracing::debug!(path = %path.display(), files_modified = report.files_modified, "wrote step output");
    }

    Ok(())
  }
}

/// Escape a workflow command message
fn escape_data(value: &str) -> String {
  value.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}
