//! README rewriting
//!
//! A rewrite is two independent passes over the text:
//!
//! 1. **badge**: set the shields.io version badge to the released version,
//!    inserting it under the first `# ` heading when there is none
//! 2. **reference**: move `<workflow path>@main` and
//!    `<workflow path>@<component>-vX.Y.Z` to the released tag
//!
//! Badge lines and workflow references never overlap, so the order of the
//! passes does not matter. Rewriting is idempotent and never fails: input it
//! cannot work with (no heading, no references) leaves that pass a no-op.

pub mod badge;
pub mod reference;

use serde::Serialize;

/// Everything needed to rewrite one README
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteRequest<'a> {
  pub content: &'a str,
  pub version: &'a str,
  /// `<repository>/.github/workflows/<workflow file>`
  pub workflow_path: &'a str,
  /// `<component>-v<version>`
  pub tag_name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewriteResult {
  pub content: String,
  pub changed: bool,
}

impl RewriteRequest<'_> {
  pub fn apply(&self) -> RewriteResult {
    let badged = badge::apply(self.content, self.version);
    let content = reference::apply(&badged, self.workflow_path, self.tag_name);
    let changed = content != self.content;
    RewriteResult { content, changed }
  }
}

/// Rewrite README text for a released version
pub fn rewrite(content: &str, version: &str, workflow_path: &str, tag_name: &str) -> RewriteResult {
  RewriteRequest {
    content,
    version,
    workflow_path,
    tag_name,
  }
  .apply()
}
