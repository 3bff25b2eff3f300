//! Usage-example reference retagging
//!
//! Usage examples point at `<workflow path>@<ref>`. After a release, refs on
//! `main` and refs on an older `<component>-vX.Y.Z` tag move to the new tag.

use regex::{Captures, Regex};

/// Branch name that usage examples track before their first pinned release
pub const MOVING_REF: &str = "main";

/// Component part of a tag name: everything before the last `-v`
pub fn component_of(tag_name: &str) -> Option<&str> {
  tag_name.rfind("-v").map(|pos| &tag_name[..pos]).filter(|c| !c.is_empty())
}

/// Characters that can follow a ref without being part of it
///
/// `@main` must not match `@main-ci-v1.0.0` or `@main.x`, otherwise the new tag
/// would be rewritten again on the next run.
const REF_END: &str = r"(?P<end>[^\w./\-]|$)";

/// Repoint every `<workflow_path>@main` and `<workflow_path>@<component>-vX.Y.Z`
/// at `<workflow_path>@<tag_name>`
pub fn apply(content: &str, workflow_path: &str, tag_name: &str) -> String {
  let target = format!("{}@{}", workflow_path, tag_name);

  let retagged = retag(content, workflow_path, &regex::escape(MOVING_REF), &target);

  let Some(component) = component_of(tag_name) else {
    return retagged;
  };

  let versioned = format!(r"{}-v\d+\.\d+\.\d+", regex::escape(component));
  retag(&retagged, workflow_path, &versioned, &target)
}

/// Replace `<workflow_path>@<ref>` with `target` wherever `ref_pattern` matches a whole ref
fn retag(content: &str, workflow_path: &str, ref_pattern: &str, target: &str) -> String {
  let pattern = format!("{}@{}{}", regex::escape(workflow_path), ref_pattern, REF_END);
  match Regex::new(&pattern) {
    Ok(re) => re
      .replace_all(content, |caps: &Captures| format!("{}{}", target, &caps["end"]))
      .into_owned(),
    // Escaped literals always compile; an oversized pattern just leaves the text as is
    Err(_) => content.to_string(),
  }
}
