//! Version badge rendering, replacement and insertion

use regex::Regex;
use std::sync::LazyLock;

/// Literal prefix that identifies a version badge
pub const BADGE_MARKER: &str = "![Version](https://img.shields.io/badge/version-";

const BADGE_SUFFIX: &str = "-blue)";

/// Marker, any version-like token, fixed suffix
static BADGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(&format!(
    r"{}[^)\s]+{}",
    regex::escape(BADGE_MARKER),
    regex::escape(BADGE_SUFFIX)
  ))
  .expect("Invalid regex pattern for version badge")
});

/// First top-level heading line (`# ` at line start), up to but excluding `\n`
static HEADING_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?m)^# [^\n]*").expect("Invalid regex pattern for top-level heading"));

/// Render the badge for a version
pub fn render(version: &str) -> String {
  format!("{}{}{}", BADGE_MARKER, version, BADGE_SUFFIX)
}

/// Bring the version badge in `content` up to `version`
///
/// With a marker present, every badge is rewritten to the new value. Without
/// one, a blank line and the badge go in as new `\n`-terminated lines after the
/// first `# ` heading. No heading: no-op.
pub fn apply(content: &str, version: &str) -> String {
  let badge = render(version);

  if content.contains(BADGE_MARKER) {
    return BADGE_REGEX.replace_all(content, regex::NoExpand(&badge)).into_owned();
  }

  match HEADING_REGEX.find(content) {
    Some(heading) => {
      let at = heading.end();
      let mut out = String::with_capacity(content.len() + badge.len() + 2);
      out.push_str(&content[..at]);
      out.push_str("\n\n");
      out.push_str(&badge);
      out.push_str(&content[at..]);
      out
    }
    None => content.to_string(),
  }
}
