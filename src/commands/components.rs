//! `components` command: show the effective registry

use crate::core::error::ReadmeResult;
use crate::core::registry::ComponentRegistry;
use crate::core::resolve::README_FILE;
use std::path::Path;

/// Run the components command
pub fn run_components(root: &Path, registry: Option<&Path>, json: bool) -> ReadmeResult<()> {
  let registry = match registry {
    Some(path) => ComponentRegistry::load(path)?,
    None => ComponentRegistry::discover(root)?,
  };

  if json {
    println!("{}", serde_json::to_string_pretty(&registry)?);
    return Ok(());
  }

  match registry.source() {
    Some(path) => println!("📋 Components (from {})", path.display()),
    None => println!("📋 Components (built-in)"),
  }
  println!("   Repository: {}", registry.repository());
  println!();

  for (name, entry) in registry.iter() {
    println!("  {}", name);
    println!("     README:   {}", entry.directory.join(README_FILE).display());
    println!("     Workflow: {}", registry.workflow_path(&entry.workflow));
  }

  Ok(())
}
