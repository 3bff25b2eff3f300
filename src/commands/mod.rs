//! CLI commands for release-readme
//!
//! - **update**: rewrite READMEs for the versions in the release manifest
//! - **check**: report READMEs that `update` would change, without writing
//! - **components**: list the effective component registry
//!
//! Commands return `ReadmeResult<()>`; `main` maps errors to exit codes.

pub mod components;
pub mod update;

pub use components::run_components;
pub use update::{Inputs, run_check, run_update};
