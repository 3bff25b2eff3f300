//! Core engine for release-readme
//!
//! - **config**: release manifest and release config loading
//! - **error**: error types with contextual help messages and exit codes
//! - **registry**: component name -> README directory + workflow file
//! - **resolve**: manifest entries -> README targets (or skips)
//! - **store**: filesystem collaborator for README files
//! - **update**: the resolve / rewrite / persist pass

pub mod config;
pub mod error;
pub mod registry;
pub mod resolve;
pub mod store;
pub mod update;
