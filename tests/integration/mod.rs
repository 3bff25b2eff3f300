//! Integration tests for release-readme
//!
//! Each test builds a throwaway repository with a manifest, a release config
//! and README files, then drives the compiled binary against it.

mod test_check;
mod test_update;
