//! Error types for release-readme with contextual messages and exit codes
//!
//! Only run-level failures live here. Per-entry problems (an unconfigured
//! package, an unknown component, a missing README) are not errors: they are
//! recorded as [`SkipReason`](crate::core::resolve::SkipReason)s and the run
//! carries on.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for release-readme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, missing files)
  User = 1,
  /// System error (I/O)
  System = 2,
  /// Validation failure (`check` found READMEs out of date)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for release-readme
#[derive(Debug)]
pub enum ReadmeError {
  /// Configuration errors (manifest, release config, registry)
  Config(ConfigError),

  /// READMEs are not in sync with the manifest
  OutOfDate { files: Vec<PathBuf> },

  /// I/O errors, with the operation that failed
  Io {
    source: io::Error,
    context: Option<String>,
  },

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl ReadmeError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    ReadmeError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    let prepend = |context: Option<String>| {
      Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str))
    };
    match self {
      ReadmeError::Message { message, context, help } => ReadmeError::Message {
        message,
        context: prepend(context),
        help,
      },
      ReadmeError::Io { source, context } => ReadmeError::Io {
        source,
        context: prepend(context),
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      ReadmeError::Config(_) => ExitCode::User,
      ReadmeError::OutOfDate { .. } => ExitCode::Validation,
      ReadmeError::Io { .. } => ExitCode::System,
      ReadmeError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ReadmeError::Config(e) => e.help_message(),
      ReadmeError::OutOfDate { .. } => Some("Run `release-readme update` and commit the result.".to_string()),
      ReadmeError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for ReadmeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReadmeError::Config(e) => write!(f, "{}", e),
      ReadmeError::OutOfDate { files } => {
        write!(f, "{} README file(s) are out of date:", files.len())?;
        for file in files {
          write!(f, "\n  {}", file.display())?;
        }
        Ok(())
      }
      ReadmeError::Io { source, context } => {
        write!(f, "I/O error: {}", source)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
      ReadmeError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for ReadmeError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ReadmeError::Io { source, .. } => Some(source),
      _ => None,
    }
  }
}

impl From<io::Error> for ReadmeError {
  fn from(err: io::Error) -> Self {
    ReadmeError::Io {
      source: err,
      context: None,
    }
  }
}

impl From<ConfigError> for ReadmeError {
  fn from(err: ConfigError) -> Self {
    ReadmeError::Config(err)
  }
}

impl From<String> for ReadmeError {
  fn from(msg: String) -> Self {
    ReadmeError::message(msg)
  }
}

impl From<&str> for ReadmeError {
  fn from(msg: &str) -> Self {
    ReadmeError::message(msg)
  }
}

impl From<serde_json::Error> for ReadmeError {
  fn from(err: serde_json::Error) -> Self {
    ReadmeError::message(format!("JSON error: {}", err))
  }
}

impl From<toml_edit::de::Error> for ReadmeError {
  fn from(err: toml_edit::de::Error) -> Self {
    ReadmeError::message(format!("TOML deserialization error: {}", err))
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// Input file not found
  NotFound { path: PathBuf },

  /// File exists but does not describe the expected records
  Malformed { path: PathBuf, reason: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => {
        Some("Pass the file explicitly with --manifest / --config, or run from the repository root.".to_string())
      }
      ConfigError::Malformed { .. } => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { path } => write!(f, "Configuration file not found: {}", path.display()),
      ConfigError::Malformed { path, reason } => {
        write!(f, "Malformed configuration in {}: {}", path.display(), reason)
      }
    }
  }
}

/// Result type alias for release-readme
pub type ReadmeResult<T> = Result<T, ReadmeError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> ReadmeResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<ReadmeError>,
{
  fn with_context<F>(self, f: F) -> ReadmeResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &ReadmeError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
