mod commands;
mod core;
mod readme;
mod report;

use clap::{Args, Parser, Subcommand};
use crate::core::config::{DEFAULT_CONFIG, DEFAULT_MANIFEST};
use crate::core::error::{ReadmeError, print_error};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Keep README version badges and workflow references in step with releases
#[derive(Parser)]
#[command(name = "release-readme")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Args)]
struct InputArgs {
  /// Release manifest (package path -> version)
  #[arg(long, default_value = DEFAULT_MANIFEST)]
  manifest: PathBuf,
  /// Release config (package path -> component)
  #[arg(long, default_value = DEFAULT_CONFIG)]
  config: PathBuf,
  /// Repository root that README directories are relative to
  #[arg(long, default_value = ".")]
  root: PathBuf,
  /// Component registry file (default: discovered under --root, else built-in)
  #[arg(long)]
  registry: Option<PathBuf>,
}

impl From<InputArgs> for commands::Inputs {
  fn from(args: InputArgs) -> Self {
    commands::Inputs {
      manifest: args.manifest,
      config: args.config,
      root: args.root,
      registry: args.registry,
    }
  }
}

#[derive(Subcommand)]
enum Commands {
  /// Rewrite READMEs for the versions in the release manifest
  Update {
    #[command(flatten)]
    inputs: InputArgs,
    /// Show what would change without writing files
    #[arg(long)]
    dry_run: bool,
    /// Output the report in JSON format
    #[arg(long)]
    json: bool,
    /// File to append `files_modified=<bool>` to (default: $GITHUB_OUTPUT)
    #[arg(long)]
    github_output: Option<PathBuf>,
  },

  /// Fail if any README is out of date with the release manifest
  Check {
    #[command(flatten)]
    inputs: InputArgs,
    /// Output the report in JSON format
    #[arg(long)]
    json: bool,
  },

  /// List the component registry
  Components {
    /// Repository root to discover the registry file under
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// Component registry file
    #[arg(long)]
    registry: Option<PathBuf>,
    /// Output the registry in JSON format
    #[arg(long)]
    json: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn init_logging(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("release_readme=debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("release_readme=info"))
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .without_time()
    .with_writer(std::io::stderr)
    .init();
}

fn main() {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let result = match cli.command {
    Commands::Update {
      inputs,
      dry_run,
      json,
      github_output,
    } => commands::run_update(&inputs.into(), dry_run, json, github_output),
    Commands::Check { inputs, json } => commands::run_check(&inputs.into(), json),
    Commands::Components { root, registry, json } => commands::run_components(&root, registry.as_deref(), json),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: ReadmeError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
