mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use darwinbuild_lib::Target;

use crate::cmd::{BuildArgs, cmd_build};
use crate::output::{OutputFormat, print_error, print_hint};

/// Build a darwinbuild project or group along with its dependencies
#[derive(Parser)]
#[command(name = "darwinbuild-recursive")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("target").required(true).args(["project", "group"])))]
struct Cli {
  /// Build a single project and everything it depends on
  #[arg(short = 'p', long, value_name = "PROJECT")]
  project: Option<String>,

  /// Build every project in a darwinxref group
  #[arg(short = 'g', long, value_name = "GROUP")]
  group: Option<String>,

  /// Build root directory (default: $DARWIN_BUILDROOT, then the current directory)
  #[arg(long, value_name = "DIR")]
  build_root: Option<PathBuf>,

  /// Path to darwinxref (default: $DARWINXREF, then /usr/local/bin/darwinxref)
  #[arg(long, value_name = "PATH")]
  xref: Option<PathBuf>,

  /// Path to darwinbuild (default: $DARWINBUILD, then /usr/local/bin/darwinbuild)
  #[arg(long, value_name = "PATH")]
  darwinbuild: Option<PathBuf>,

  /// Resolve dependencies and print the build order without building
  #[arg(long)]
  dry_run: bool,

  /// Summary output format
  #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  /// Enable verbose logging
  #[arg(short, long)]
  verbose: bool,
}

impl Cli {
  /// The `target` arg group makes exactly one of these present after parsing.
  fn target(&self) -> Option<Target> {
    match (&self.project, &self.group) {
      (Some(project), _) => Some(Target::Project(project.clone())),
      (_, Some(group)) => Some(Target::Group(group.clone())),
      (None, None) => None,
    }
  }
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let Some(target) = cli.target() else {
    Cli::command()
      .error(ErrorKind::MissingRequiredArgument, "one of --project or --group is required")
      .exit()
  };

  let args = BuildArgs {
    target,
    build_root: cli.build_root,
    xref: cli.xref,
    darwinbuild: cli.darwinbuild,
    dry_run: cli.dry_run,
    output: cli.output,
  };

  match cmd_build(args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      print_error(&err.to_string());
      match err.downcast_ref::<darwinbuild_lib::Error>() {
        Some(run_err) => {
          if let Some(lines) = run_err.hint() {
            print_hint(&lines);
          }
          ExitCode::from(run_err.exit_code())
        }
        None => ExitCode::FAILURE,
      }
    }
  }
}
