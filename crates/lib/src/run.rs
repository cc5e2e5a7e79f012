//! Entry point for a complete recursive build run.

use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use crate::buildroot::BuildRoot;
use crate::config::ToolPaths;
use crate::driver::{DarwinBuild, DryRun, ProjectBuilder};
use crate::error::Result;
use crate::oracle::Xref;
use crate::process::SystemRunner;
use crate::recursive::{RecursiveBuild, Target};
use crate::types::RunSummary;

#[derive(Debug, Clone)]
pub struct RunOptions {
  pub target: Target,
  /// Explicit build root; `None` falls back to the environment, then the current directory.
  pub build_root: Option<PathBuf>,
  pub tools: ToolPaths,
  /// Query the oracle and plan every build without invoking the build tool.
  pub dry_run: bool,
}

/// Validate the build root, enter it, and build the requested target.
///
/// Nothing is built unless the build root is valid. The first failing oracle
/// query or build ends the run.
pub fn run(options: &RunOptions) -> Result<RunSummary> {
  let root = BuildRoot::locate(options.build_root.as_deref())?;
  root.enter()?;
  info!(root = %root.path().display(), target = ?options.target, dry_run = options.dry_run, "starting run");

  let oracle = Xref::new(SystemRunner, &options.tools.xref).with_cwd(root.path());
  if options.dry_run {
    execute(&options.target, oracle, DryRun)
  } else {
    let builder = DarwinBuild::new(SystemRunner, &options.tools.darwinbuild).with_cwd(root.path());
    execute(&options.target, oracle, builder)
  }
}

fn execute<B: ProjectBuilder>(target: &Target, oracle: Xref<SystemRunner>, builder: B) -> Result<RunSummary> {
  let started = Instant::now();
  let mut context = RecursiveBuild::new(oracle, builder);
  context.build_target(target)?;

  Ok(RunSummary {
    steps: context.into_steps(),
    elapsed: started.elapsed(),
  })
}
