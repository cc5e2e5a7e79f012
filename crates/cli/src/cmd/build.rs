//! Implementation of the recursive build command.
//!
//! Builds one project (`-p`) or every member of a group (`-g`) together with
//! their header and build dependencies, then prints a summary of what ran.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use darwinbuild_lib::{RunOptions, RunSummary, Target, ToolPaths, run};

use crate::output::{OutputFormat, format_duration, print_json, print_stat, print_step, print_success};

pub struct BuildArgs {
  pub target: Target,
  pub build_root: Option<PathBuf>,
  pub xref: Option<PathBuf>,
  pub darwinbuild: Option<PathBuf>,
  pub dry_run: bool,
  pub output: OutputFormat,
}

/// Execute the recursive build.
///
/// Library failures are returned as `darwinbuild_lib::Error` inside the
/// `anyhow::Error` so `main` can map them to an exit status.
pub fn cmd_build(args: BuildArgs) -> Result<()> {
  let tools = ToolPaths::resolve(args.xref, args.darwinbuild);
  let tool_name = tools
    .darwinbuild
    .file_name()
    .map(|n| n.to_string_lossy().into_owned())
    .unwrap_or_else(|| "darwinbuild".to_string());

  let options = RunOptions {
    target: args.target,
    build_root: args.build_root,
    tools,
    dry_run: args.dry_run,
  };

  let summary = run(&options)?;
  info!(steps = summary.steps.len(), elapsed = ?summary.elapsed, "run complete");

  if args.output.is_json() {
    return print_json(&summary);
  }

  if args.dry_run {
    print_plan(&tool_name, &summary);
  } else {
    print_summary(&summary);
  }
  Ok(())
}

fn print_plan(tool_name: &str, summary: &RunSummary) {
  for step in &summary.steps {
    print_step(tool_name, &step.to_string());
  }
  println!();
  print_stat("Full builds", &summary.full_builds().to_string());
  print_stat("Header builds", &summary.header_builds().to_string());
}

fn print_summary(summary: &RunSummary) {
  println!();
  print_success(&format!(
    "Recursive build complete in {}",
    format_duration(summary.elapsed)
  ));
  print_stat("Full builds", &summary.full_builds().to_string());
  print_stat("Header builds", &summary.header_builds().to_string());
}
