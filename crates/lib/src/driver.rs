//! Invokes the build tool (`darwinbuild`) for a single project.

use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::process::{Invocation, OutputMode, ProcessError, ToolRunner};
use crate::types::{BuildStep, DependencyKind};

#[derive(Debug, Error)]
pub enum BuildError {
  /// The build tool ran but exited non-zero.
  #[error("{command} {step} failed with code {code}")]
  Failed {
    command: String,
    step: BuildStep,
    code: i32,
  },

  #[error(transparent)]
  Process(#[from] ProcessError),
}

/// Builds one project, either fully or headers only.
pub trait ProjectBuilder {
  fn build(&mut self, project: &str, kind: DependencyKind) -> Result<(), BuildError>;
}

impl<B: ProjectBuilder + ?Sized> ProjectBuilder for &mut B {
  fn build(&mut self, project: &str, kind: DependencyKind) -> Result<(), BuildError> {
    (**self).build(project, kind)
  }
}

/// Arguments passed to the build tool for one project.
pub fn build_args(project: &str, kind: DependencyKind) -> Vec<String> {
  match kind {
    DependencyKind::Header => vec!["-headers".to_string(), project.to_string()],
    DependencyKind::Build => vec![project.to_string()],
  }
}

/// [`ProjectBuilder`] that runs `darwinbuild` with its output streamed live.
#[derive(Debug, Clone)]
pub struct DarwinBuild<R> {
  runner: R,
  program: PathBuf,
  cwd: Option<PathBuf>,
}

impl<R: ToolRunner> DarwinBuild<R> {
  pub fn new(runner: R, program: impl Into<PathBuf>) -> Self {
    Self {
      runner,
      program: program.into(),
      cwd: None,
    }
  }

  pub fn with_cwd(mut self, dir: impl Into<PathBuf>) -> Self {
    self.cwd = Some(dir.into());
    self
  }
}

impl<R: ToolRunner> ProjectBuilder for DarwinBuild<R> {
  fn build(&mut self, project: &str, kind: DependencyKind) -> Result<(), BuildError> {
    let mut invocation = Invocation::new(&self.program, build_args(project, kind));
    if let Some(dir) = &self.cwd {
      invocation = invocation.current_dir(dir);
    }

    info!(project, %kind, "building");

    let output = self.runner.run(&invocation, OutputMode::Passthrough)?;
    if !output.success() {
      return Err(BuildError::Failed {
        command: invocation.command_name(),
        step: BuildStep::new(project, kind),
        code: output.status,
      });
    }

    Ok(())
  }
}

/// [`ProjectBuilder`] that builds nothing; used to plan a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRun;

impl ProjectBuilder for DryRun {
  fn build(&mut self, project: &str, kind: DependencyKind) -> Result<(), BuildError> {
    info!(project, %kind, "would build");
    Ok(())
  }
}
