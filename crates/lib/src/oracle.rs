//! Client for the external dependency oracle (`darwinxref`).
//!
//! The oracle answers three questions, each as line-oriented text on stdout:
//! - `dependencies -build <project>`: projects that must be fully built first
//! - `dependencies -header <project>`: projects whose headers must be installed first
//! - `group <name>`: the projects making up a named group

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::process::{Invocation, OutputMode, ProcessError, ToolRunner};
use crate::types::DependencyKind;

#[derive(Debug, Error)]
pub enum OracleError {
  /// The oracle ran but exited non-zero.
  #[error("{command} {args:?} failed with code {code}")]
  Failed {
    command: String,
    args: Vec<String>,
    code: i32,
  },

  #[error(transparent)]
  Process(#[from] ProcessError),
}

/// Source of dependency and group information.
pub trait DependencyOracle {
  /// Direct dependencies of `project` of the given kind, in oracle order.
  fn dependencies(&self, project: &str, kind: DependencyKind) -> Result<Vec<String>, OracleError>;

  /// Members of `group`, in oracle order.
  fn group_members(&self, group: &str) -> Result<Vec<String>, OracleError>;
}

/// [`DependencyOracle`] that shells out to `darwinxref`.
#[derive(Debug, Clone)]
pub struct Xref<R> {
  runner: R,
  program: PathBuf,
  cwd: Option<PathBuf>,
}

impl<R: ToolRunner> Xref<R> {
  pub fn new(runner: R, program: impl Into<PathBuf>) -> Self {
    Self {
      runner,
      program: program.into(),
      cwd: None,
    }
  }

  /// Run every query from `dir` instead of the inherited working directory.
  pub fn with_cwd(mut self, dir: impl Into<PathBuf>) -> Self {
    self.cwd = Some(dir.into());
    self
  }

  fn query(&self, args: &[&str]) -> Result<String, OracleError> {
    let mut invocation = Invocation::new(&self.program, args.iter().copied());
    if let Some(dir) = &self.cwd {
      invocation = invocation.current_dir(dir);
    }

    debug!(command = %invocation, "querying oracle");

    let output = self.runner.run(&invocation, OutputMode::Capture)?;
    if !output.success() {
      return Err(OracleError::Failed {
        command: invocation.command_name(),
        args: invocation.args,
        code: output.status,
      });
    }

    Ok(output.stdout.unwrap_or_default())
  }
}

impl<R: ToolRunner> DependencyOracle for Xref<R> {
  fn dependencies(&self, project: &str, kind: DependencyKind) -> Result<Vec<String>, OracleError> {
    let text = self.query(&["dependencies", kind.oracle_flag(), project])?;
    Ok(split_lines(&text))
  }

  fn group_members(&self, group: &str) -> Result<Vec<String>, OracleError> {
    let text = self.query(&["group", group])?;
    Ok(split_words(&text))
  }
}

/// One entry per non-blank line. Entries are not trimmed.
pub fn split_lines(text: &str) -> Vec<String> {
  text
    .lines()
    .filter(|line| !line.trim().is_empty())
    .map(str::to_string)
    .collect()
}

/// Whitespace-separated tokens, line by line, left to right.
pub fn split_words(text: &str) -> Vec<String> {
  text
    .lines()
    .flat_map(str::split_whitespace)
    .map(str::to_string)
    .collect()
}
