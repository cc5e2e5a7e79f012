//! Synchronous execution of external tools.
//!
//! Every tool the recursive builder talks to (the dependency oracle and the
//! build tool) is launched through [`ToolRunner`]. Standard error is always
//! inherited so tool diagnostics reach the user unmodified; standard output is
//! either captured (oracle queries) or inherited (builds, for live progress).

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::string::FromUtf8Error;

use thiserror::Error;
use tracing::debug;

/// Errors raised while launching a tool or reading its output.
#[derive(Debug, Error)]
pub enum ProcessError {
  #[error("failed to run {}: {source}", .program.display())]
  Spawn {
    program: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("could not decode output of {} as UTF-8: {source}", .program.display())]
  InvalidUtf8 {
    program: PathBuf,
    #[source]
    source: FromUtf8Error,
  },
}

/// What to do with the child's standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
  /// Collect stdout and return it as text.
  Capture,
  /// Let stdout flow straight to our own stdout.
  Passthrough,
}

/// A fully described tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub program: PathBuf,
  pub args: Vec<String>,
  pub cwd: Option<PathBuf>,
}

impl Invocation {
  pub fn new<I, S>(program: impl Into<PathBuf>, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      program: program.into(),
      args: args.into_iter().map(Into::into).collect(),
      cwd: None,
    }
  }

  pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.cwd = Some(dir.into());
    self
  }

  /// Name used in diagnostics: the program's file name, falling back to the full path.
  pub fn command_name(&self) -> String {
    self
      .program
      .file_name()
      .map(|n| n.to_string_lossy().into_owned())
      .unwrap_or_else(|| self.program.display().to_string())
  }
}

impl fmt::Display for Invocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.program.display())?;
    for arg in &self.args {
      write!(f, " {}", arg)?;
    }
    Ok(())
  }
}

/// Result of a completed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
  /// Exit status; signal terminations are reported as `128 + signal` on Unix.
  pub status: i32,
  /// Captured stdout, present only for [`OutputMode::Capture`].
  pub stdout: Option<String>,
}

impl ProcessOutput {
  pub fn success(&self) -> bool {
    self.status == 0
  }
}

/// Runs external tools to completion.
pub trait ToolRunner {
  fn run(&self, invocation: &Invocation, mode: OutputMode) -> Result<ProcessOutput, ProcessError>;
}

impl<R: ToolRunner + ?Sized> ToolRunner for &R {
  fn run(&self, invocation: &Invocation, mode: OutputMode) -> Result<ProcessOutput, ProcessError> {
    (**self).run(invocation, mode)
  }
}

/// [`ToolRunner`] backed by real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
  fn run(&self, invocation: &Invocation, mode: OutputMode) -> Result<ProcessOutput, ProcessError> {
    let mut command = Command::new(&invocation.program);
    command.args(&invocation.args).stderr(Stdio::inherit());
    if let Some(dir) = &invocation.cwd {
      command.current_dir(dir);
    }

    debug!(command = %invocation, cwd = ?invocation.cwd, ?mode, "spawning process");

    let spawn_err = |source| ProcessError::Spawn {
      program: invocation.program.clone(),
      source,
    };

    // Both `output` and `status` wait for the child and close our pipe ends
    // before returning, on success and on error alike.
    match mode {
      OutputMode::Capture => {
        let output = command.stdout(Stdio::piped()).output().map_err(spawn_err)?;
        let stdout = String::from_utf8(output.stdout).map_err(|source| ProcessError::InvalidUtf8 {
          program: invocation.program.clone(),
          source,
        })?;
        Ok(ProcessOutput {
          status: exit_code(output.status),
          stdout: Some(stdout),
        })
      }
      OutputMode::Passthrough => {
        let status = command.stdout(Stdio::inherit()).status().map_err(spawn_err)?;
        Ok(ProcessOutput {
          status: exit_code(status),
          stdout: None,
        })
      }
    }
  }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
  use std::os::unix::process::ExitStatusExt;

  status
    .code()
    .or_else(|| status.signal().map(|sig| 128 + sig))
    .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
  status.code().unwrap_or(-1)
}
