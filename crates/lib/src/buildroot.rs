//! Build root discovery and validation.
//!
//! A build root is a directory initialized by `darwinbuild -init` that holds
//! the fixed set of subdirectories listed in [`BUILDROOT_SUBDIRS`]. All tool
//! invocations are relative to it.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::consts::{BUILDROOT_ENV, BUILDROOT_SUBDIRS};

#[derive(Debug, Error)]
pub enum EnvironmentError {
  #[error("Could not find darwinbuild root at {}, this is required (missing: {})", .root.display(), .missing.join(", "))]
  NotInitialized { root: PathBuf, missing: Vec<&'static str> },

  #[error("Could not determine the current directory: {0}")]
  CurrentDir(#[source] std::io::Error),

  #[error("Could not resolve build root {}: {source}", .root.display())]
  Resolve {
    root: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Could not change directory to {}: {source}", .root.display())]
  Enter {
    root: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

impl EnvironmentError {
  /// Instructions for fixing the environment, one line each.
  pub fn hint(&self) -> Option<Vec<String>> {
    match self {
      EnvironmentError::NotInitialized { .. } => Some(vec![
        "Please change your working directory to one initialized by:".to_string(),
        "\t$ darwinbuild -init <plist>".to_string(),
        format!("Alternatively, you may set the {} environment variable to the", BUILDROOT_ENV),
        "absolute path of that directory.".to_string(),
      ]),
      _ => None,
    }
  }
}

/// A validated build root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRoot {
  path: PathBuf,
}

impl BuildRoot {
  /// Locate the build root: `explicit`, else `$DARWIN_BUILDROOT`, else the current directory.
  pub fn locate(explicit: Option<&Path>) -> Result<Self, EnvironmentError> {
    let candidate = match explicit {
      Some(path) => path.to_path_buf(),
      None => match std::env::var_os(BUILDROOT_ENV).filter(|v| !v.is_empty()) {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir().map_err(EnvironmentError::CurrentDir)?,
      },
    };
    Self::open(candidate)
  }

  /// Validate that `path` contains every required subdirectory.
  pub fn open(path: impl Into<PathBuf>) -> Result<Self, EnvironmentError> {
    let path = path.into();
    let missing: Vec<&'static str> = BUILDROOT_SUBDIRS
      .iter()
      .copied()
      .filter(|dir| !path.join(dir).is_dir())
      .collect();

    if !missing.is_empty() {
      return Err(EnvironmentError::NotInitialized { root: path, missing });
    }

    // Must be absolute: it is reused as the child cwd after `enter()`.
    let path = dunce::canonicalize(&path).map_err(|source| EnvironmentError::Resolve {
      root: path.clone(),
      source,
    })?;
    debug!(root = %path.display(), "found build root");
    Ok(Self { path })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Make the build root the process working directory.
  pub fn enter(&self) -> Result<(), EnvironmentError> {
    std::env::set_current_dir(&self.path).map_err(|source| EnvironmentError::Enter {
      root: self.path.clone(),
      source,
    })
  }
}
