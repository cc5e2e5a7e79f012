//! Locations of the external tools driven by the recursive builder.

use std::path::{Component, Path, PathBuf};

use crate::consts::{DARWINBUILD_ENV, DEFAULT_DARWINBUILD, DEFAULT_XREF, XREF_ENV};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
  /// Dependency oracle, queried for dependencies and group membership.
  pub xref: PathBuf,
  /// Build tool invoked once per project.
  pub darwinbuild: PathBuf,
}

impl Default for ToolPaths {
  fn default() -> Self {
    Self {
      xref: PathBuf::from(DEFAULT_XREF),
      darwinbuild: PathBuf::from(DEFAULT_DARWINBUILD),
    }
  }
}

impl ToolPaths {
  /// Resolve each tool from the explicit value, then its environment variable, then the default.
  ///
  /// Relative paths are anchored to the current directory, so call this before
  /// entering the build root. Bare names are kept for `PATH` lookup.
  pub fn resolve(xref: Option<PathBuf>, darwinbuild: Option<PathBuf>) -> Self {
    Self {
      xref: anchor(xref.or_else(|| env_path(XREF_ENV)).unwrap_or_else(|| DEFAULT_XREF.into())),
      darwinbuild: anchor(
        darwinbuild
          .or_else(|| env_path(DARWINBUILD_ENV))
          .unwrap_or_else(|| DEFAULT_DARWINBUILD.into()),
      ),
    }
  }
}

fn is_bare_name(path: &Path) -> bool {
  let mut components = path.components();
  matches!((components.next(), components.next()), (Some(Component::Normal(_)), None))
}

fn anchor(path: PathBuf) -> PathBuf {
  if path.is_absolute() || is_bare_name(&path) {
    return path;
  }
  dunce::canonicalize(&path)
    .or_else(|_| std::path::absolute(&path))
    .unwrap_or(path)
}

fn env_path(var: &str) -> Option<PathBuf> {
  std::env::var_os(var).filter(|v| !v.is_empty()).map(PathBuf::from)
}
