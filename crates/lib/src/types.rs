use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// How a project is required by its dependent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
  /// The project must be fully built.
  Build,
  /// Only the project's headers must be installed.
  Header,
}

impl DependencyKind {
  /// The flag the oracle expects for this kind (`-build` / `-header`).
  pub fn oracle_flag(self) -> &'static str {
    match self {
      DependencyKind::Build => "-build",
      DependencyKind::Header => "-header",
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      DependencyKind::Build => "build",
      DependencyKind::Header => "header",
    }
  }
}

impl fmt::Display for DependencyKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A single build tool invocation performed (or planned) during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildStep {
  pub project: String,
  pub kind: DependencyKind,
}

impl BuildStep {
  pub fn new(project: impl Into<String>, kind: DependencyKind) -> Self {
    Self {
      project: project.into(),
      kind,
    }
  }
}

impl fmt::Display for BuildStep {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.kind {
      DependencyKind::Header => write!(f, "-headers {}", self.project),
      DependencyKind::Build => f.write_str(&self.project),
    }
  }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
  /// Build invocations in the order they were issued.
  pub steps: Vec<BuildStep>,
  #[serde(serialize_with = "serialize_millis", rename = "elapsed_ms")]
  pub elapsed: Duration,
}

impl RunSummary {
  pub fn full_builds(&self) -> usize {
    self.steps.iter().filter(|s| s.kind == DependencyKind::Build).count()
  }

  pub fn header_builds(&self) -> usize {
    self.steps.iter().filter(|s| s.kind == DependencyKind::Header).count()
  }
}

fn serialize_millis<S: serde::Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
  serializer.serialize_u64(duration.as_millis() as u64)
}
