//! Recursive, memoized build of a project and its dependencies.
//!
//! For each project the oracle is asked for its header dependencies and its
//! build dependencies. Header dependencies are built (headers only) first, then
//! build dependencies (fully), then the project itself. A project is marked as
//! visited *before* its dependencies are explored, so a dependency cycle is cut
//! at the project already in progress instead of recursing forever.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::driver::ProjectBuilder;
use crate::error::Result;
use crate::oracle::DependencyOracle;
use crate::types::{BuildStep, DependencyKind};

/// Projects already handled in this run, tracked separately per kind.
#[derive(Debug, Default, Clone)]
pub struct Visited {
  built: HashSet<String>,
  headers_built: HashSet<String>,
}

impl Visited {
  fn set(&self, kind: DependencyKind) -> &HashSet<String> {
    match kind {
      DependencyKind::Build => &self.built,
      DependencyKind::Header => &self.headers_built,
    }
  }

  pub fn contains(&self, project: &str, kind: DependencyKind) -> bool {
    self.set(kind).contains(project)
  }

  /// Marks `project` for `kind`. Returns `false` if it was already marked.
  pub fn mark(&mut self, project: &str, kind: DependencyKind) -> bool {
    let set = match kind {
      DependencyKind::Build => &mut self.built,
      DependencyKind::Header => &mut self.headers_built,
    };
    if set.contains(project) {
      return false;
    }
    set.insert(project.to_string())
  }
}

/// What a run was asked to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
  Project(String),
  Group(String),
}

/// State for one recursive build run.
pub struct RecursiveBuild<O, B> {
  oracle: O,
  builder: B,
  visited: Visited,
  steps: Vec<BuildStep>,
}

impl<O: DependencyOracle, B: ProjectBuilder> RecursiveBuild<O, B> {
  pub fn new(oracle: O, builder: B) -> Self {
    Self {
      oracle,
      builder,
      visited: Visited::default(),
      steps: Vec::new(),
    }
  }

  /// Build `project` fully, along with everything it needs.
  pub fn build_project(&mut self, project: &str) -> Result<()> {
    self.visit(project, DependencyKind::Build)
  }

  /// Build every member of `group` fully, in the order the oracle lists them.
  pub fn build_group(&mut self, group: &str) -> Result<()> {
    let members = self.oracle.group_members(group)?;
    info!(group, count = members.len(), "building group");
    for member in &members {
      self.visit(member, DependencyKind::Build)?;
    }
    Ok(())
  }

  pub fn build_target(&mut self, target: &Target) -> Result<()> {
    match target {
      Target::Project(project) => self.build_project(project),
      Target::Group(group) => self.build_group(group),
    }
  }

  /// Satisfy `project` as a `kind` dependency, at most once per run.
  pub fn visit(&mut self, project: &str, kind: DependencyKind) -> Result<()> {
    if !self.visited.mark(project, kind) {
      debug!(project, %kind, "already satisfied");
      return Ok(());
    }

    let header_deps = self.oracle.dependencies(project, DependencyKind::Header)?;
    let build_deps = self.oracle.dependencies(project, DependencyKind::Build)?;
    debug!(project, headers = ?header_deps, builds = ?build_deps, "resolved dependencies");

    for dep in &header_deps {
      self.visit(dep, DependencyKind::Header)?;
    }
    for dep in &build_deps {
      self.visit(dep, DependencyKind::Build)?;
    }

    self.builder.build(project, kind)?;
    self.steps.push(BuildStep::new(project, kind));
    Ok(())
  }

  pub fn visited(&self) -> &Visited {
    &self.visited
  }

  /// Builds completed so far, in invocation order.
  pub fn steps(&self) -> &[BuildStep] {
    &self.steps
  }

  pub fn into_steps(self) -> Vec<BuildStep> {
    self.steps
  }
}
