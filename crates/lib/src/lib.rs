//! darwinbuild-lib: recursive dependency builds for darwinbuild roots
//!
//! This crate drives the external `darwinxref` dependency oracle and the
//! `darwinbuild` build tool:
//! - `BuildRoot`: validation of the build root all tools run in
//! - `Xref`: dependency and group queries against the oracle
//! - `DarwinBuild`: full and headers-only builds of a single project
//! - `RecursiveBuild`: memoized, header-first traversal that builds each
//!   required project exactly once per kind

pub mod buildroot;
pub mod config;
pub mod consts;
pub mod driver;
pub mod error;
pub mod oracle;
pub mod process;
pub mod recursive;
pub mod run;
pub mod types;
pub mod util;

pub use buildroot::{BuildRoot, EnvironmentError};
pub use config::ToolPaths;
pub use driver::{BuildError, DarwinBuild, DryRun, ProjectBuilder};
pub use error::{Error, Result};
pub use oracle::{DependencyOracle, OracleError, Xref};
pub use recursive::{RecursiveBuild, Target, Visited};
pub use run::{RunOptions, run};
pub use types::{BuildStep, DependencyKind, RunSummary};
