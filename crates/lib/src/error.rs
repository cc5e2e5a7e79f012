//! Top-level error type for a recursive build run.

use thiserror::Error;

use crate::buildroot::EnvironmentError;
use crate::driver::BuildError;
use crate::oracle::OracleError;

/// Every way a run can fail. All of them end the run.
#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Environment(#[from] EnvironmentError),

  #[error(transparent)]
  Oracle(#[from] OracleError),

  #[error(transparent)]
  Build(#[from] BuildError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
  /// Process exit status for this failure.
  pub fn exit_code(&self) -> u8 {
    match self {
      Error::Environment(_) | Error::Oracle(_) | Error::Build(_) => 1,
    }
  }

  /// Extra lines explaining how to recover, if any.
  pub fn hint(&self) -> Option<Vec<String>> {
    match self {
      Error::Environment(err) => err.hint(),
      Error::Oracle(_) | Error::Build(_) => None,
    }
  }
}
