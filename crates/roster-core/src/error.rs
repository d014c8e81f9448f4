//! Error types for `roster-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("malformed date {0:?}: expected DD/MM/YYYY")]
  MalformedDate(String),

  #[error("required field {0} is empty")]
  MissingField(&'static str),

  #[error("unknown sync mode {0:?}")]
  UnknownMode(String),

  #[error("unknown timezone {0:?}")]
  InvalidTimezone(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
