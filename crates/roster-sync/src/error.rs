//! Run-fatal errors. Anything record-level becomes an outcome instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("source unavailable: {0}")]
  SourceUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("configuration missing or invalid: {0}")]
  ConfigurationMissing(String),
}

impl Error {
  pub(crate) fn source_unavailable(
    e: impl std::error::Error + Send + Sync + 'static,
  ) -> Self {
    Self::SourceUnavailable(Box::new(e))
  }
}

impl From<config::ConfigError> for Error {
  fn from(e: config::ConfigError) -> Self {
    Self::ConfigurationMissing(e.to_string())
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
