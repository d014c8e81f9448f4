//! Error type for `roster-source-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("snapshot is missing table {0}")]
  MissingTable(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
