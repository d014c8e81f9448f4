//! Registry error type and its retry classification.

use roster_core::registry::RemoteFailure;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
  /// The registry answered, but not with an accepted status.
  #[error("HTTP {status}: {body}")]
  Rejected { status: u16, body: String },

  /// No usable response: connection, TLS, timeout, or request building.
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),
}

impl RemoteFailure for RegistryError {
  fn status(&self) -> Option<u16> {
    match self {
      Self::Rejected { status, .. } => Some(*status),
      Self::Transport(_) => None,
    }
  }
}
