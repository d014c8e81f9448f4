//! Dispatch and orchestration for the roster sync.
//!
//! [`run::Orchestrator`] pulls the source snapshot once and pushes each record
//! through the core pipeline; [`dispatch::Dispatcher`] executes the resulting
//! operation against any [`roster_core::registry::Registry`].

pub mod config;
pub mod dispatch;
pub mod error;
pub mod run;

pub use config::SyncConfig;
pub use error::{Error, Result};

#[cfg(test)]
mod testing;
