//! SQLite snapshot backend for the roster record source.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. The snapshot is opened read-only.

mod schema;
mod source;

pub mod error;

pub use error::{Error, Result};
pub use schema::SCHEMA;
pub use source::SqliteSource;

#[cfg(test)]
mod tests;
