//! JSON-over-HTTPS client for the remote HR registry.
//!
//! [`HttpRegistry`] implements [`roster_core::registry::Registry`]. Employee
//! endpoints accept only 200 and 201; company and workplace endpoints accept
//! any 2xx.

mod client;

pub mod error;

pub use client::{
  DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, HttpRegistry, RegistryConfig,
};
pub use error::RegistryError;
