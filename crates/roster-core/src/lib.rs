//! Core types and pure transformation logic for the roster sync pipeline.
//!
//! Everything here is free of HTTP and database code. A source record flows
//! through [`eligibility`], [`normalize`], [`effective`], and [`payload`]
//! before the sync crate hands the resulting [`operation::SyncOperation`] to a
//! [`registry::Registry`].

pub mod effective;
pub mod eligibility;
pub mod error;
pub mod mode;
pub mod normalize;
pub mod operation;
pub mod payload;
pub mod record;
pub mod registry;
pub mod source;

pub use error::{Error, Result};
