//! The `Registry` trait: the remote HR registry as five operations.
//!
//! An implementation decides what counts as success for each endpoint and
//! reports everything else as an error. Whether a failure is worth retrying
//! is read off [`RemoteFailure::status`].

use std::future::Future;

use crate::payload::{
  CompanyPayload, DismissPayload, EmployeePayload, WorkplacePayload,
};

/// Classification hook for registry errors.
pub trait RemoteFailure: std::error::Error + Send + Sync + 'static {
  /// HTTP status of the rejecting response; `None` for transport failures.
  fn status(&self) -> Option<u16>;

  /// Server-side faults (5xx) are transient; everything else is not.
  fn is_transient(&self) -> bool {
    matches!(self.status(), Some(500..=599))
  }
}

pub trait Registry: Send + Sync {
  type Error: RemoteFailure;

  fn register_employee<'a>(
    &'a self,
    payload: &'a EmployeePayload,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Same body as [`Registry::register_employee`], with updates allowed.
  fn update_employee<'a>(
    &'a self,
    payload: &'a EmployeePayload,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  fn dismiss_employee<'a>(
    &'a self,
    payload: &'a DismissPayload,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  fn register_company<'a>(
    &'a self,
    payload: &'a CompanyPayload,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  fn register_workplace<'a>(
    &'a self,
    payload: &'a WorkplacePayload,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
