//! The `RecordSource` trait: read-only access to the system of record.
//!
//! Implemented by backends such as `roster-source-sqlite`. Every list call
//! returns a full snapshot; a failure here is fatal to the run.

use std::future::Future;

use crate::record::{
  SourceCompanyRecord, SourceEmployeeRecord, SourceWorkplaceRecord,
};

pub trait RecordSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn list_employees(
    &self,
  ) -> impl Future<Output = Result<Vec<SourceEmployeeRecord>, Self::Error>> + Send + '_;

  fn list_companies(
    &self,
  ) -> impl Future<Output = Result<Vec<SourceCompanyRecord>, Self::Error>> + Send + '_;

  fn list_workplaces(
    &self,
  ) -> impl Future<Output = Result<Vec<SourceWorkplaceRecord>, Self::Error>> + Send + '_;
}
