//! One remote operation per eligible record, and what became of it.

use std::fmt;

use crate::payload::{
  CompanyPayload, DismissPayload, EmployeePayload, WorkplacePayload,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOperation {
  Register(EmployeePayload),
  Update(EmployeePayload),
  Dismiss(DismissPayload),
  RegisterCompany(CompanyPayload),
  RegisterWorkplace(WorkplacePayload),
}

impl SyncOperation {
  pub fn external_id(&self) -> &str {
    match self {
      Self::Register(p) | Self::Update(p) => &p.external_id,
      Self::Dismiss(p) => &p.external_id,
      Self::RegisterCompany(p) => &p.external_id,
      Self::RegisterWorkplace(p) => &p.external_id,
    }
  }

  pub fn kind(&self) -> &'static str {
    match self {
      Self::Register(_) => "register",
      Self::Update(_) => "update",
      Self::Dismiss(_) => "dismiss",
      Self::RegisterCompany(_) => "register_company",
      Self::RegisterWorkplace(_) => "register_workplace",
    }
  }
}

/// Terminal state of one record in a run. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
  Success,
  SkippedIneligible,
  SkippedInvalid(String),
  FailedTerminal(String),
  FailedAfterRetries(String),
}

impl OperationOutcome {
  pub fn is_failure(&self) -> bool {
    matches!(self, Self::FailedTerminal(_) | Self::FailedAfterRetries(_))
  }
}

impl fmt::Display for OperationOutcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Success => f.write_str("success"),
      Self::SkippedIneligible => f.write_str("skipped (ineligible)"),
      Self::SkippedInvalid(why) => write!(f, "skipped (invalid): {why}"),
      Self::FailedTerminal(why) => write!(f, "failed: {why}"),
      Self::FailedAfterRetries(why) => {
        write!(f, "failed after retries: {why}")
      }
    }
  }
}
