//! In-memory fakes for the two collaborators.

use std::{
  collections::VecDeque,
  fmt,
  sync::Mutex,
};

use roster_core::{
  operation::SyncOperation,
  payload::{CompanyPayload, DismissPayload, EmployeePayload, WorkplacePayload},
  record::{SourceCompanyRecord, SourceEmployeeRecord, SourceWorkplaceRecord},
  registry::{Registry, RemoteFailure},
  source::RecordSource,
};
use tokio::time::Instant;

// ─── Registry ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeFailure {
  pub status: Option<u16>,
}

impl FakeFailure {
  pub fn http(status: u16) -> Self { Self { status: Some(status) } }

  pub fn transport() -> Self { Self { status: None } }
}

impl fmt::Display for FakeFailure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.status {
      Some(status) => write!(f, "HTTP {status}"),
      None => f.write_str("connection refused"),
    }
  }
}

impl std::error::Error for FakeFailure {}

impl RemoteFailure for FakeFailure {
  fn status(&self) -> Option<u16> { self.status }
}

/// Answers calls from a script, then succeeds once the script runs out.
/// Every call is recorded with the (possibly paused) tokio clock.
#[derive(Default)]
pub struct ScriptedRegistry {
  script: Mutex<VecDeque<Result<(), FakeFailure>>>,
  calls:  Mutex<Vec<(SyncOperation, Instant)>>,
}

impl ScriptedRegistry {
  pub fn new(script: impl IntoIterator<Item = Result<(), FakeFailure>>) -> Self {
    Self {
      script: Mutex::new(script.into_iter().collect()),
      calls:  Mutex::default(),
    }
  }

  pub fn calls(&self) -> Vec<(SyncOperation, Instant)> {
    self.calls.lock().unwrap().clone()
  }

  pub fn operations(&self) -> Vec<SyncOperation> {
    self.calls().into_iter().map(|(op, _)| op).collect()
  }

  fn answer(&self, op: SyncOperation) -> Result<(), FakeFailure> {
    self.calls.lock().unwrap().push((op, Instant::now()));
    self.script.lock().unwrap().pop_front().unwrap_or(Ok(()))
  }
}

impl Registry for ScriptedRegistry {
  type Error = FakeFailure;

  async fn register_employee(
    &self,
    payload: &EmployeePayload,
  ) -> Result<(), FakeFailure> {
    self.answer(SyncOperation::Register(payload.clone()))
  }

  async fn update_employee(
    &self,
    payload: &EmployeePayload,
  ) -> Result<(), FakeFailure> {
    self.answer(SyncOperation::Update(payload.clone()))
  }

  async fn dismiss_employee(
    &self,
    payload: &DismissPayload,
  ) -> Result<(), FakeFailure> {
    self.answer(SyncOperation::Dismiss(payload.clone()))
  }

  async fn register_company(
    &self,
    payload: &CompanyPayload,
  ) -> Result<(), FakeFailure> {
    self.answer(SyncOperation::RegisterCompany(payload.clone()))
  }

  async fn register_workplace(
    &self,
    payload: &WorkplacePayload,
  ) -> Result<(), FakeFailure> {
    self.answer(SyncOperation::RegisterWorkplace(payload.clone()))
  }
}

// ─── Source ──────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Unreachable;

impl fmt::Display for Unreachable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("source database unreachable")
  }
}

impl std::error::Error for Unreachable {}

#[derive(Default)]
pub struct MemorySource {
  pub employees:  Vec<SourceEmployeeRecord>,
  pub companies:  Vec<SourceCompanyRecord>,
  pub workplaces: Vec<SourceWorkplaceRecord>,
  pub down:       bool,
}

impl MemorySource {
  fn snapshot<T: Clone>(&self, rows: &[T]) -> Result<Vec<T>, Unreachable> {
    if self.down { Err(Unreachable) } else { Ok(rows.to_vec()) }
  }
}

impl RecordSource for MemorySource {
  type Error = Unreachable;

  async fn list_employees(
    &self,
  ) -> Result<Vec<SourceEmployeeRecord>, Unreachable> {
    self.snapshot(&self.employees)
  }

  async fn list_companies(&self) -> Result<Vec<SourceCompanyRecord>, Unreachable> {
    self.snapshot(&self.companies)
  }

  async fn list_workplaces(
    &self,
  ) -> Result<Vec<SourceWorkplaceRecord>, Unreachable> {
    self.snapshot(&self.workplaces)
  }
}

/// An active, valid employee.
pub fn employee(external_id: &str) -> SourceEmployeeRecord {
  SourceEmployeeRecord {
    external_id: external_id.into(),
    name: format!("Employee {external_id}"),
    sex_code: "M".into(),
    national_id: "12345678901".into(),
    role: "ANALISTA".into(),
    birth_date: "15/10/1985".into(),
    email: "someone@example.com".into(),
    admission_date: "01/02/2020".into(),
    status_code: "A".into(),
    phone: "(11) 3333-4444".into(),
    company_id: "7".into(),
    workplace_id: "S01".into(),
    ..Default::default()
  }
}
