//! Run orchestrator.
//!
//! Pulls the full source snapshot once, then pushes each record through
//! eligibility → normalization → payload → dispatch, strictly one record at a
//! time. Only a source failure aborts a run; every record-level fault becomes
//! an [`OperationOutcome`] in the [`RunReport`].

use std::fmt;

use roster_core::{
  eligibility::{self, Eligibility},
  mode::{EmployeeAction, SyncMode},
  normalize::{self, NormalizationPolicy},
  operation::{OperationOutcome, SyncOperation},
  payload::{CompanyPayload, DismissPayload, EmployeePayload, WorkplacePayload},
  record::SourceEmployeeRecord,
  registry::Registry,
  source::RecordSource,
};
use tracing::Instrument as _;
use uuid::Uuid;

use crate::{
  Error, Result, SyncConfig,
  dispatch::{Dispatcher, RetryPolicy},
};

// ─── Report ──────────────────────────────────────────────────────────────────

/// Per-run tally of outcomes, in source order.
#[derive(Debug, Default)]
pub struct RunReport {
  pub outcomes: Vec<(String, OperationOutcome)>,
}

impl RunReport {
  fn record(&mut self, external_id: &str, outcome: OperationOutcome) {
    self.outcomes.push((external_id.to_string(), outcome));
  }

  fn count(&self, pred: impl Fn(&OperationOutcome) -> bool) -> usize {
    self.outcomes.iter().filter(|(_, o)| pred(o)).count()
  }

  pub fn succeeded(&self) -> usize {
    self.count(|o| matches!(o, OperationOutcome::Success))
  }

  pub fn skipped(&self) -> usize {
    self.count(|o| {
      matches!(
        o,
        OperationOutcome::SkippedIneligible | OperationOutcome::SkippedInvalid(_)
      )
    })
  }

  pub fn failed(&self) -> usize { self.count(OperationOutcome::is_failure) }

  pub fn outcome_of(&self, external_id: &str) -> Option<&OperationOutcome> {
    self
      .outcomes
      .iter()
      .find(|(id, _)| id == external_id)
      .map(|(_, o)| o)
  }
}

impl fmt::Display for RunReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} records: {} succeeded, {} skipped, {} failed",
      self.outcomes.len(),
      self.succeeded(),
      self.skipped(),
      self.failed()
    )
  }
}

// ─── Orchestrator ────────────────────────────────────────────────────────────

pub struct Orchestrator<'a, S, R> {
  source:            &'a S,
  dispatcher:        Dispatcher<'a, R>,
  policy:            NormalizationPolicy,
  terminated_status: String,
}

impl<'a, S, R> Orchestrator<'a, S, R>
where
  S: RecordSource,
  R: Registry,
{
  pub fn new(
    source: &'a S,
    registry: &'a R,
    policy: NormalizationPolicy,
    dismiss_retry: RetryPolicy,
    terminated_status: impl Into<String>,
  ) -> Self {
    Self {
      source,
      dispatcher: Dispatcher::new(registry, dismiss_retry),
      policy,
      terminated_status: terminated_status.into(),
    }
  }

  pub fn from_config(
    source: &'a S,
    registry: &'a R,
    config: &SyncConfig,
  ) -> Result<Self> {
    Ok(Self::new(
      source,
      registry,
      config.normalization_policy()?,
      config.dismiss_retry(),
      config.terminated_status.clone(),
    ))
  }

  /// Execute one full run in `mode`.
  pub async fn run(&self, mode: SyncMode) -> Result<RunReport> {
    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("run", %run_id, %mode);

    async move {
      tracing::info!("run started");
      let report = match mode.employee_action() {
        Some(action) => self.run_employees(action).await?,
        None if mode == SyncMode::CompanyUpload => self.run_companies().await?,
        None => self.run_workplaces().await?,
      };
      tracing::info!(
        total = report.outcomes.len(),
        succeeded = report.succeeded(),
        skipped = report.skipped(),
        failed = report.failed(),
        "run finished"
      );
      Ok(report)
    }
    .instrument(span)
    .await
  }

  async fn run_employees(&self, action: EmployeeAction) -> Result<RunReport> {
    let employees = self
      .source
      .list_employees()
      .await
      .map_err(Error::source_unavailable)?;

    let mut report = RunReport::default();
    for record in &employees {
      let span =
        tracing::info_span!("record", external_id = %record.external_id);
      let outcome = self.process_employee(record, action).instrument(span).await;
      report.record(&record.external_id, outcome);
    }
    Ok(report)
  }

  async fn process_employee(
    &self,
    record: &SourceEmployeeRecord,
    action: EmployeeAction,
  ) -> OperationOutcome {
    if let Eligibility::Ineligible(reason) =
      eligibility::check(record, action, &self.terminated_status)
    {
      tracing::debug!(reason, "skipping ineligible record");
      return OperationOutcome::SkippedIneligible;
    }

    let op = match self.prepare(record, action) {
      Ok(op) => op,
      Err(e) => {
        tracing::warn!(error = %e, "skipping invalid record");
        return OperationOutcome::SkippedInvalid(e.to_string());
      }
    };

    self.dispatcher.dispatch(&op).await.outcome
  }

  /// Normalize and build the operation for an eligible record.
  fn prepare(
    &self,
    record: &SourceEmployeeRecord,
    action: EmployeeAction,
  ) -> roster_core::Result<SyncOperation> {
    let tz = self.policy.timezone;

    if action == EmployeeAction::Dismiss {
      let resigned_ms =
        normalize::parse_local_date(record.resignation_date.trim(), tz)?;
      return Ok(SyncOperation::Dismiss(DismissPayload::new(
        record.external_id.clone(),
        resigned_ms,
      )));
    }

    let normalized = normalize::normalize_employee(record, &self.policy)?;
    if normalized.email.is_none() && !record.email.trim().is_empty() {
      tracing::info!(email = %record.email, "invalid email dropped");
    }
    tracing::debug!(
      admission = ?normalize::format_local_date(normalized.admission_ms, tz),
      effective = ?normalize::format_local_date(normalized.effective_ms, tz),
      "dates resolved"
    );

    let payload = EmployeePayload::from(&normalized);
    Ok(match action {
      EmployeeAction::Update => SyncOperation::Update(payload),
      _ => SyncOperation::Register(payload),
    })
  }

  async fn run_companies(&self) -> Result<RunReport> {
    let companies = self
      .source
      .list_companies()
      .await
      .map_err(Error::source_unavailable)?;

    let mut report = RunReport::default();
    for company in &companies {
      let op = SyncOperation::RegisterCompany(CompanyPayload::from(company));
      let span =
        tracing::info_span!("record", external_id = %company.external_id);
      let done = self.dispatcher.dispatch(&op).instrument(span).await;
      report.record(&company.external_id, done.outcome);
    }
    Ok(report)
  }

  async fn run_workplaces(&self) -> Result<RunReport> {
    let workplaces = self
      .source
      .list_workplaces()
      .await
      .map_err(Error::source_unavailable)?;

    let mut report = RunReport::default();
    for workplace in &workplaces {
      let op =
        SyncOperation::RegisterWorkplace(WorkplacePayload::from(workplace));
      let span =
        tracing::info_span!("record", external_id = %workplace.external_id);
      let done = self.dispatcher.dispatch(&op).instrument(span).await;
      report.record(&workplace.external_id, done.outcome);
    }
    Ok(report)
  }
}
