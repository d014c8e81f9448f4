//! Dispatcher: one [`SyncOperation`] in, one terminal [`OperationOutcome`]
//! out.
//!
//! Register, update, company, and workplace calls get exactly one attempt.
//! Dismissals are retried under a [`RetryPolicy`], but only for server-side
//! faults; anything else ends the operation on first occurrence.

use std::time::Duration;

use roster_core::{
  operation::{OperationOutcome, SyncOperation},
  registry::{Registry, RemoteFailure},
};

// ─── Retry policy ────────────────────────────────────────────────────────────

/// Bounded retry with linear backoff: the wait after attempt `n` is
/// `n * base_delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
  /// Total attempts, the first one included.
  pub max_attempts: u32,
  pub base_delay:   Duration,
}

impl Default for RetryPolicy {
  fn default() -> Self {
    Self { max_attempts: 3, base_delay: Duration::from_secs(2) }
  }
}

impl RetryPolicy {
  pub const fn single_attempt() -> Self {
    Self { max_attempts: 1, base_delay: Duration::ZERO }
  }

  /// Saturates at [`Duration::MAX`] instead of overflowing.
  pub fn delay_after(&self, attempt: u32) -> Duration {
    self.base_delay.saturating_mul(attempt)
  }

  /// Retry iff the failure is transient and attempts remain.
  pub fn should_retry<E: RemoteFailure>(&self, err: &E, attempt: u32) -> bool {
    err.is_transient() && attempt < self.max_attempts
  }
}

// ─── Dispatcher ──────────────────────────────────────────────────────────────

/// What dispatching one operation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
  pub outcome:  OperationOutcome,
  pub attempts: u32,
}

pub struct Dispatcher<'a, R> {
  registry:      &'a R,
  dismiss_retry: RetryPolicy,
}

impl<'a, R: Registry> Dispatcher<'a, R> {
  pub fn new(registry: &'a R, dismiss_retry: RetryPolicy) -> Self {
    Self { registry, dismiss_retry }
  }

  fn policy_for(&self, op: &SyncOperation) -> RetryPolicy {
    match op {
      SyncOperation::Dismiss(_) => self.dismiss_retry,
      _ => RetryPolicy::single_attempt(),
    }
  }

  async fn call(&self, op: &SyncOperation) -> Result<(), R::Error> {
    match op {
      SyncOperation::Register(p) => self.registry.register_employee(p).await,
      SyncOperation::Update(p) => self.registry.update_employee(p).await,
      SyncOperation::Dismiss(p) => self.registry.dismiss_employee(p).await,
      SyncOperation::RegisterCompany(p) => {
        self.registry.register_company(p).await
      }
      SyncOperation::RegisterWorkplace(p) => {
        self.registry.register_workplace(p).await
      }
    }
  }

  /// Drive `op` to a terminal state. The backoff wait is an ordinary tokio
  /// sleep: it only holds up this operation, and dropping the returned
  /// future cancels it.
  pub async fn dispatch(&self, op: &SyncOperation) -> Dispatched {
    let policy = self.policy_for(op);
    let kind = op.kind();
    let mut attempt = 0;

    loop {
      attempt += 1;
      let err = match self.call(op).await {
        Ok(()) => {
          tracing::info!(kind, attempt, "registry call succeeded");
          return Dispatched { outcome: OperationOutcome::Success, attempts: attempt };
        }
        Err(err) => err,
      };

      if policy.should_retry(&err, attempt) {
        let delay = policy.delay_after(attempt);
        tracing::warn!(
          kind,
          attempt,
          error = %err,
          delay_secs = delay.as_secs_f64(),
          "transient registry failure, retrying"
        );
        tokio::time::sleep(delay).await;
        continue;
      }

      let outcome = if err.is_transient() && policy.max_attempts > 1 {
        OperationOutcome::FailedAfterRetries(err.to_string())
      } else {
        OperationOutcome::FailedTerminal(err.to_string())
      };
      tracing::error!(kind, attempt, error = %err, "registry call failed");
      return Dispatched { outcome, attempts: attempt };
    }
  }
}
