//! Effective-date policy.
//!
//! With a rollout cutoff configured, no record claims an effective date
//! before it. Without one the effective date is the admission date. The
//! result never depends on wall-clock time, so repeated runs send the same
//! value.

/// `max(admission, rollout)`, or `admission` when no cutoff is configured.
pub fn resolve(admission_ms: i64, rollout_ms: Option<i64>) -> i64 {
  match rollout_ms {
    Some(rollout) => admission_ms.max(rollout),
    None => admission_ms,
  }
}
