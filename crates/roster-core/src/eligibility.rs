//! Decides whether a source employee produces an operation at all.

use crate::{mode::EmployeeAction, record::SourceEmployeeRecord};

/// Default employment-status code of a terminated employee.
pub const DEFAULT_TERMINATED_STATUS: &str = "D";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
  Eligible,
  /// Excluded, with a short human-readable reason for the log.
  Ineligible(&'static str),
}

impl Eligibility {
  pub fn is_eligible(self) -> bool { matches!(self, Self::Eligible) }
}

/// - Dismiss: only records with a resignation date.
/// - Register and Update: never a record with a resignation date, whatever
///   its status code.
/// - Register additionally skips the terminated status sentinel.
pub fn check(
  record: &SourceEmployeeRecord,
  action: EmployeeAction,
  terminated_status: &str,
) -> Eligibility {
  let resigned = !record.resignation_date.trim().is_empty();

  match action {
    EmployeeAction::Dismiss if !resigned => {
      Eligibility::Ineligible("no resignation date")
    }
    EmployeeAction::Dismiss => Eligibility::Eligible,
    EmployeeAction::Register | EmployeeAction::Update if resigned => {
      Eligibility::Ineligible("has a resignation date")
    }
    EmployeeAction::Register
      if record.status_code.trim() == terminated_status.trim() =>
    {
      Eligibility::Ineligible("terminated status")
    }
    EmployeeAction::Register | EmployeeAction::Update => Eligibility::Eligible,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(resignation: &str, status: &str) -> SourceEmployeeRecord {
    SourceEmployeeRecord {
      external_id: "042".into(),
      resignation_date: resignation.into(),
      status_code: status.into(),
      ..Default::default()
    }
  }

  #[test]
  fn resigned_is_never_registered_or_updated() {
    for status in ["A", "D", "F", "", "Z"] {
      let rec = record("05/05/2025", status);
      for action in [EmployeeAction::Register, EmployeeAction::Update] {
        assert!(
          !check(&rec, action, DEFAULT_TERMINATED_STATUS).is_eligible(),
          "{action} with status {status:?}"
        );
      }
    }
  }

  #[test]
  fn dismiss_requires_resignation_date() {
    let active = record("", "A");
    let blank = record("   ", "D");
    let resigned = record("05/05/2025", "D");
    assert!(!check(&active, EmployeeAction::Dismiss, "D").is_eligible());
    assert!(!check(&blank, EmployeeAction::Dismiss, "D").is_eligible());
    assert!(check(&resigned, EmployeeAction::Dismiss, "D").is_eligible());
  }

  #[test]
  fn terminated_status_blocks_register_only() {
    let rec = record("", " D ");
    assert_eq!(
      check(&rec, EmployeeAction::Register, "D"),
      Eligibility::Ineligible("terminated status")
    );
    assert!(check(&rec, EmployeeAction::Update, "D").is_eligible());
  }

  #[test]
  fn active_employee_is_eligible_for_register_and_update() {
    let rec = record("", "A");
    assert!(check(&rec, EmployeeAction::Register, "D").is_eligible());
    assert!(check(&rec, EmployeeAction::Update, "D").is_eligible());
  }
}
