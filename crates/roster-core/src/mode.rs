//! Run modes selectable from the command line.

use std::str::FromStr;

use strum::{Display, EnumString, VariantNames};

use crate::Error;

/// Which set of records a run reconciles, and how.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantNames,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SyncMode {
  Insert,
  Update,
  Dismiss,
  CompanyUpload,
  WorkplaceUpload,
}

/// The per-employee remote action a mode maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum EmployeeAction {
  Register,
  Update,
  Dismiss,
}

impl SyncMode {
  /// Parse a mode argument, accepting an optional leading `--`
  /// (`--insert` and `insert` are the same mode).
  pub fn parse_arg(arg: &str) -> Result<Self, Error> {
    let bare = arg.trim();
    let bare = bare.strip_prefix("--").unwrap_or(bare);
    Self::from_str(bare).map_err(|_| Error::UnknownMode(arg.to_string()))
  }

  /// `None` for the company and workplace uploads, which bypass the
  /// per-employee pipeline.
  pub fn employee_action(self) -> Option<EmployeeAction> {
    match self {
      Self::Insert => Some(EmployeeAction::Register),
      Self::Update => Some(EmployeeAction::Update),
      Self::Dismiss => Some(EmployeeAction::Dismiss),
      Self::CompanyUpload | Self::WorkplaceUpload => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_bare_and_dashed_modes() {
    assert_eq!(SyncMode::parse_arg("insert").unwrap(), SyncMode::Insert);
    assert_eq!(SyncMode::parse_arg("--dismiss").unwrap(), SyncMode::Dismiss);
    assert_eq!(
      SyncMode::parse_arg("companyupload").unwrap(),
      SyncMode::CompanyUpload
    );
    assert_eq!(
      SyncMode::parse_arg("WorkplaceUpload").unwrap(),
      SyncMode::WorkplaceUpload
    );
  }

  #[test]
  fn rejects_unknown_mode() {
    let err = SyncMode::parse_arg("--purge").unwrap_err();
    assert!(matches!(err, Error::UnknownMode(m) if m == "--purge"));
  }

  #[test]
  fn display_matches_cli_spelling() {
    assert_eq!(SyncMode::WorkplaceUpload.to_string(), "workplaceupload");
    assert_eq!(SyncMode::VARIANTS.len(), 5);
  }

  #[test]
  fn uploads_have_no_employee_action() {
    assert_eq!(SyncMode::CompanyUpload.employee_action(), None);
    assert_eq!(
      SyncMode::Update.employee_action(),
      Some(EmployeeAction::Update)
    );
  }
}
