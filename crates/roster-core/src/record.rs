//! Source snapshots and the normalized form derived from them.
//!
//! Source records are read once per run and never mutated. Everything the
//! pipeline derives from them is created fresh per run and dropped at run end.

use serde::{Deserialize, Serialize};

// ─── Source records ──────────────────────────────────────────────────────────

/// One employee row as the system of record exposes it. Dates are
/// `DD/MM/YYYY` text; blank text means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceEmployeeRecord {
  /// The stable employee identifier ("chapa"); idempotency key remotely.
  pub external_id:       String,
  pub name:              String,
  /// `F`/`M` in practice, but anything may appear.
  pub sex_code:          String,
  pub national_id:       String,
  pub role:              String,
  pub birth_date:        String,
  pub email:             String,
  pub admission_date:    String,
  /// Empty while the employee is active.
  pub resignation_date:  String,
  pub status_code:       String,
  pub phone:             String,
  pub labor_card_number: String,
  pub labor_card_series: String,
  pub social_security:   String,
  pub company_id:        String,
  pub workplace_id:      String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceCompanyRecord {
  pub external_id: String,
  pub legal_name:  String,
  pub trade_name:  String,
  pub tax_id:      String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceWorkplaceRecord {
  pub external_id: String,
  pub name:        String,
}

// ─── Normalized ──────────────────────────────────────────────────────────────

/// Gender as the registry spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
  #[serde(rename = "MASCULINO")]
  Male,
  #[serde(rename = "FEMININO")]
  Female,
}

/// A validated employee record ready for payload building. All timestamps are
/// epoch milliseconds of local midnight in the configured civil timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEmployeeRecord {
  pub external_id:       String,
  pub name:              String,
  pub national_id:       String,
  pub role:              String,
  pub admission_ms:      i64,
  /// Never earlier than `admission_ms`, nor than the rollout cutoff if set.
  pub effective_ms:      i64,
  /// `None` only when a permissive policy tolerated an unparsable date.
  pub birth_ms:          Option<i64>,
  pub resignation_ms:    Option<i64>,
  /// Digits only; may be empty.
  pub phone:             String,
  pub gender:            Gender,
  /// `None` means "omit from the payload".
  pub email:             Option<String>,
  pub intern:            bool,
  pub labor_card_number: String,
  pub labor_card_series: String,
  pub social_security:   String,
  pub company_id:        String,
  pub workplace_id:      String,
}
