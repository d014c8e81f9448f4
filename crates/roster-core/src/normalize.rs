//! Field normalizer: raw source text → canonical values.
//!
//! The per-field functions are pure. [`normalize_employee`] strings them
//! together under a [`NormalizationPolicy`] and is the only place a record can
//! be rejected as malformed.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, TimeDelta, TimeZone};
use chrono_tz::Tz;
use validator::ValidateEmail as _;

use crate::{
  Error, Result, effective,
  record::{Gender, NormalizedEmployeeRecord, SourceEmployeeRecord},
};

/// Civil date format used by every date column of the source.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Uppercase token whose presence in a role title marks an intern.
pub const DEFAULT_INTERN_MARKER: &str = "ESTAGIÁRIO";

// ─── Dates ───────────────────────────────────────────────────────────────────

/// Parse `DD/MM/YYYY` as a calendar date in `tz` and return the epoch
/// milliseconds of local midnight.
///
/// Exactly two day digits, two month digits, and four year digits are
/// accepted; anything else (including the empty string) is
/// [`Error::MalformedDate`].
pub fn parse_local_date(text: &str, tz: Tz) -> Result<i64> {
  let date = parse_civil_date(text)?;
  start_of_day_ms(date, tz).ok_or_else(|| Error::MalformedDate(text.to_string()))
}

/// Render epoch milliseconds back to the civil date they fall on in `tz`.
pub fn format_local_date(ms: i64, tz: Tz) -> Option<String> {
  DateTime::from_timestamp_millis(ms)
    .map(|dt| dt.with_timezone(&tz).format(DATE_FORMAT).to_string())
}

fn parse_civil_date(text: &str) -> Result<NaiveDate> {
  let malformed = || Error::MalformedDate(text.to_string());
  let bytes = text.as_bytes();
  let shaped = bytes.len() == 10
    && bytes[2] == b'/'
    && bytes[5] == b'/'
    && bytes
      .iter()
      .enumerate()
      .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
  if !shaped {
    return Err(malformed());
  }
  NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| malformed())
}

/// Local midnight, or the first instant of the day when a DST transition
/// skips midnight (Brazilian DST historically started at 00:00).
fn start_of_day_ms(date: NaiveDate, tz: Tz) -> Option<i64> {
  let midnight = date.and_time(NaiveTime::MIN);
  let instant = match tz.from_local_datetime(&midnight) {
    LocalResult::Single(dt) => dt,
    LocalResult::Ambiguous(earliest, _) => earliest,
    LocalResult::None => tz
      .from_local_datetime(&(midnight + TimeDelta::hours(1)))
      .earliest()?,
  };
  Some(instant.timestamp_millis())
}

// ─── Simple fields ───────────────────────────────────────────────────────────

/// Keep ASCII digits only. Empty in, empty out.
pub fn normalize_phone(text: &str) -> String {
  text.chars().filter(char::is_ascii_digit).collect()
}

/// `F` (any case) is female; every other input, including garbage and the
/// empty string, is male.
pub fn classify_gender(sex_code: &str) -> Gender {
  if sex_code.eq_ignore_ascii_case("F") {
    Gender::Female
  } else {
    Gender::Male
  }
}

/// Trimmed address if it is a syntactically valid mailbox, otherwise `None`.
pub fn validate_email(text: &str) -> Option<String> {
  let trimmed = text.trim();
  if trimmed.is_empty() || !trimmed.validate_email() {
    return None;
  }
  Some(trimmed.to_string())
}

/// Substring match of `marker` against the uppercased role title.
pub fn classify_intern(role: &str, marker: &str) -> bool {
  role.to_uppercase().contains(&marker.to_uppercase())
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// Everything the normalizer needs besides the record itself.
#[derive(Debug, Clone)]
pub struct NormalizationPolicy {
  pub timezone:          Tz,
  /// Rollout cutoff as epoch milliseconds.
  pub rollout_ms:        Option<i64>,
  pub intern_marker:     String,
  /// When `false`, an unparsable birth date is omitted instead of failing the
  /// record.
  pub strict_birth_date: bool,
}

impl Default for NormalizationPolicy {
  fn default() -> Self {
    Self {
      timezone:          chrono_tz::America::Sao_Paulo,
      rollout_ms:        None,
      intern_marker:     DEFAULT_INTERN_MARKER.to_string(),
      strict_birth_date: true,
    }
  }
}

/// Normalize one employee. Fails only on a missing external id or a
/// malformed required date; an invalid email merely drops the field.
pub fn normalize_employee(
  record: &SourceEmployeeRecord,
  policy: &NormalizationPolicy,
) -> Result<NormalizedEmployeeRecord> {
  let tz = policy.timezone;

  if record.external_id.trim().is_empty() {
    return Err(Error::MissingField("external_id"));
  }

  let admission_ms = parse_local_date(&record.admission_date, tz)?;
  let birth_ms = match parse_local_date(&record.birth_date, tz) {
    Ok(ms) => Some(ms),
    Err(_) if !policy.strict_birth_date => None,
    Err(e) => return Err(e),
  };
  let resignation = record.resignation_date.trim();
  let resignation_ms = if resignation.is_empty() {
    None
  } else {
    Some(parse_local_date(resignation, tz)?)
  };

  Ok(NormalizedEmployeeRecord {
    external_id: record.external_id.clone(),
    name: record.name.clone(),
    national_id: record.national_id.clone(),
    role: record.role.clone(),
    admission_ms,
    effective_ms: effective::resolve(admission_ms, policy.rollout_ms),
    birth_ms,
    resignation_ms,
    phone: normalize_phone(&record.phone),
    gender: classify_gender(&record.sex_code),
    email: validate_email(&record.email),
    intern: classify_intern(&record.role, &policy.intern_marker),
    labor_card_number: record.labor_card_number.clone(),
    labor_card_series: record.labor_card_series.clone(),
    social_security: record.social_security.clone(),
    company_id: record.company_id.clone(),
    workplace_id: record.workplace_id.clone(),
  })
}
