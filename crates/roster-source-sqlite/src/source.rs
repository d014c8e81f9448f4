//! [`SqliteSource`] — the SQLite implementation of [`RecordSource`].

use std::path::Path;

use rusqlite::{OpenFlags, OptionalExtension as _, Row};

use roster_core::{
  record::{SourceCompanyRecord, SourceEmployeeRecord, SourceWorkplaceRecord},
  source::RecordSource,
};

use crate::{Error, Result, schema::TABLES};

/// A read-only view over a snapshot file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteSource {
  conn: tokio_rusqlite::Connection,
}

impl SqliteSource {
  /// Open the snapshot at `path` read-only and check the expected tables are
  /// present.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_with_flags(
      path,
      OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .await?;
    let source = Self { conn };
    source.check_tables().await?;
    Ok(source)
  }

  pub(crate) fn from_connection(conn: tokio_rusqlite::Connection) -> Self {
    Self { conn }
  }

  pub(crate) async fn check_tables(&self) -> Result<()> {
    for table in TABLES {
      let found: Option<i64> = self
        .conn
        .call(move |conn| {
          Ok(
            conn
              .query_row(
                "SELECT 1 FROM sqlite_master WHERE type IN ('table', 'view') \
                 AND name = ?1",
                rusqlite::params![table],
                |r| r.get(0),
              )
              .optional()?,
          )
        })
        .await?;
      if found.is_none() {
        return Err(Error::MissingTable(table));
      }
    }
    Ok(())
  }
}

/// NULL and missing text both read as the empty string.
fn text(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
  Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
}

fn decode_employee(row: &Row<'_>) -> rusqlite::Result<SourceEmployeeRecord> {
  Ok(SourceEmployeeRecord {
    external_id:       text(row, 0)?,
    name:              text(row, 1)?,
    sex_code:          text(row, 2)?,
    national_id:       text(row, 3)?,
    role:              text(row, 4)?,
    birth_date:        text(row, 5)?,
    email:             text(row, 6)?,
    admission_date:    text(row, 7)?,
    resignation_date:  text(row, 8)?,
    status_code:       text(row, 9)?,
    phone:             text(row, 10)?,
    labor_card_number: text(row, 11)?,
    labor_card_series: text(row, 12)?,
    social_security:   text(row, 13)?,
    company_id:        row
      .get::<_, Option<i64>>(14)?
      .map(|id| id.to_string())
      .unwrap_or_default(),
    workplace_id:      text(row, 15)?,
  })
}

// ─── RecordSource impl ───────────────────────────────────────────────────────

impl RecordSource for SqliteSource {
  type Error = Error;

  async fn list_employees(&self) -> Result<Vec<SourceEmployeeRecord>> {
    let employees = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT external_id, name, sex_code, national_id, role,
                  birth_date, email, admission_date, resignation_date,
                  status_code, phone, labor_card_number, labor_card_series,
                  social_security, company_id, workplace_id
           FROM source_employees
           ORDER BY external_id",
        )?;
        let rows = stmt
          .query_map([], decode_employee)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    tracing::info!(count = employees.len(), "read source employees");
    Ok(employees)
  }

  async fn list_companies(&self) -> Result<Vec<SourceCompanyRecord>> {
    let companies = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT external_id, legal_name, trade_name, tax_id
           FROM source_companies
           ORDER BY external_id",
        )?;
        let rows = stmt
          .query_map([], |r| {
            Ok(SourceCompanyRecord {
              external_id: text(r, 0)?,
              legal_name:  text(r, 1)?,
              trade_name:  text(r, 2)?,
              tax_id:      text(r, 3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    tracing::info!(count = companies.len(), "read source companies");
    Ok(companies)
  }

  async fn list_workplaces(&self) -> Result<Vec<SourceWorkplaceRecord>> {
    let workplaces = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT external_id, name FROM source_workplaces ORDER BY external_id",
        )?;
        let rows = stmt
          .query_map([], |r| {
            Ok(SourceWorkplaceRecord {
              external_id: text(r, 0)?,
              name:        text(r, 1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    tracing::info!(count = workplaces.len(), "read source workplaces");
    Ok(workplaces)
  }
}
