//! Layout of the source snapshot.
//!
//! The provider only reads. Whatever exports the system-of-record views into
//! SQLite is expected to create these tables; tests use the DDL directly.

/// Tables the provider reads, one per source view.
pub const TABLES: [&str; 3] =
  ["source_employees", "source_companies", "source_workplaces"];

/// Snapshot DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS source_employees (
    external_id       TEXT PRIMARY KEY,   -- 'chapa'
    name              TEXT,
    sex_code          TEXT,               -- 'M' | 'F'
    national_id       TEXT,
    role              TEXT,
    birth_date        TEXT,               -- DD/MM/YYYY
    email             TEXT,
    admission_date    TEXT,               -- DD/MM/YYYY
    resignation_date  TEXT,               -- DD/MM/YYYY or empty/NULL
    status_code       TEXT,
    phone             TEXT,
    labor_card_number TEXT,
    labor_card_series TEXT,
    social_security   TEXT,
    company_id        INTEGER,
    workplace_id      TEXT
);

CREATE TABLE IF NOT EXISTS source_companies (
    external_id TEXT PRIMARY KEY,
    legal_name  TEXT,
    trade_name  TEXT,
    tax_id      TEXT
);

CREATE TABLE IF NOT EXISTS source_workplaces (
    external_id TEXT PRIMARY KEY,
    name        TEXT
);
";
