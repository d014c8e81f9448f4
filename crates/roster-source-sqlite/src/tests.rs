//! Integration tests for `SqliteSource` against an in-memory snapshot.

use roster_core::source::RecordSource;

use crate::{Error, SCHEMA, SqliteSource};

const SEED: &str = "
INSERT INTO source_employees VALUES
  ('002', 'João Lima', 'M', '98765432100', 'ANALISTA', '15/10/1985',
   NULL, '01/02/2020', '05/05/2025', 'D', '(21) 3333-4444',
   '7654321', '0020', '12098765432', 3, 'S02'),
  ('001', 'Maria Souza', 'F', '12345678901', 'ESTAGIÁRIO(A)', '01/01/1990',
   'bad@@', '10/03/2024', NULL, 'A', '(11) 98888-7777',
   '1234567', '0010', '12012345678', 7, 'S01');

INSERT INTO source_companies VALUES
  ('1', 'ACME LTDA', 'Acme', '11222333000181'),
  ('2', 'BETA SA', NULL, '44555666000172');

INSERT INTO source_workplaces VALUES
  ('S01', 'Administrativo'),
  ('S02', 'Produção');
";

async fn seeded() -> SqliteSource {
  let conn = tokio_rusqlite::Connection::open_in_memory()
    .await
    .expect("in-memory db");
  conn
    .call(|conn| {
      conn.execute_batch(SCHEMA)?;
      conn.execute_batch(SEED)?;
      Ok(())
    })
    .await
    .expect("seed snapshot");
  SqliteSource::from_connection(conn)
}

#[tokio::test]
async fn lists_employees_in_id_order() {
  let s = seeded().await;
  let employees = s.list_employees().await.unwrap();

  assert_eq!(employees.len(), 2);
  assert_eq!(employees[0].external_id, "001");
  assert_eq!(employees[1].external_id, "002");

  let maria = &employees[0];
  assert_eq!(maria.sex_code, "F");
  assert_eq!(maria.role, "ESTAGIÁRIO(A)");
  assert_eq!(maria.admission_date, "10/03/2024");
  assert_eq!(maria.company_id, "7");
  assert_eq!(maria.workplace_id, "S01");
  assert_eq!(maria.labor_card_series, "0010");
}

#[tokio::test]
async fn null_columns_read_as_empty() {
  let s = seeded().await;
  let employees = s.list_employees().await.unwrap();

  assert_eq!(employees[0].resignation_date, "");
  assert_eq!(employees[1].email, "");
  assert_eq!(employees[1].resignation_date, "05/05/2025");
}

#[tokio::test]
async fn lists_companies_and_workplaces() {
  let s = seeded().await;

  let companies = s.list_companies().await.unwrap();
  assert_eq!(companies.len(), 2);
  assert_eq!(companies[0].legal_name, "ACME LTDA");
  assert_eq!(companies[1].trade_name, "");

  let workplaces = s.list_workplaces().await.unwrap();
  assert_eq!(workplaces.len(), 2);
  assert_eq!(workplaces[1].name, "Produção");
}

#[tokio::test]
async fn seeded_snapshot_passes_table_check() {
  seeded().await.check_tables().await.unwrap();
}

#[tokio::test]
async fn empty_database_is_missing_tables() {
  let conn = tokio_rusqlite::Connection::open_in_memory().await.unwrap();
  let s = SqliteSource::from_connection(conn);
  let err = s.check_tables().await.unwrap_err();
  assert!(matches!(err, Error::MissingTable("source_employees")));
}

#[tokio::test]
async fn opening_a_missing_file_fails() {
  let path = std::env::temp_dir().join("roster-no-such-snapshot.sqlite");
  assert!(SqliteSource::open(&path).await.is_err());
}
