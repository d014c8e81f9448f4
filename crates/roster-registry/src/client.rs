//! Async HTTP client wrapping the registry endpoints.

use std::time::Duration;

use reqwest::{Client, StatusCode, header::AUTHORIZATION};
use roster_core::{
  payload::{CompanyPayload, DismissPayload, EmployeePayload, WorkplacePayload},
  registry::Registry,
};
use serde::Serialize;

use crate::RegistryError;

/// Default production base URL.
pub const DEFAULT_BASE_URL: &str =
  "https://employer.tangerino.com.br/api/employer";

/// Default per-call transport timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the registry.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
  pub base_url:  String,
  /// Opaque token sent verbatim in the `Authorization` header.
  pub api_token: String,
  pub timeout:   Duration,
}

/// Which response codes count as success for an endpoint.
#[derive(Debug, Clone, Copy)]
enum Accept {
  /// 200 and 201 only.
  OkOrCreated,
  /// Any 2xx.
  AnySuccess,
}

impl Accept {
  fn accepts(self, status: StatusCode) -> bool {
    match self {
      Self::OkOrCreated => {
        status == StatusCode::OK || status == StatusCode::CREATED
      }
      Self::AnySuccess => status.is_success(),
    }
  }
}

/// Async HTTP client for the registry.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct HttpRegistry {
  client: Client,
  config: RegistryConfig,
}

impl HttpRegistry {
  pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
  }

  async fn post<T: Serialize + ?Sized>(
    &self,
    path: &str,
    query: &[(&str, &str)],
    body: &T,
    accept: Accept,
  ) -> Result<(), RegistryError> {
    let resp = self
      .client
      .post(self.url(path))
      .query(query)
      .header(AUTHORIZATION, &self.config.api_token)
      .json(body)
      .send()
      .await?;

    let status = resp.status();
    if accept.accepts(status) {
      tracing::debug!(%status, path, "registry accepted");
      return Ok(());
    }
    let body = resp.text().await.unwrap_or_default();
    Err(RegistryError::Rejected { status: status.as_u16(), body })
  }
}

impl Registry for HttpRegistry {
  type Error = RegistryError;

  /// `POST /employee/register`
  async fn register_employee(
    &self,
    payload: &EmployeePayload,
  ) -> Result<(), RegistryError> {
    self
      .post("/employee/register", &[], payload, Accept::OkOrCreated)
      .await
  }

  /// `POST /employee/register?allowUpdate=true`
  async fn update_employee(
    &self,
    payload: &EmployeePayload,
  ) -> Result<(), RegistryError> {
    self
      .post(
        "/employee/register",
        &[("allowUpdate", "true")],
        payload,
        Accept::OkOrCreated,
      )
      .await
  }

  /// `POST /employee/dismiss`
  async fn dismiss_employee(
    &self,
    payload: &DismissPayload,
  ) -> Result<(), RegistryError> {
    self
      .post("/employee/dismiss", &[], payload, Accept::OkOrCreated)
      .await
  }

  /// `POST /companies`
  async fn register_company(
    &self,
    payload: &CompanyPayload,
  ) -> Result<(), RegistryError> {
    self.post("/companies", &[], payload, Accept::AnySuccess).await
  }

  /// `POST /workplace/register?allowUpdate=false`
  async fn register_workplace(
    &self,
    payload: &WorkplacePayload,
  ) -> Result<(), RegistryError> {
    self
      .post(
        "/workplace/register",
        &[("allowUpdate", "false")],
        payload,
        Accept::AnySuccess,
      )
      .await
  }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
