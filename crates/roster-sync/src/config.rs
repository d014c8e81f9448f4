//! Process configuration, built once at startup and passed down by reference.
//!
//! Layers, lowest precedence first: field defaults, an optional TOML file,
//! then `ROSTER_*` environment variables.

use std::{path::PathBuf, time::Duration};

use chrono_tz::Tz;
use roster_core::{
  eligibility::DEFAULT_TERMINATED_STATUS,
  normalize::{self, DEFAULT_INTERN_MARKER, NormalizationPolicy},
};
use roster_registry::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, RegistryConfig};
use serde::Deserialize;

use crate::{Error, Result, dispatch::RetryPolicy};

/// Raw settings as deserialised from file and environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
  pub api_token:               Option<String>,
  pub registry_url:            String,
  pub request_timeout_secs:    u64,
  pub source_path:             Option<PathBuf>,
  pub timezone:                String,
  /// `DD/MM/YYYY`; unset means effective date = admission date.
  pub rollout_date:            Option<String>,
  pub terminated_status:       String,
  pub intern_marker:           String,
  pub strict_birth_date:       bool,
  pub log_dir:                 PathBuf,
  pub dismiss_max_attempts:    u32,
  pub dismiss_base_delay_secs: u64,
}

impl Default for SyncConfig {
  fn default() -> Self {
    Self {
      api_token:               None,
      registry_url:            DEFAULT_BASE_URL.to_string(),
      request_timeout_secs:    DEFAULT_TIMEOUT_SECS,
      source_path:             None,
      timezone:                "America/Sao_Paulo".to_string(),
      rollout_date:            None,
      terminated_status:       DEFAULT_TERMINATED_STATUS.to_string(),
      intern_marker:           DEFAULT_INTERN_MARKER.to_string(),
      strict_birth_date:       true,
      log_dir:                 PathBuf::from("LOG"),
      dismiss_max_attempts:    3,
      dismiss_base_delay_secs: 2,
    }
  }
}

impl SyncConfig {
  /// Read `file` (if it exists) and the environment, then validate.
  pub fn load(file: impl Into<PathBuf>) -> Result<Self> {
    Self::load_with_env(file, config::Environment::with_prefix("ROSTER"))
  }

  /// Values stay strings until deserialised, so `ROSTER_API_TOKEN=007`
  /// keeps its leading zeros.
  fn load_with_env(
    file: impl Into<PathBuf>,
    env: config::Environment,
  ) -> Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(file.into()).required(false))
      .add_source(env)
      .build()?;
    let cfg: Self = settings.try_deserialize()?;
    cfg.validate()?;
    Ok(cfg)
  }

  /// Everything required must be present and parse; no network or disk
  /// access happens here.
  pub fn validate(&self) -> Result<()> {
    self.api_token()?;
    self.source_path()?;
    self.normalization_policy()?;
    if self.dismiss_max_attempts == 0 {
      return Err(Error::ConfigurationMissing(
        "dismiss_max_attempts must be at least 1".into(),
      ));
    }
    Ok(())
  }

  pub fn api_token(&self) -> Result<&str> {
    self
      .api_token
      .as_deref()
      .map(str::trim)
      .filter(|t| !t.is_empty())
      .ok_or_else(|| Error::ConfigurationMissing("api_token is not set".into()))
  }

  pub fn source_path(&self) -> Result<&PathBuf> {
    self.source_path.as_ref().ok_or_else(|| {
      Error::ConfigurationMissing("source_path is not set".into())
    })
  }

  pub fn timezone(&self) -> Result<Tz> {
    self.timezone.parse::<Tz>().map_err(|_| {
      Error::ConfigurationMissing(
        roster_core::Error::InvalidTimezone(self.timezone.clone()).to_string(),
      )
    })
  }

  pub fn normalization_policy(&self) -> Result<NormalizationPolicy> {
    let timezone = self.timezone()?;
    let rollout_ms = self
      .rollout_date
      .as_deref()
      .map(str::trim)
      .filter(|d| !d.is_empty())
      .map(|d| normalize::parse_local_date(d, timezone))
      .transpose()
      .map_err(|e| Error::ConfigurationMissing(format!("rollout_date: {e}")))?;

    Ok(NormalizationPolicy {
      timezone,
      rollout_ms,
      intern_marker: self.intern_marker.clone(),
      strict_birth_date: self.strict_birth_date,
    })
  }

  pub fn registry(&self) -> Result<RegistryConfig> {
    Ok(RegistryConfig {
      base_url:  self.registry_url.clone(),
      api_token: self.api_token()?.to_string(),
      timeout:   Duration::from_secs(self.request_timeout_secs),
    })
  }

  pub fn dismiss_retry(&self) -> RetryPolicy {
    RetryPolicy {
      max_attempts: self.dismiss_max_attempts,
      base_delay:   Duration::from_secs(self.dismiss_base_delay_secs),
    }
  }
}
