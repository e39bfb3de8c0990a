//! # Configuration
//!
//! Resolves the access token, API address and timeout from command-line
//! flags and the environment. Flags win over environment variables.

use std::env;
use std::time::Duration;

use anyhow::{Result, bail};
use tracing::debug;

use crate::consts::{ENV_BASE_URL, ENV_TOKEN, ENV_TOKEN_FALLBACK};

/// Settings needed to build a Glo client
#[derive(Clone, PartialEq, Eq)]
pub struct GloConfig {
  pub token: String,
  /// API base address; the hosted service when `None`
  pub base_url: Option<String>,
  pub timeout: Duration,
}

impl std::fmt::Debug for GloConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("GloConfig")
      .field("token", &"[REDACTED]")
      .field("base_url", &self.base_url)
      .field("timeout", &self.timeout)
      .finish()
  }
}

impl GloConfig {
  /// Resolve the configuration against the process environment.
  pub fn resolve(token: Option<String>, base_url: Option<String>, timeout_secs: u64) -> Result<Self> {
    Self::resolve_with(token, base_url, timeout_secs, |key| env::var(key).ok())
  }

  /// Resolve the configuration, reading variables through `lookup`.
  ///
  /// The token comes from the flag, then `GLO_TOKEN`, then `TOKEN`. Empty
  /// values count as unset.
  pub fn resolve_with<F>(token: Option<String>, base_url: Option<String>, timeout_secs: u64, lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let token = match token.filter(|t| !t.trim().is_empty()) {
      Some(token) => {
        debug!("Using access token from --token");
        token
      }
      None => match lookup(ENV_TOKEN).or_else(|| lookup(ENV_TOKEN_FALLBACK)) {
        Some(token) => {
          debug!("Using access token from the environment");
          token
        }
        None => bail!(
          "No Glo access token found. Pass --token or set {ENV_TOKEN}.\n\
           Personal access tokens can be created in the GitKraken account settings."
        ),
      },
    };

    if timeout_secs == 0 {
      bail!("--timeout must be at least one second");
    }

    let base_url = base_url.filter(|u| !u.trim().is_empty()).or_else(|| lookup(ENV_BASE_URL));

    Ok(Self {
      token,
      base_url,
      timeout: Duration::from_secs(timeout_secs),
    })
  }
}
