//! # Client Creation
//!
//! Builds an authenticated Glo client, and the runtime to drive it, from
//! the resolved configuration.

use anyhow::{Context, Result};
use glo_api::GloClient;
use tokio::runtime::Runtime;

use crate::config::GloConfig;

/// Creates a Glo client from the resolved configuration
pub fn create_glo_client_from_config(config: &GloConfig) -> Result<GloClient> {
  let mut builder = GloClient::builder(config.token.as_str()).timeout(config.timeout);
  if let Some(base_url) = &config.base_url {
    builder = builder.base_url(base_url.as_str());
  }
  builder.build().context("Failed to create Glo client")
}

/// Creates a tokio runtime and an authenticated Glo client
///
/// This is a convenience function for CLI commands that need both a runtime
/// and a Glo client.
pub fn create_glo_runtime_and_client(config: &GloConfig) -> Result<(Runtime, GloClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_glo_client_from_config(config)?;
  Ok((rt, client))
}
