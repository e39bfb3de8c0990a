//! # Glo HTTP Client
//!
//! The client object shared by every operation: the bearer token, the HTTP
//! connection pool and the API base address. It carries no other state, so a
//! single instance can serve concurrent callers.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};
use url::{ParseError, Url};

use crate::consts::{API_BASE_URL, DEFAULT_TIMEOUT, USER_AGENT};
use crate::error::{GloError, Result};

/// Represents a Glo API client
pub struct GloClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  token: SecretString,
}

impl GloClient {
  /// Create a client for the hosted API with the default timeout.
  ///
  /// # Errors
  ///
  /// Returns [`GloError::Builder`] if the HTTP client cannot be initialized.
  pub fn new(token: impl Into<String>) -> Result<Self> {
    Self::builder(token).build()
  }

  /// Start configuring a client.
  pub fn builder(token: impl Into<String>) -> GloClientBuilder {
    GloClientBuilder::new(token.into())
  }

  /// The API base address every resource path is appended to.
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Build an absolute endpoint URL below the base address, one path
  /// segment at a time.
  ///
  /// Segments are percent-encoded, so an ID containing `/`, `?` or `#` stays
  /// inside its own segment. Empty, `.` and `..` segments are rejected.
  pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(&self.base_url)?;

    if let Some(segment) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
      return Err(GloError::InvalidPathSegment {
        segment: (*segment).to_string(),
      });
    }

    url
      .path_segments_mut()
      .map_err(|()| GloError::InvalidUrl(ParseError::RelativeUrlWithCannotBeABaseBase))?
      .pop_if_empty()
      .extend(segments);

    Ok(url)
  }

  /// Like [`GloClient::endpoint`], with a trailing slash after the last
  /// segment.
  pub(crate) fn endpoint_with_trailing_slash(&self, segments: &[&str]) -> Result<Url> {
    let mut url = self.endpoint(segments)?;
    url
      .path_segments_mut()
      .map_err(|()| GloError::InvalidUrl(ParseError::RelativeUrlWithCannotBeABaseBase))?
      .push("");
    Ok(url)
  }

  pub(crate) fn bearer(&self) -> String {
    format!("Bearer {}", self.token.expose_secret())
  }
}

impl fmt::Debug for GloClient {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("GloClient")
      .field("base_url", &self.base_url)
      .field("token", &"[REDACTED]")
      .finish_non_exhaustive()
  }
}

/// Builder for [`GloClient`].
pub struct GloClientBuilder {
  token: SecretString,
  base_url: String,
  timeout: Duration,
  user_agent: String,
}

impl GloClientBuilder {
  fn new(token: String) -> Self {
    Self {
      token: SecretString::from(token),
      base_url: API_BASE_URL.to_string(),
      timeout: DEFAULT_TIMEOUT,
      user_agent: USER_AGENT.to_string(),
    }
  }

  /// Override the API base address (for self-hosted proxies and tests).
  pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into().trim_end_matches('/').to_string();
    self
  }

  /// Bound every request to `timeout`.
  pub const fn timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// Override the User-Agent header.
  pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
    self.user_agent = user_agent.into();
    self
  }

  /// Build the client.
  ///
  /// # Errors
  ///
  /// Returns [`GloError::Builder`] if the HTTP client cannot be initialized.
  #[instrument(skip(self), fields(base_url = %self.base_url), level = "debug")]
  pub fn build(self) -> Result<GloClient> {
    let client = Client::builder()
      .timeout(self.timeout)
      .user_agent(self.user_agent)
      .build()
      .map_err(GloError::Builder)?;

    debug!("Created Glo client with timeout {:?}", self.timeout);

    Ok(GloClient {
      client,
      base_url: self.base_url,
      token: self.token,
    })
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{header, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  #[test]
  fn test_glo_client_creation() -> anyhow::Result<()> {
    let client = GloClient::new("test_token")?;

    assert_eq!(client.base_url(), "https://gloapi.gitkraken.com/v1/glo");
    assert_eq!(client.bearer(), "Bearer test_token");

    Ok(())
  }

  #[test]
  fn test_trailing_slash_is_stripped() -> anyhow::Result<()> {
    let client = GloClient::builder("t").base_url("http://localhost:3000/v1/glo/").build()?;

    assert_eq!(client.base_url(), "http://localhost:3000/v1/glo");
    assert_eq!(
      client.endpoint(&["boards", "b1"])?.as_str(),
      "http://localhost:3000/v1/glo/boards/b1"
    );

    Ok(())
  }

  #[test]
  fn test_invalid_base_url_fails_before_io() -> anyhow::Result<()> {
    let client = GloClient::builder("t").base_url("not a url").build()?;

    let err = client.endpoint(&["boards"]).unwrap_err();
    assert!(matches!(err, GloError::InvalidUrl(_)));

    Ok(())
  }

  #[test]
  fn test_ids_are_escaped_within_their_segment() -> anyhow::Result<()> {
    let client = GloClient::builder("t").base_url("http://localhost:3000/v1/glo").build()?;

    let url = client.endpoint(&["boards", "b1", "cards", "card1#", "comments", "cm1"])?;
    assert_eq!(url.path(), "/v1/glo/boards/b1/cards/card1%23/comments/cm1");
    assert_eq!(url.fragment(), None);

    let url = client.endpoint(&["boards", "a/b?c", "cards"])?;
    assert_eq!(url.path(), "/v1/glo/boards/a%2Fb%3Fc/cards");
    assert_eq!(url.query(), None);

    Ok(())
  }

  #[test]
  fn test_dot_and_empty_segments_are_rejected() -> anyhow::Result<()> {
    let client = GloClient::builder("t").base_url("http://localhost:3000/v1/glo").build()?;

    for id in ["..", ".", ""] {
      let err = client.endpoint(&["boards", id, "cards"]).unwrap_err();
      match err {
        GloError::InvalidPathSegment { segment } => assert_eq!(segment, id),
        other => anyhow::bail!("unexpected error for {id:?}: {other}"),
      }
    }

    let url = client.endpoint(&["boards", "../../boards/b1"])?;
    assert_eq!(url.path(), "/v1/glo/boards/..%2F..%2Fboards%2Fb1");

    Ok(())
  }

  #[test]
  fn test_trailing_slash_endpoint() -> anyhow::Result<()> {
    let client = GloClient::builder("t").base_url("http://localhost:3000/v1/glo").build()?;

    let url = client.endpoint_with_trailing_slash(&["boards", "b1", "columns", "c1", "cards"])?;
    assert_eq!(url.path(), "/v1/glo/boards/b1/columns/c1/cards/");

    Ok(())
  }

  #[test]
  fn test_debug_redacts_token() -> anyhow::Result<()> {
    let client = GloClient::new("super-secret")?;

    let rendered = format!("{client:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("REDACTED"));

    Ok(())
  }

  #[tokio::test]
  async fn test_user_agent_is_sent() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = GloClient::builder("test_token")
      .base_url(mock_server.uri())
      .user_agent("glo-test")
      .build()?;

    Mock::given(method("GET"))
      .and(path("/ping"))
      .and(header("user-agent", "glo-test"))
      .respond_with(ResponseTemplate::new(204))
      .mount(&mock_server)
      .await;

    let response = client.client.get(client.endpoint(&["ping"])?).send().await?;
    assert_eq!(response.status().as_u16(), 204);

    Ok(())
  }
}
