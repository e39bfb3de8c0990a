//! # Transport
//!
//! Performs exactly one HTTP round trip against the Glo API and normalizes
//! the outcome. Every resource operation goes through [`GloClient::json_request`]
//! or [`GloClient::multipart_request`]; both end in the same status
//! classification:
//!
//! - `200`: the full body and the response headers are returned
//! - `204`: an empty body and the response headers are returned
//! - `429`: [`GloError::RateLimited`], body not read
//! - anything else: [`GloError::UnsupportedStatus`], body not read

use reqwest::header::{self, HeaderMap};
use reqwest::multipart::Form;
use reqwest::{Method, StatusCode};
use tracing::{debug, instrument, trace, warn};
use url::Url;

use crate::client::GloClient;
use crate::consts::{CONTENT_TYPE_JSON, CONTENT_TYPE_MULTIPART};
use crate::error::{GloError, Result};
use crate::query::Query;

/// Content type selector for outgoing requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContentType {
  Json,
  MultipartFormData,
}

impl ContentType {
  /// The media type sent in the `Content-Type` header.
  pub(crate) const fn as_str(self) -> &'static str {
    match self {
      Self::Json => CONTENT_TYPE_JSON,
      Self::MultipartFormData => CONTENT_TYPE_MULTIPART,
    }
  }
}

/// Body handed to the transport.
pub(crate) enum RequestBody {
  Json(Option<Vec<u8>>),
  Multipart(Form),
}

impl RequestBody {
  const fn content_type(&self) -> ContentType {
    match self {
      Self::Json(_) => ContentType::Json,
      Self::Multipart(_) => ContentType::MultipartFormData,
    }
  }
}

/// Outcome of a successful round trip.
#[derive(Debug)]
pub(crate) struct RawResponse {
  /// Response body; empty for `204 No Content`.
  pub(crate) body: Vec<u8>,
  pub(crate) headers: HeaderMap,
}

impl GloClient {
  /// Issue a request with an optional JSON body.
  pub(crate) async fn json_request(
    &self,
    method: Method,
    url: Url,
    body: Option<Vec<u8>>,
    query: Option<&Query>,
  ) -> Result<RawResponse> {
    self.execute(method, url, RequestBody::Json(body), query).await
  }

  /// Issue a request carrying a multipart form, used for file uploads.
  pub(crate) async fn multipart_request(
    &self,
    method: Method,
    url: Url,
    form: Form,
    query: Option<&Query>,
  ) -> Result<RawResponse> {
    self.execute(method, url, RequestBody::Multipart(form), query).await
  }

  #[instrument(skip(self, url, body, query), fields(url = %url), level = "debug")]
  async fn execute(
    &self,
    method: Method,
    mut url: Url,
    body: RequestBody,
    query: Option<&Query>,
  ) -> Result<RawResponse> {
    if let Some(query) = query {
      query.apply(&mut url);
    }

    let content_type = body.content_type();
    trace!("Glo API request: {} {} ({})", method, url, content_type.as_str());

    let request = self
      .client
      .request(method.clone(), url.clone())
      .header(header::AUTHORIZATION, self.bearer());

    // reqwest writes the multipart content type itself so that it carries the
    // form boundary.
    let request = match body {
      RequestBody::Json(Some(bytes)) => request.header(header::CONTENT_TYPE, content_type.as_str()).body(bytes),
      RequestBody::Json(None) => request.header(header::CONTENT_TYPE, content_type.as_str()),
      RequestBody::Multipart(form) => request.multipart(form),
    };

    let response = request.send().await.map_err(|source| GloError::Transport {
      method: method.clone(),
      url: url.to_string(),
      source,
    })?;

    let status = response.status();
    debug!("Glo API response status: {}", status);

    match status {
      StatusCode::OK => {
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|source| GloError::Transport {
          method,
          url: url.to_string(),
          source,
        })?;
        trace!("Glo API response body: {} bytes", body.len());
        Ok(RawResponse {
          body: body.to_vec(),
          headers,
        })
      }
      StatusCode::NO_CONTENT => Ok(RawResponse {
        body: Vec::new(),
        headers: response.headers().clone(),
      }),
      StatusCode::TOO_MANY_REQUESTS => {
        warn!("Glo API rate limit reached for {} {}", method, url);
        Err(GloError::RateLimited)
      }
      _ => {
        warn!("Unsupported Glo API response for {} {}: HTTP {}", method, url, status);
        Err(GloError::UnsupportedStatus {
          code: status.as_u16(),
          reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        })
      }
    }
  }
}
