//! Error types for Glo API operations.
//!
//! Every operation returns the first failure it hits, unmodified. The variants
//! map onto the stages of a single round trip: building the request, sending
//! it, classifying the status, decoding the body and reading the pagination
//! header.

use reqwest::Method;

/// Errors that can occur during Glo API operations.
#[derive(Debug, thiserror::Error)]
pub enum GloError {
  /// The underlying HTTP client could not be configured.
  #[error("failed to build HTTP client: {0}")]
  Builder(#[source] reqwest::Error),

  /// The request URL could not be constructed.
  #[error("failed to construct request URL: {0}")]
  InvalidUrl(#[from] url::ParseError),

  /// An ID would not form a single path segment of the request URL.
  #[error("invalid path segment {segment:?}")]
  InvalidPathSegment {
    /// The rejected segment.
    segment: String,
  },

  /// The request body could not be encoded.
  #[error("failed to encode {what} request body: {reason}")]
  InvalidBody {
    /// The record being encoded.
    what: &'static str,
    /// Why encoding failed.
    reason: String,
  },

  /// The request could not be sent or the response body could not be read.
  #[error("{method} {url} failed: {source}")]
  Transport {
    method: Method,
    url: String,
    #[source]
    source: reqwest::Error,
  },

  /// The service answered with HTTP 429.
  #[error("rate limit reached")]
  RateLimited,

  /// The service answered with a status other than 200, 204 or 429.
  #[error("unsupported response: HTTP {code} {reason}")]
  UnsupportedStatus {
    /// Numeric status code.
    code: u16,
    /// Canonical reason phrase of the status.
    reason: String,
  },

  /// The response body did not match the expected shape.
  #[error("failed to decode {what} response: {source}")]
  Decode {
    /// The record being decoded.
    what: &'static str,
    #[source]
    source: serde_json::Error,
  },

  /// The pagination header was missing or not a boolean.
  #[error("missing or invalid `{header}` response header{}", format_header_value(.value.as_deref()))]
  HeaderParse {
    header: &'static str,
    /// The raw header value, `None` when the header was absent.
    value: Option<String>,
  },
}

impl GloError {
  /// Whether the service refused the request because of rate limiting.
  #[must_use]
  pub const fn is_rate_limited(&self) -> bool {
    matches!(self, Self::RateLimited)
  }

  /// The HTTP status code carried by the error, if any.
  #[must_use]
  pub const fn status_code(&self) -> Option<u16> {
    match self {
      Self::RateLimited => Some(429),
      Self::UnsupportedStatus { code, .. } => Some(*code),
      _ => None,
    }
  }
}

fn format_header_value(value: Option<&str>) -> String {
  match value {
    Some(value) => format!(": {value:?}"),
    None => String::new(),
  }
}

/// A specialized Result type for Glo API operations.
pub type Result<T> = std::result::Result<T, GloError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rate_limited_display() {
    let err = GloError::RateLimited;
    assert_eq!(err.to_string(), "rate limit reached");
    assert!(err.is_rate_limited());
    assert_eq!(err.status_code(), Some(429));
  }

  #[test]
  fn test_unsupported_status_display() {
    let err = GloError::UnsupportedStatus {
      code: 404,
      reason: "Not Found".to_string(),
    };
    assert_eq!(err.to_string(), "unsupported response: HTTP 404 Not Found");
    assert!(!err.is_rate_limited());
    assert_eq!(err.status_code(), Some(404));
  }

  #[test]
  fn test_header_parse_display() {
    let missing = GloError::HeaderParse {
      header: "has-more",
      value: None,
    };
    assert_eq!(missing.to_string(), "missing or invalid `has-more` response header");

    let invalid = GloError::HeaderParse {
      header: "has-more",
      value: Some("maybe".to_string()),
    };
    assert_eq!(
      invalid.to_string(),
      "missing or invalid `has-more` response header: \"maybe\""
    );
    assert_eq!(invalid.status_code(), None);
  }

  #[test]
  fn test_invalid_path_segment_display() {
    let err = GloError::InvalidPathSegment {
      segment: "..".to_string(),
    };
    assert_eq!(err.to_string(), "invalid path segment \"..\"");
    assert_eq!(err.status_code(), None);
  }

  #[test]
  fn test_invalid_url_from_parse_error() {
    let err: GloError = url::Url::parse("not a url").unwrap_err().into();
    assert!(matches!(err, GloError::InvalidUrl(_)));
    assert!(err.to_string().starts_with("failed to construct request URL"));
  }
}
