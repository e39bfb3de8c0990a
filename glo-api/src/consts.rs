//! Constants for the glo-api client.

use std::time::Duration;

/// Base URL of the hosted Glo API, including the versioned path prefix
pub const API_BASE_URL: &str = "https://gloapi.gitkraken.com/v1/glo";

/// User-Agent header value for the Glo API client
pub const USER_AGENT: &str = concat!("glo-rs/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Request timeout applied when the caller does not configure one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Response header carrying the pagination flag of list endpoints
pub const HAS_MORE_HEADER: &str = "has-more";

/// Content type of JSON request bodies
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Content type of attachment uploads
pub const CONTENT_TYPE_MULTIPART: &str = "multipart/form-data";

/// Name of the multipart form part holding an uploaded file
pub const ATTACHMENT_FORM_FIELD: &str = "file";
