//! Constants for the Glo CLI
//!
//! Environment variable names and defaults used when resolving
//! configuration.

/// Environment variable holding the Glo personal access token
pub const ENV_TOKEN: &str = "GLO_TOKEN";

/// Fallback token variable read when `GLO_TOKEN` is unset
pub const ENV_TOKEN_FALLBACK: &str = "TOKEN";

/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "GLO_BASE_URL";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
