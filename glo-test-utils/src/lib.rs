//! Test utilities shared across the glo workspace
//!
//! This crate provides common testing infrastructure including:
//! - Environment variable isolation ([`EnvTestGuard`])
//! - Mock Glo endpoints ([`mock`])
//! - Canned API records ([`fixtures`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod mock;

// Re-export commonly used items
pub use env::EnvTestGuard;
pub use mock::{EchoBody, TEST_TOKEN, mount_echo, mount_json, mount_page, mount_status};
