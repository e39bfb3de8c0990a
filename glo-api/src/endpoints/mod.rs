//! # Glo API Endpoints
//!
//! Endpoint implementations for each Glo resource type. Every operation is a
//! thin call into the shared resource helper with its own path and payload.

pub mod attachments;
pub mod boards;
pub mod cards;
pub mod columns;
pub mod comments;
pub mod users;
