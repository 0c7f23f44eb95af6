//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → limits (body size cap via tower-http)
//!     → handler
//! Outgoing response:
//!     → headers.rs (hardening headers)
//! ```
//!
//! Process-level hardening (non-root user, no shell in the image) lives in
//! the Dockerfile.

pub mod headers;
