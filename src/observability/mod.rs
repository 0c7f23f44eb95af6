//! Observability subsystem.
//!
//! Structured logs via `tracing`. Each request runs inside a span carrying
//! its method, URI and request ID.

pub mod logging;
