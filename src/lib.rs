//! Minimal web service packaged as a stripped native binary.
//!
//! ```text
//!   client ── GET / ──▶ net listener (0.0.0.0:5000)
//!                          │
//!                          ▼
//!                 request id → trace → timeout → body limit → security headers
//!                          │
//!                          ▼
//!                 handlers::hello ── 200 "Hello, World!"
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
