//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (axum::serve)
//!     → request.rs (assign x-request-id)
//!     → tower-http trace / timeout / body limit / security headers
//!     → handlers.rs (GET / → "Hello, World!")
//!     → response (x-request-id echoed back)
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use handlers::GREETING;
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::HttpServer;
