//! Request handlers.

/// Body returned by the root route.
pub const GREETING: &str = "Hello, World!";

/// `GET /`
///
/// Stateless: every call yields `200 OK` with [`GREETING`] as a plain-text body.
pub async fn hello() -> &'static str {
    GREETING
}
