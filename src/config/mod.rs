//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (0.0.0.0:5000)  ─┐
//! config file (TOML)       ─┴→ loader.rs (parse & deserialize)
//!                              → validation.rs (semantic checks)
//!                              → ServerConfig (validated, immutable)
//! ```
//!
//! The shipped binary runs on defaults only. Loading from disk is available
//! to embedders and tests.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, SecurityConfig, ServerConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
