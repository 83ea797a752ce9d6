//! # riptide-common
//!
//! Ambient concerns shared by the Riptide crates: configuration loading and
//! tracing setup.

pub mod config;
pub mod telemetry;

pub use config::{ClientConfig, ConfigError};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig};
