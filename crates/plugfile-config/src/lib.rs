//! Configuration management for plugfile
//!
//! This crate provides the configuration types, their loading logic and the
//! tracing subscriber setup shared by the binary.

pub mod config;
pub mod logging;

pub use config::{AppConfig, BoilerplateConfig, LogFormat, LoggingConfig};
