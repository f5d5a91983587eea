//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the tracker configuration
//! from TOML files, with a small set of environment variable overrides applied
//! on top.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains sections for:
//! - **tracker_config**: Announce intervals, peer lifetime, sweep period, shard count
//! - **http_server**: HTTP/HTTPS server instances
//! - **sentry_config**: Error reporting configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one when asked to
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration handling.
pub mod tests;
