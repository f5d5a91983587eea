//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// HTTP/HTTPS server configuration.
pub mod http_trackers_config;

/// Core tracker settings (intervals, lifetimes, sharding, peer limits).
pub mod tracker_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
