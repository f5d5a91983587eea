//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! the other modules of the tracker.
//!
//! # Utilities
//!
//! - Byte-oriented query string parsing
//! - Logging setup
//! - Graceful shutdown waiting
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::common::common::parse_query;
//!
//! // Parse a raw query string, keeping binary values intact
//! let params = parse_query(Some(String::from("info_hash=%ab%cd&port=6881")))?;
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Unit tests for common utilities.
pub mod tests;
