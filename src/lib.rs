//! # Swarm Tracker
//!
//! An in-memory BitTorrent HTTP tracker that partitions swarms by namespace
//! and spreads them over independently locked shards.
//!
//! ## Overview
//!
//! Clients announce to `/{namespace}/announce` and scrape through
//! `/{namespace}/scrape`. The same info hash announced under two namespaces
//! forms two unrelated swarms. Peers that stop announcing are evicted by a
//! periodic sweep; nothing is persisted.
//!
//! ## Modules
//!
//! - [`common`] - Query parsing, logging setup and shared helpers
//! - [`config`] - Configuration loading, overrides and validation
//! - [`http`] - actix-web routing and handlers
//! - [`stats`] - Request counters
//! - [`structs`] - CLI arguments
//! - [`tracker`] - Peers, the sharded swarm store and the protocol handlers

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
pub mod config;

/// HTTP tracker protocol implementation.
pub mod http;

/// Statistics tracking module.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Core tracker logic module.
pub mod tracker;
