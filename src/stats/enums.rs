//! Statistics enumerations.

/// Counters and timestamps that can be updated.
pub mod stats_event;
