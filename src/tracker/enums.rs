//! Enumerations for tracker operations.

/// Announce event types:
/// - `None` - Regular update
/// - `Started` - New download started
/// - `Stopped` - Download stopped
/// - `Completed` - Download completed (became a seeder)
pub mod announce_event;

/// Compact or dictionary peer lists for announce replies.
pub mod response_peers;

/// Handler errors and their client-facing messages.
pub mod tracker_error;
