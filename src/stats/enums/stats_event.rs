//! Statistics event types.

use serde::{Deserialize, Serialize};

/// Every counter or timestamp tracked in `StatsAtomics`.
///
/// Used with `TorrentTracker::update_stats()` and `TorrentTracker::set_stats()`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum StatsEvent {
    TimestampTimeout,
    TimestampConsole,
    Tcp4NotFound,
    Tcp4Failure,
    Tcp4ConnectionsHandled,
    Tcp4AnnouncesHandled,
    Tcp4ScrapesHandled,
    Tcp6NotFound,
    Tcp6Failure,
    Tcp6ConnectionsHandled,
    Tcp6AnnouncesHandled,
    Tcp6ScrapesHandled,
}
