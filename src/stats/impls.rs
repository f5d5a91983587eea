//! Statistics implementations.

/// `TorrentTracker` statistics accessors.
pub mod torrent_tracker;

/// Default construction of the atomic counters.
pub mod stats_atomics;
