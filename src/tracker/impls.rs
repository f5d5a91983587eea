//! Implementation blocks for tracker data structures.
//!
//! Implementations are organized by the struct they extend.

/// InfoHash: Display, FromStr and byte conversions.
pub mod info_hash;

/// PeerId: Display and byte conversions.
pub mod peer_id;

/// SwarmKey construction.
pub mod swarm_key;

/// TorrentEntry: counting and emptiness.
pub mod torrent_entry;

/// TorrentPeer: construction, compact and dictionary encoding.
pub mod torrent_peer;

/// TorrentSharding: the swarm store and its sweeper.
pub mod torrent_sharding;

/// TorrentTracker construction.
pub mod torrent_tracker;

/// TorrentTracker announce and scrape handlers.
pub mod torrent_tracker_handlers;

/// CleanupStats accumulation.
pub mod cleanup_stats;

/// ResponsePeers packing.
pub mod response_peers;

/// AnnounceResponse bencoding.
pub mod announce_response;

/// ScrapeResponse bencoding.
pub mod scrape_response;

/// TrackerError status mapping and failure bodies.
pub mod tracker_error;
