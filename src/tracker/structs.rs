//! Data structures for the swarm tracker.
//!
//! Identifiers, peers, swarm state, the sharded store and the request and
//! response types of the announce and scrape handlers.

/// Shared tracker state.
pub mod torrent_tracker;

/// Validated announce parameters.
pub mod announce_query_request;

/// Validated scrape parameters.
pub mod scrape_query_request;

/// Opaque info hash identifier.
pub mod info_hash;

/// Opaque peer identifier.
pub mod peer_id;

/// A peer: identifier, address and port.
pub mod torrent_peer;

/// Namespace plus info hash, the key of a swarm.
pub mod swarm_key;

/// Seeders, leechers and completion count of one swarm.
pub mod torrent_entry;

/// Sharded swarm storage.
///
/// Each shard is an independently locked ordered map of swarms.
pub mod torrent_sharding;

/// Counters of a single swarm.
pub mod swarm_counts;

/// Counters summed over all swarms.
pub mod swarm_totals;

/// Removal counters of a sweep.
pub mod cleanup_stats;

/// Announce reply.
pub mod announce_response;

/// Scrape reply.
pub mod scrape_response;
