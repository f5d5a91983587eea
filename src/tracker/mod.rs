//! Swarm tracking core.
//!
//! Peer model and encodings, the sharded swarm store, the announce and scrape
//! handlers and the eviction sweeper.
//!
//! # Architecture
//!
//! - Swarms are keyed by namespace and info hash
//! - Each key hashes to one of a configurable number of shards
//! - Each shard is an ordered map behind its own `parking_lot::RwLock`
//! - Peers carry a last-seen instant and are evicted once it is older than
//!   the configured peer lifetime
//!
//! # Example
//!
//! ```rust
//! use std::net::{IpAddr, Ipv4Addr};
//! use std::sync::Arc;
//! use swarm_tracker::config::structs::configuration::Configuration;
//! use swarm_tracker::tracker::structs::info_hash::InfoHash;
//! use swarm_tracker::tracker::structs::peer_id::PeerId;
//! use swarm_tracker::tracker::structs::torrent_peer::TorrentPeer;
//! use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let tracker = TorrentTracker::new(Arc::new(Configuration::init()));
//! let info_hash = InfoHash::from([1u8; 20]);
//! let peer = TorrentPeer::from_ip(PeerId::from([2u8; 20]), IpAddr::V4(Ipv4Addr::LOCALHOST), 6881);
//! tracker.torrents_sharding.put_peer("room", &info_hash, peer, true);
//! assert_eq!(tracker.torrents_sharding.count_peers("room", &info_hash).seeds, 1);
//! ```

/// Enumerations for announce events, peer lists and errors.
pub mod enums;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Data structures for tracker operations.
pub mod structs;

/// Type aliases for collection types.
pub mod types;
