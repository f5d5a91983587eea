//! Sharded swarm storage for concurrent access.

use std::collections::BTreeMap;
use std::time::Duration;
use parking_lot::RwLock;
use crate::tracker::structs::swarm_key::SwarmKey;
use crate::tracker::structs::torrent_entry::TorrentEntry;

/// Sharded storage for swarm entries.
///
/// `TorrentSharding` distributes swarms across a configurable number of shards
/// to bound lock contention. Each shard is independently locked, so requests for
/// swarms living in different shards never block each other.
///
/// # Sharding Strategy
///
/// A swarm is assigned to a shard by hashing the concatenation of its namespace
/// and info hash with ahash under fixed all-zero seeds, reduced modulo the shard
/// count. The hash only spreads load; it carries no security property.
///
/// # Thread Safety
///
/// Each shard is a `parking_lot::RwLock`:
/// - `get_peers` and `count_peers` take the read lock
/// - `put_peer`, `delete_peer`, `graduate_leecher` and the per-shard sweep take the write lock
/// - No operation ever holds two shard locks at once
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use swarm_tracker::tracker::structs::info_hash::InfoHash;
/// use swarm_tracker::tracker::structs::torrent_sharding::TorrentSharding;
///
/// let sharding = TorrentSharding::new(16, Duration::from_secs(2700));
/// let info_hash = InfoHash::from([7u8; 20]);
/// assert_eq!(sharding.count_peers("room", &info_hash).seeds, 0);
/// ```
#[derive(Debug)]
pub struct TorrentSharding {
    pub shards: Box<[RwLock<BTreeMap<SwarmKey, TorrentEntry>>]>,
    pub(crate) hash_builder: ahash::RandomState,
    /// Peers not seen for longer than this are removed by the sweep.
    pub peer_lifetime: Duration,
}
