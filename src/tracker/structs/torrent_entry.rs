use std::time::Instant;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::types::ahash_map::AHashMap;

/// State of one swarm.
///
/// `seeds` and `peers` (the leechers) map each peer to the instant it was last
/// seen. Announces go through `refresh_peer`, `graduate_leecher` and
/// `forget_peer`, which keep a peer out of both maps at once; `put_peer` alone
/// does not. `completed` counts leecher to seeder graduations and is never
/// decremented.
#[derive(Clone, Debug, Default)]
pub struct TorrentEntry {
    pub seeds: AHashMap<TorrentPeer, Instant>,
    pub peers: AHashMap<TorrentPeer, Instant>,
    pub completed: u64,
}
