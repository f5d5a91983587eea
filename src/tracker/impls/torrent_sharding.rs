use std::collections::BTreeMap;
use std::hash::{BuildHasher, Hasher};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::{Duration, Instant};
use log::{debug, error, info};
use parking_lot::RwLock;
use smallvec::SmallVec;
use tokio_shutdown::Shutdown;
use crate::common::common::shutdown_waiting;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::cleanup_stats::CleanupStats;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::swarm_counts::SwarmCounts;
use crate::tracker::structs::swarm_key::SwarmKey;
use crate::tracker::structs::swarm_totals::SwarmTotals;
use crate::tracker::structs::torrent_entry::TorrentEntry;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::structs::torrent_sharding::TorrentSharding;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

type Shard = RwLock<BTreeMap<SwarmKey, TorrentEntry>>;

impl TorrentSharding {
    /// Creates `shard_count` empty shards; a count of zero is raised to one.
    #[tracing::instrument(level = "debug")]
    pub fn new(shard_count: usize, peer_lifetime: Duration) -> TorrentSharding
    {
        TorrentSharding {
            shards: (0..shard_count.max(1)).map(|_| RwLock::new(BTreeMap::new())).collect(),
            hash_builder: ahash::RandomState::with_seeds(0, 0, 0, 0),
            peer_lifetime,
        }
    }

    pub fn shard_count(&self) -> usize
    {
        self.shards.len()
    }

    /// Deterministic shard of a swarm, always in `[0, shard_count)`.
    pub fn shard_index(&self, namespace: &str, info_hash: &InfoHash) -> usize
    {
        let mut key: SmallVec<[u8; 64]> = SmallVec::with_capacity(namespace.len() + info_hash.0.len());
        key.extend_from_slice(namespace.as_bytes());
        key.extend_from_slice(&info_hash.0);

        let mut hasher = self.hash_builder.build_hasher();
        hasher.write(&key);
        (hasher.finish() % self.shards.len() as u64) as usize
    }

    fn get_shard(&self, namespace: &str, info_hash: &InfoHash) -> &Shard
    {
        &self.shards[self.shard_index(namespace, info_hash)]
    }

    /// Inserts or refreshes `peer` in the seeders (`is_seed`) or leechers,
    /// creating the swarm when needed. The opposite set is left untouched.
    pub fn put_peer(&self, namespace: &str, info_hash: &InfoHash, peer: TorrentPeer, is_seed: bool)
    {
        self.put_peer_at(namespace, info_hash, peer, is_seed, Instant::now());
    }

    /// `put_peer` with an explicit last-seen instant.
    pub fn put_peer_at(&self, namespace: &str, info_hash: &InfoHash, peer: TorrentPeer, is_seed: bool, seen: Instant)
    {
        let mut shard = self.get_shard(namespace, info_hash).write();
        let torrent_entry = shard.entry(SwarmKey::new(namespace, info_hash)).or_default();
        if is_seed {
            torrent_entry.seeds.insert(peer, seen);
        } else {
            torrent_entry.peers.insert(peer, seen);
        }
    }

    /// Records `peer` as a seeder (`is_seed`) or leecher and drops it from the
    /// opposite set, both under one write lock. A regular announce whose `left`
    /// changed moves the peer this way without counting a completion.
    pub fn refresh_peer(&self, namespace: &str, info_hash: &InfoHash, peer: TorrentPeer, is_seed: bool)
    {
        self.refresh_peer_at(namespace, info_hash, peer, is_seed, Instant::now());
    }

    /// `refresh_peer` with an explicit last-seen instant.
    pub fn refresh_peer_at(&self, namespace: &str, info_hash: &InfoHash, peer: TorrentPeer, is_seed: bool, seen: Instant)
    {
        let mut shard = self.get_shard(namespace, info_hash).write();
        let torrent_entry = shard.entry(SwarmKey::new(namespace, info_hash)).or_default();
        if is_seed {
            torrent_entry.peers.remove(&peer);
            torrent_entry.seeds.insert(peer, seen);
        } else {
            torrent_entry.seeds.remove(&peer);
            torrent_entry.peers.insert(peer, seen);
        }
    }

    /// Removes `peer` from both sets of the swarm under one write lock.
    /// Returns whether anything was removed; a missing swarm is not created.
    pub fn forget_peer(&self, namespace: &str, info_hash: &InfoHash, peer: &TorrentPeer) -> bool
    {
        let mut shard = self.get_shard(namespace, info_hash).write();
        let Some(torrent_entry) = shard.get_mut(&SwarmKey::new(namespace, info_hash)) else {
            return false;
        };
        let removed_seed = torrent_entry.seeds.remove(peer).is_some();
        let removed_peer = torrent_entry.peers.remove(peer).is_some();
        removed_seed || removed_peer
    }

    /// Removes `peer` from the seeders (`is_seed`) or leechers of the swarm.
    /// Returns whether anything was removed; a missing swarm is not created.
    pub fn delete_peer(&self, namespace: &str, info_hash: &InfoHash, peer: &TorrentPeer, is_seed: bool) -> bool
    {
        let mut shard = self.get_shard(namespace, info_hash).write();
        let Some(torrent_entry) = shard.get_mut(&SwarmKey::new(namespace, info_hash)) else {
            return false;
        };
        if is_seed {
            torrent_entry.seeds.remove(peer).is_some()
        } else {
            torrent_entry.peers.remove(peer).is_some()
        }
    }

    /// Moves `peer` from the leechers to the seeders and counts one completion.
    ///
    /// The completion is counted even if the peer was never a leecher here,
    /// and the swarm is created when missing.
    pub fn graduate_leecher(&self, namespace: &str, info_hash: &InfoHash, peer: TorrentPeer)
    {
        let mut shard = self.get_shard(namespace, info_hash).write();
        let torrent_entry = shard.entry(SwarmKey::new(namespace, info_hash)).or_default();
        torrent_entry.peers.remove(&peer);
        torrent_entry.seeds.insert(peer, Instant::now());
        torrent_entry.completed += 1;
    }

    /// Selects up to `num_want` peers for `requester`, never including it.
    ///
    /// Leechers get seeders first and then other leechers; seeders only get
    /// leechers. Order within each set is unspecified.
    pub fn get_peers(&self, namespace: &str, info_hash: &InfoHash, requester: &TorrentPeer, requester_is_seed: bool, num_want: usize) -> Vec<TorrentPeer>
    {
        let shard = self.get_shard(namespace, info_hash).read();
        let Some(torrent_entry) = shard.get(&SwarmKey::new(namespace, info_hash)) else {
            return Vec::new();
        };

        let available = torrent_entry.peers.len() + if requester_is_seed { 0 } else { torrent_entry.seeds.len() };
        let mut selected = Vec::with_capacity(num_want.min(available));
        if !requester_is_seed {
            selected.extend(torrent_entry.seeds.keys().filter(|peer| *peer != requester).take(num_want).cloned());
        }
        let remaining = num_want - selected.len();
        selected.extend(torrent_entry.peers.keys().filter(|peer| *peer != requester).take(remaining).cloned());
        selected
    }

    /// Seeders, completions and leechers of the swarm; all zero when it does not exist.
    pub fn count_peers(&self, namespace: &str, info_hash: &InfoHash) -> SwarmCounts
    {
        let shard = self.get_shard(namespace, info_hash).read();
        shard.get(&SwarmKey::new(namespace, info_hash))
            .map(TorrentEntry::counts)
            .unwrap_or_default()
    }

    /// Removes every peer older than the peer lifetime and every swarm left empty.
    pub fn cleanup_once(&self) -> CleanupStats
    {
        self.cleanup_once_at(Instant::now())
    }

    /// `cleanup_once` measured against `now`.
    ///
    /// Shards are swept one at a time, each under its own write lock. A panic
    /// while sweeping a shard is logged and the remaining shards are still swept.
    pub fn cleanup_once_at(&self, now: Instant) -> CleanupStats
    {
        let mut removed = CleanupStats::default();
        for (index, shard) in self.shards.iter().enumerate() {
            match panic::catch_unwind(AssertUnwindSafe(|| Self::cleanup_shard(shard, now, self.peer_lifetime))) {
                Ok(shard_removed) => {
                    if !shard_removed.is_empty() {
                        debug!("[PEERS] Shard: {index} - Swarms: {} - Seeds: {} - Peers: {}", shard_removed.swarms, shard_removed.seeds, shard_removed.peers);
                    }
                    removed += shard_removed;
                }
                Err(_) => {
                    error!("[PEERS] Shard: {index} - sweep panicked, continuing with the next shard");
                }
            }
        }
        removed
    }

    fn cleanup_shard(shard: &Shard, now: Instant, peer_lifetime: Duration) -> CleanupStats
    {
        let is_alive = |last_seen: &Instant| now.saturating_duration_since(*last_seen) <= peer_lifetime;
        let mut removed = CleanupStats::default();
        let mut shard = shard.write();
        shard.retain(|_, torrent_entry| {
            let seeds = torrent_entry.seeds.len();
            let peers = torrent_entry.peers.len();
            torrent_entry.seeds.retain(|_, last_seen| is_alive(last_seen));
            torrent_entry.peers.retain(|_, last_seen| is_alive(last_seen));
            removed.seeds += (seeds - torrent_entry.seeds.len()) as u64;
            removed.peers += (peers - torrent_entry.peers.len()) as u64;
            if torrent_entry.is_empty() {
                removed.swarms += 1;
                return false;
            }
            true
        });
        removed
    }

    /// Runs `cleanup_once` every `cleanup_interval` until `shutdown` fires.
    pub async fn cleanup_threads(self: Arc<Self>, torrent_tracker: Arc<TorrentTracker>, shutdown: Shutdown, cleanup_interval: Duration)
    {
        info!("[BOOT] Starting thread for peers cleanup with {} seconds delay...", cleanup_interval.as_secs());
        loop {
            if shutdown_waiting(cleanup_interval, shutdown.clone()).await {
                info!("[BOOT] Shutting down thread for peers cleanup...");
                return;
            }

            torrent_tracker.set_stats(StatsEvent::TimestampTimeout, chrono::Utc::now().timestamp());
            let started = Instant::now();
            let torrents_sharding = self.clone();
            match tokio::task::spawn_blocking(move || torrents_sharding.cleanup_once()).await {
                Ok(removed) => {
                    info!("[PEERS] Removed {} swarms, {} seeds and {} peers in {:?}", removed.swarms, removed.seeds, removed.peers, started.elapsed());
                }
                Err(join_error) => {
                    error!("[PEERS] Cleanup run failed: {join_error}");
                }
            }
        }
    }

    /// Totals over every shard, each read-locked in turn.
    pub fn swarm_totals(&self) -> SwarmTotals
    {
        let mut totals = SwarmTotals::default();
        for shard in self.shards.iter() {
            let shard = shard.read();
            totals.swarms += shard.len() as u64;
            for torrent_entry in shard.values() {
                totals.seeds += torrent_entry.seeds.len() as u64;
                totals.peers += torrent_entry.peers.len() as u64;
                totals.completed += torrent_entry.completed;
            }
        }
        totals
    }

    /// Totals per namespace currently holding at least one swarm, ordered by name.
    pub fn namespace_totals(&self) -> BTreeMap<String, SwarmTotals>
    {
        let mut namespaces: BTreeMap<String, SwarmTotals> = BTreeMap::new();
        for shard in self.shards.iter() {
            let shard = shard.read();
            for (swarm_key, torrent_entry) in shard.iter() {
                let totals = namespaces.entry(swarm_key.namespace.clone()).or_default();
                totals.swarms += 1;
                totals.seeds += torrent_entry.seeds.len() as u64;
                totals.peers += torrent_entry.peers.len() as u64;
                totals.completed += torrent_entry.completed;
            }
        }
        namespaces
    }

    /// Every swarm of `namespace` with its counters, ordered by info hash.
    pub fn namespace_swarms(&self, namespace: &str) -> Vec<(InfoHash, SwarmCounts)>
    {
        let mut swarms = Vec::new();
        for shard in self.shards.iter() {
            let shard = shard.read();
            swarms.extend(shard.iter()
                .filter(|(swarm_key, _)| swarm_key.namespace == namespace)
                .map(|(swarm_key, torrent_entry)| (swarm_key.info_hash.clone(), torrent_entry.counts())));
        }
        swarms.sort_by(|a, b| a.0.cmp(&b.0));
        swarms
    }
}
