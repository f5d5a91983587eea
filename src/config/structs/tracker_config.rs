use serde::{Deserialize, Serialize};

/// Core tracker settings. All durations are in seconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Returned as `tracker_id` when the client did not send its own.
    pub tracker_id: String,
    pub request_interval: u64,
    pub request_interval_minimum: u64,
    /// Peer lifetime: peers not seen for longer than this are evicted.
    pub peers_timeout: u64,
    /// Period between two eviction sweeps.
    pub peers_cleanup_interval: u64,
    /// Number of independently locked shards of the swarm store.
    pub shards: usize,
    pub numwant_default: u64,
    pub numwant_max: u64,
}
