use std::sync::Arc;
use std::time::Duration;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::torrent_sharding::TorrentSharding;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    #[tracing::instrument(level = "debug", skip(config))]
    pub fn new(config: Arc<Configuration>) -> TorrentTracker
    {
        let tracker_config = &config.tracker_config;
        let torrents_sharding = TorrentSharding::new(
            tracker_config.shards,
            Duration::from_secs(tracker_config.peers_timeout)
        );

        TorrentTracker {
            config: config.clone(),
            torrents_sharding: Arc::new(torrents_sharding),
            stats: Arc::new(StatsAtomics::default()),
        }
    }
}
