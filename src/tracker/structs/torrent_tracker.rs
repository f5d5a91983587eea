use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::torrent_sharding::TorrentSharding;

/// Shared tracker state handed to every request handler and background task.
#[derive(Debug)]
pub struct TorrentTracker {
    pub config: Arc<Configuration>,
    pub torrents_sharding: Arc<TorrentSharding>,
    pub stats: Arc<StatsAtomics>,
}
