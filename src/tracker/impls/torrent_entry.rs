use crate::tracker::structs::swarm_counts::SwarmCounts;
use crate::tracker::structs::torrent_entry::TorrentEntry;

impl TorrentEntry {
    /// A swarm with no seeders and no leechers is dropped by the sweep,
    /// whatever its completion count.
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty() && self.peers.is_empty()
    }

    pub fn counts(&self) -> SwarmCounts {
        SwarmCounts {
            seeds: self.seeds.len() as u64,
            completed: self.completed,
            peers: self.peers.len() as u64,
        }
    }
}
