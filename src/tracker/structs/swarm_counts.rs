use serde::Serialize;

/// Point-in-time counters of one swarm, as reported by announce and scrape.
#[derive(Serialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct SwarmCounts {
    /// Current number of seeders.
    pub seeds: u64,
    /// Leecher to seeder completions observed over the swarm's lifetime.
    pub completed: u64,
    /// Current number of leechers.
    pub peers: u64,
}
