use serde::Serialize;

/// Aggregate counters over every swarm of every shard.
#[derive(Serialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct SwarmTotals {
    pub swarms: u64,
    pub seeds: u64,
    pub peers: u64,
    pub completed: u64,
}
