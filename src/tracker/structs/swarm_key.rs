use crate::tracker::structs::info_hash::InfoHash;

/// Identifies one swarm: an info hash scoped by its namespace.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub struct SwarmKey {
    pub namespace: String,
    pub info_hash: InfoHash,
}
