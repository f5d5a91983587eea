use crate::tracker::enums::response_peers::ResponsePeers;

/// Announce reply before bencoding.
///
/// A `min_interval` of zero is left out of the encoded dictionary.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct AnnounceResponse {
    pub interval: u64,
    pub min_interval: u64,
    pub tracker_id: String,
    /// Seeders in the swarm.
    pub complete: u64,
    /// Leechers in the swarm.
    pub incomplete: u64,
    pub peers: ResponsePeers,
}
