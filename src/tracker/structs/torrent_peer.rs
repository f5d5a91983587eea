use std::net::SocketAddr;
use crate::tracker::structs::peer_id::PeerId;

/// A swarm participant.
///
/// Equality and hashing cover the full triple of peer id, address and port:
/// the same address announcing under two peer ids is tracked as two peers.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct TorrentPeer {
    pub peer_id: PeerId,
    pub peer_addr: SocketAddr,
}
