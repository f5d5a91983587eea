use std::net::IpAddr;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

/// A validated announce.
///
/// `remote_addr` is the address the peer is recorded under: the `ip` query
/// override when one was given, otherwise the connection's remote address.
#[derive(Clone, Debug)]
pub struct AnnounceQueryRequest {
    pub namespace: String,
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
    pub port: u16,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub compact: bool,
    pub no_peer_id: bool,
    pub event: AnnounceEvent,
    pub remote_addr: IpAddr,
    pub numwant: u64,
    pub key: Option<Vec<u8>>,
    pub tracker_id: Option<String>,
}
