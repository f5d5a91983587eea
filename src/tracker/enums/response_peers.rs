use crate::tracker::structs::torrent_peer::TorrentPeer;

/// Peer list of an announce reply in the representation the client asked for.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum ResponsePeers {
    /// Concatenated 6-byte IPv4 entries and 18-byte IPv6 entries.
    Compact {
        peers: Vec<u8>,
        peers6: Vec<u8>,
    },
    /// One `{"peer id", "ip", "port"}` dictionary per peer.
    Dictionary(Vec<TorrentPeer>),
}
