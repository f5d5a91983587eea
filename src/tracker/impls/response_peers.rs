use crate::tracker::enums::response_peers::ResponsePeers;
use crate::tracker::structs::torrent_peer::TorrentPeer;

impl ResponsePeers {
    /// Packs `peers` compactly, IPv4 into `peers` and IPv6 into `peers6`,
    /// or keeps them for dictionary encoding.
    pub fn from_peers(peers: Vec<TorrentPeer>, compact: bool) -> ResponsePeers
    {
        if !compact {
            return ResponsePeers::Dictionary(peers);
        }

        let mut packed = Vec::with_capacity(peers.len() * 6);
        let mut packed6 = Vec::new();
        for peer in &peers {
            if peer.is_ipv4() {
                peer.write_binary(&mut packed);
            } else {
                peer.write_binary(&mut packed6);
            }
        }
        ResponsePeers::Compact { peers: packed, peers6: packed6 }
    }

    pub fn len(&self) -> usize
    {
        match self {
            ResponsePeers::Compact { peers, peers6 } => peers.len() / 6 + peers6.len() / 18,
            ResponsePeers::Dictionary(peers) => peers.len(),
        }
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }
}
