use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::str::FromStr;
use bip_bencode::{ben_bytes, ben_int, ben_map, BencodeMut};
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_peer::TorrentPeer;

impl TorrentPeer {
    /// Builds a peer from a textual address.
    ///
    /// IPv4-mapped IPv6 addresses are stored as plain IPv4, so the same host
    /// reaching the tracker over a dual-stack socket is packed as a 6-byte entry.
    pub fn new(peer_id: PeerId, ip: &str, port: u16) -> Result<TorrentPeer, TrackerError>
    {
        let ip_addr = IpAddr::from_str(ip.trim())
            .map_err(|_| TrackerError::InvalidAddress(ip.to_string()))?;
        Ok(Self::from_ip(peer_id, ip_addr, port))
    }

    pub fn from_ip(peer_id: PeerId, ip: IpAddr, port: u16) -> TorrentPeer
    {
        TorrentPeer {
            peer_id,
            peer_addr: SocketAddr::new(ip.to_canonical(), port),
        }
    }

    pub fn is_ipv4(&self) -> bool
    {
        self.peer_addr.is_ipv4()
    }

    /// Compact form: address bytes followed by the big-endian port,
    /// 6 bytes for IPv4 and 18 for IPv6.
    pub fn pack_binary(&self) -> Vec<u8>
    {
        let mut packed = Vec::with_capacity(if self.is_ipv4() { 6 } else { 18 });
        self.write_binary(&mut packed);
        packed
    }

    /// Appends the compact form to `buffer`.
    pub fn write_binary(&self, buffer: &mut Vec<u8>)
    {
        match self.peer_addr.ip() {
            IpAddr::V4(ip) => buffer.extend_from_slice(&ip.octets()),
            IpAddr::V6(ip) => buffer.extend_from_slice(&ip.octets()),
        }
        buffer.extend_from_slice(&self.peer_addr.port().to_be_bytes());
    }

    /// Inverse of `pack_binary`; `None` unless `data` is exactly 6 or 18 bytes.
    pub fn unpack_binary(data: &[u8]) -> Option<SocketAddr>
    {
        match data.len() {
            6 => {
                let ip: [u8; 4] = data[0..4].try_into().ok()?;
                let port = u16::from_be_bytes([data[4], data[5]]);
                Some(SocketAddr::new(IpAddr::V4(Ipv4Addr::from(ip)), port))
            }
            18 => {
                let ip: [u8; 16] = data[0..16].try_into().ok()?;
                let port = u16::from_be_bytes([data[16], data[17]]);
                Some(SocketAddr::new(IpAddr::V6(Ipv6Addr::from(ip)), port))
            }
            _ => None
        }
    }

    /// Dictionary form: `{"peer id": <raw id>, "ip": <text>, "port": <int>}`.
    pub fn pack_dict(&self) -> BencodeMut<'static>
    {
        ben_map! {
            "peer id" => ben_bytes!(self.peer_id.0.to_vec()),
            "ip" => ben_bytes!(self.peer_addr.ip().to_string()),
            "port" => ben_int!(i64::from(self.peer_addr.port()))
        }
    }
}
