use std::borrow::Cow;
use bip_bencode::{ben_bytes, ben_int, ben_list, ben_map, BMutAccess};
use crate::tracker::enums::response_peers::ResponsePeers;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_response::AnnounceResponse;

impl AnnounceResponse {
    /// Bencodes the reply.
    ///
    /// Keys: `interval`, `min_interval` (only when non-zero), `tracker_id`,
    /// `complete`, `incomplete`, `peers` and, for compact replies carrying IPv6
    /// peers, `peers6`.
    pub fn encode(&self) -> Result<Vec<u8>, TrackerError>
    {
        let mut response = ben_map! {
            "interval" => ben_int!(bencode_int(self.interval, "interval")?),
            "tracker_id" => ben_bytes!(self.tracker_id.clone()),
            "complete" => ben_int!(bencode_int(self.complete, "complete")?),
            "incomplete" => ben_int!(bencode_int(self.incomplete, "incomplete")?)
        };
        let min_interval = bencode_int(self.min_interval, "min_interval")?;

        let response_mut = response.dict_mut()
            .ok_or_else(|| TrackerError::Encoding(String::from("announce reply is not a dictionary")))?;
        if min_interval != 0 {
            response_mut.insert(Cow::from(&b"min_interval"[..]), ben_int!(min_interval));
        }
        match &self.peers {
            ResponsePeers::Compact { peers, peers6 } => {
                response_mut.insert(Cow::from(&b"peers"[..]), ben_bytes!(peers.clone()));
                if !peers6.is_empty() {
                    response_mut.insert(Cow::from(&b"peers6"[..]), ben_bytes!(peers6.clone()));
                }
            }
            ResponsePeers::Dictionary(peers) => {
                let mut peers_list = ben_list!();
                if let Some(peers_list_mut) = peers_list.list_mut() {
                    for peer in peers {
                        peers_list_mut.push(peer.pack_dict());
                    }
                }
                response_mut.insert(Cow::from(&b"peers"[..]), peers_list);
            }
        }

        Ok(response.encode())
    }
}

pub(crate) fn bencode_int(value: u64, field: &str) -> Result<i64, TrackerError>
{
    i64::try_from(value)
        .map_err(|_| TrackerError::Encoding(format!("{field} out of range")))
}
