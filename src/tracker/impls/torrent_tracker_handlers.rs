use std::collections::{BTreeMap, HashMap};
use std::net::IpAddr;
use std::str::FromStr;
use log::debug;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::response_peers::ResponsePeers;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::announce_response::AnnounceResponse;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::scrape_query_request::ScrapeQueryRequest;
use crate::tracker::structs::scrape_response::ScrapeResponse;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

type Query = HashMap<String, Vec<Vec<u8>>>;

fn first_value<'a>(query: &'a Query, field: &str) -> Option<&'a [u8]> {
    query.get(field).and_then(|values| values.first()).map(Vec::as_slice)
}

fn get_required_bytes<'a>(query: &'a Query, field: &str) -> Result<&'a [u8], TrackerError> {
    let value = first_value(query, field)
        .ok_or_else(|| TrackerError::BadRequest(format!("missing {field}")))?;
    if value.is_empty() {
        return Err(TrackerError::BadRequest(format!("no {field} given")));
    }
    Ok(value)
}

fn parse_bytes<T: FromStr>(bytes: &[u8], field: &str) -> Result<T, TrackerError> {
    std::str::from_utf8(bytes).ok()
        .and_then(|value| value.trim().parse::<T>().ok())
        .ok_or_else(|| TrackerError::BadRequest(format!("invalid {field}")))
}

fn parse_integer<T: FromStr>(query: &Query, field: &str) -> Result<T, TrackerError> {
    parse_bytes(get_required_bytes(query, field)?, field)
}

fn parse_optional_integer<T: FromStr>(query: &Query, field: &str) -> Result<Option<T>, TrackerError> {
    match first_value(query, field) {
        None | Some([]) => Ok(None),
        Some(bytes) => parse_bytes(bytes, field).map(Some),
    }
}

fn parse_flag(query: &Query, field: &str, default: bool) -> Result<bool, TrackerError> {
    match first_value(query, field) {
        None => Ok(default),
        Some(bytes) => match bytes.to_ascii_lowercase().as_slice() {
            b"" | b"1" | b"true" => Ok(true),
            b"0" | b"false" => Ok(false),
            _ => Err(TrackerError::BadRequest(format!("invalid {field}"))),
        },
    }
}

fn parse_namespace(namespace: &str) -> Result<String, TrackerError> {
    let namespace = namespace.trim();
    if namespace.is_empty() {
        return Err(TrackerError::BadRequest(String::from("missing namespace")));
    }
    Ok(namespace.to_string())
}

impl TorrentTracker {
    /// Turns a decoded announce query into an `AnnounceQueryRequest`.
    ///
    /// `info_hash`, `port` and `left` are required. `compact` defaults to true,
    /// `numwant` to the configured default and is capped at the configured
    /// maximum. An `ip` parameter replaces `remote_addr`.
    #[tracing::instrument(level = "debug", skip(self, query))]
    pub fn validate_announce(&self, namespace: &str, remote_addr: IpAddr, query: &Query) -> Result<AnnounceQueryRequest, TrackerError>
    {
        let tracker_config = &self.config.tracker_config;
        let namespace = parse_namespace(namespace)?;

        let info_hash = get_required_bytes(query, "info_hash")?;
        let peer_id = first_value(query, "peer_id").unwrap_or_default();
        let port = parse_integer::<u16>(query, "port")?;
        if port == 0 {
            return Err(TrackerError::BadRequest(String::from("invalid port")));
        }
        let uploaded = parse_optional_integer::<u64>(query, "uploaded")?.unwrap_or(0);
        let downloaded = parse_optional_integer::<u64>(query, "downloaded")?.unwrap_or(0);
        let left = parse_integer::<u64>(query, "left")?;
        let compact = parse_flag(query, "compact", true)?;
        let no_peer_id = query.contains_key("no_peer_id");

        let event = first_value(query, "event")
            .map(|bytes| match bytes.to_ascii_lowercase().as_slice() {
                b"started" => AnnounceEvent::Started,
                b"stopped" => AnnounceEvent::Stopped,
                b"completed" => AnnounceEvent::Completed,
                _ => AnnounceEvent::None,
            })
            .unwrap_or(AnnounceEvent::None);

        let remote_addr = match first_value(query, "ip") {
            None | Some([]) => remote_addr,
            Some(bytes) => {
                let ip = String::from_utf8_lossy(bytes);
                IpAddr::from_str(ip.trim())
                    .map_err(|_| TrackerError::InvalidAddress(ip.to_string()))?
            }
        };

        let numwant = parse_optional_integer::<u64>(query, "numwant")?
            .unwrap_or(tracker_config.numwant_default)
            .min(tracker_config.numwant_max);

        let key = first_value(query, "key").map(<[u8]>::to_vec);
        let tracker_id = first_value(query, "trackerid")
            .filter(|bytes| !bytes.is_empty())
            .map(|bytes| String::from_utf8_lossy(bytes).to_string());

        Ok(AnnounceQueryRequest {
            namespace,
            info_hash: InfoHash::from(info_hash),
            peer_id: PeerId::from(peer_id),
            port,
            uploaded,
            downloaded,
            left,
            compact,
            no_peer_id,
            event,
            remote_addr,
            numwant,
            key,
            tracker_id,
        })
    }

    /// Applies the announce to the swarm and builds the reply.
    ///
    /// `stopped` removes the peer from both sets, `completed` graduates it to
    /// seeder and any other event records it in the set matching `left`,
    /// leaving the other set. Intervals are halved while the swarm has no
    /// seeders.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn handle_announce(&self, announce_query: &AnnounceQueryRequest) -> AnnounceResponse
    {
        let tracker_config = &self.config.tracker_config;
        let torrents_sharding = &self.torrents_sharding;
        let namespace = announce_query.namespace.as_str();
        let info_hash = &announce_query.info_hash;
        let is_seed = announce_query.left == 0;
        let torrent_peer = TorrentPeer::from_ip(announce_query.peer_id.clone(), announce_query.remote_addr, announce_query.port);

        match announce_query.event {
            AnnounceEvent::Stopped => {
                debug!("[HANDLE ANNOUNCE] Removing from {namespace}/{info_hash} peer {}", torrent_peer.peer_addr);
                torrents_sharding.forget_peer(namespace, info_hash, &torrent_peer);
            }
            AnnounceEvent::Completed => {
                debug!("[HANDLE ANNOUNCE] Completing {namespace}/{info_hash} peer {}", torrent_peer.peer_addr);
                torrents_sharding.graduate_leecher(namespace, info_hash, torrent_peer.clone());
            }
            AnnounceEvent::Started | AnnounceEvent::None => {
                debug!("[HANDLE ANNOUNCE] Adding to {namespace}/{info_hash} peer {}", torrent_peer.peer_addr);
                torrents_sharding.refresh_peer(namespace, info_hash, torrent_peer.clone(), is_seed);
            }
        }

        let counts = torrents_sharding.count_peers(namespace, info_hash);
        let (mut interval, mut min_interval) = (tracker_config.request_interval, tracker_config.request_interval_minimum);
        if counts.seeds == 0 {
            interval /= 2;
            min_interval /= 2;
        }

        let num_want = usize::try_from(announce_query.numwant).unwrap_or(usize::MAX);
        let peers = torrents_sharding.get_peers(namespace, info_hash, &torrent_peer, is_seed, num_want);

        AnnounceResponse {
            interval,
            min_interval,
            tracker_id: announce_query.tracker_id.clone().unwrap_or_else(|| tracker_config.tracker_id.clone()),
            complete: counts.seeds,
            incomplete: counts.peers,
            peers: ResponsePeers::from_peers(peers, announce_query.compact),
        }
    }

    /// Validates, applies and bencodes an announce in one step.
    pub fn announce(&self, namespace: &str, remote_addr: IpAddr, query: &Query) -> Result<Vec<u8>, TrackerError>
    {
        let announce_query = self.validate_announce(namespace, remote_addr, query)?;
        self.handle_announce(&announce_query).encode()
    }

    /// Requires at least one non-empty `info_hash`.
    #[tracing::instrument(level = "debug", skip(self, query))]
    pub fn validate_scrape(&self, namespace: &str, query: &Query) -> Result<ScrapeQueryRequest, TrackerError>
    {
        let namespace = parse_namespace(namespace)?;
        let values = query.get("info_hash")
            .filter(|values| !values.is_empty())
            .ok_or_else(|| TrackerError::BadRequest(String::from("missing info_hash")))?;

        let mut info_hash = Vec::with_capacity(values.len());
        for value in values {
            if value.is_empty() {
                return Err(TrackerError::BadRequest(String::from("no info_hash given")));
            }
            info_hash.push(InfoHash::from(value.as_slice()));
        }

        Ok(ScrapeQueryRequest { namespace, info_hash })
    }

    /// Counts every requested swarm of the namespace; unknown swarms report zeros.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn handle_scrape(&self, scrape_query: &ScrapeQueryRequest) -> ScrapeResponse
    {
        let files = scrape_query.info_hash.iter()
            .map(|info_hash| (info_hash.clone(), self.torrents_sharding.count_peers(&scrape_query.namespace, info_hash)))
            .collect::<BTreeMap<_, _>>();
        ScrapeResponse { files }
    }

    /// Validates, counts and bencodes a scrape in one step.
    pub fn scrape(&self, namespace: &str, query: &Query) -> Result<Vec<u8>, TrackerError>
    {
        let scrape_query = self.validate_scrape(namespace, query)?;
        self.handle_scrape(&scrape_query).encode()
    }
}
