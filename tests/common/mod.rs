#![allow(dead_code)]
use rand::RngExt;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tempfile::TempDir;
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::config::structs::http_trackers_config::HttpTrackersConfig;
use swarm_tracker::http::structs::http_service_data::HttpServiceData;
use swarm_tracker::tracker::structs::info_hash::InfoHash;
use swarm_tracker::tracker::structs::peer_id::PeerId;
use swarm_tracker::tracker::structs::torrent_peer::TorrentPeer;
use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;

pub type TestTracker = Arc<TorrentTracker>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.tracker_config.shards = 16;
    config.tracker_config.tracker_id = String::from("test-tracker");
    Arc::new(config)
}

pub fn create_test_http_config() -> Arc<HttpTrackersConfig> {
    Arc::new(HttpTrackersConfig {
        enabled: true,
        bind_address: "127.0.0.1:6969".to_string(),
        real_ip: String::new(),
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        threads: 1,
        ssl: false,
        ssl_key: String::new(),
        ssl_cert: String::new(),
    })
}

pub fn create_test_tracker() -> TestTracker {
    Arc::new(TorrentTracker::new(create_test_config()))
}

pub fn create_test_service_data(tracker: TestTracker, http_config: Arc<HttpTrackersConfig>) -> Arc<HttpServiceData> {
    Arc::new(HttpServiceData {
        torrent_tracker: tracker,
        http_trackers_config: http_config,
    })
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash::from(bytes)
}

pub fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    PeerId::from(bytes)
}

pub fn create_test_peer(peer_id: PeerId, ip: IpAddr, port: u16) -> TorrentPeer {
    TorrentPeer::from_ip(peer_id, ip, port)
}

pub fn create_numbered_peer(number: u16) -> TorrentPeer {
    let [high, low] = number.to_be_bytes();
    TorrentPeer::from_ip(random_peer_id(), IpAddr::V4(Ipv4Addr::new(10, 0, high, low)), 6881)
}

pub fn announce_query(info_hash: &InfoHash, peer_id: &PeerId, port: u16, left: u64) -> HashMap<String, Vec<Vec<u8>>> {
    HashMap::from([
        (String::from("info_hash"), vec![info_hash.as_bytes().to_vec()]),
        (String::from("peer_id"), vec![peer_id.as_bytes().to_vec()]),
        (String::from("port"), vec![port.to_string().into_bytes()]),
        (String::from("left"), vec![left.to_string().into_bytes()]),
    ])
}

/// Percent-encodes every byte, as clients do for binary parameters.
pub fn url_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("%{byte:02X}")).collect()
}

pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}
