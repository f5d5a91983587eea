// Performance benchmarks for the swarm tracker
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::RngExt;
use std::collections::HashMap;
use std::hint::black_box;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::tracker::structs::info_hash::InfoHash;
use swarm_tracker::tracker::structs::peer_id::PeerId;
use swarm_tracker::tracker::structs::torrent_peer::TorrentPeer;
use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;

fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash::from(bytes)
}

fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    PeerId::from(bytes)
}

fn numbered_peer(number: u32) -> TorrentPeer {
    let [_, a, b, c] = number.to_be_bytes();
    TorrentPeer::from_ip(random_peer_id(), IpAddr::V4(Ipv4Addr::new(10, a, b, c)), 6881)
}

fn create_tracker() -> Arc<TorrentTracker> {
    Arc::new(TorrentTracker::new(Arc::new(Configuration::init())))
}

fn bench_put_peer(c: &mut Criterion) {
    let tracker = create_tracker();

    c.bench_function("put_peer", |b| {
        b.iter(|| {
            let info_hash = random_info_hash();
            let peer = numbered_peer(1);
            tracker.torrents_sharding.put_peer(black_box("room"), &info_hash, peer, false);
        });
    });
}

fn bench_shard_index(c: &mut Criterion) {
    let tracker = create_tracker();
    let info_hash = random_info_hash();

    c.bench_function("shard_index", |b| {
        b.iter(|| black_box(tracker.torrents_sharding.shard_index(black_box("room"), &info_hash)));
    });
}

fn bench_get_peers(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_peers");

    for swarm_size in [10u32, 100, 1000].iter() {
        let tracker = create_tracker();
        let info_hash = random_info_hash();
        for number in 0..*swarm_size {
            tracker.torrents_sharding.put_peer("room", &info_hash, numbered_peer(number), number % 2 == 0);
        }
        let requester = numbered_peer(u32::MAX);

        group.bench_with_input(BenchmarkId::from_parameter(swarm_size), swarm_size, |b, _| {
            b.iter(|| black_box(tracker.torrents_sharding.get_peers("room", &info_hash, &requester, false, 50)));
        });
    }

    group.finish();
}

fn bench_count_peers(c: &mut Criterion) {
    let tracker = create_tracker();
    let info_hash = random_info_hash();
    for number in 0..1000 {
        tracker.torrents_sharding.put_peer("room", &info_hash, numbered_peer(number), number % 3 == 0);
    }

    c.bench_function("count_peers", |b| {
        b.iter(|| black_box(tracker.torrents_sharding.count_peers("room", &info_hash)));
    });
}

fn bench_announce(c: &mut Criterion) {
    let tracker = create_tracker();
    let info_hash = random_info_hash();
    for number in 0..200 {
        tracker.torrents_sharding.put_peer("room", &info_hash, numbered_peer(number), true);
    }

    c.bench_function("announce", |b| {
        b.iter(|| {
            let query = HashMap::from([
                (String::from("info_hash"), vec![info_hash.as_bytes().to_vec()]),
                (String::from("peer_id"), vec![random_peer_id().as_bytes().to_vec()]),
                (String::from("port"), vec![b"6881".to_vec()]),
                (String::from("left"), vec![b"100".to_vec()]),
            ]);
            black_box(tracker.announce("room", IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1)), &query))
        });
    });
}

fn bench_cleanup(c: &mut Criterion) {
    let tracker = create_tracker();
    for _ in 0..1000 {
        tracker.torrents_sharding.put_peer("room", &random_info_hash(), numbered_peer(1), false);
    }

    c.bench_function("cleanup_once", |b| {
        b.iter(|| black_box(tracker.torrents_sharding.cleanup_once()));
    });
}

criterion_group!(
    benches,
    bench_put_peer,
    bench_shard_index,
    bench_get_peers,
    bench_count_peers,
    bench_announce,
    bench_cleanup
);
criterion_main!(benches);
