mod common;

use std::net::SocketAddr;
use std::sync::Arc;
use actix_web::{test, App};
use actix_web::http::StatusCode;
use swarm_tracker::config::structs::http_trackers_config::HttpTrackersConfig;
use swarm_tracker::http::http::{http_service_cors, http_service_routes};
use swarm_tracker::tracker::structs::info_hash::InfoHash;

fn peer_addr(addr: &str) -> SocketAddr {
    addr.parse().unwrap()
}

fn announce_uri(namespace: &str, info_hash: &InfoHash, port: u16, left: u64, extra: &str) -> String {
    format!(
        "/{namespace}/announce?info_hash={}&peer_id={}&port={port}&uploaded=0&downloaded=0&left={left}{extra}",
        common::url_encode(info_hash.as_bytes()),
        common::url_encode(common::random_peer_id().as_bytes())
    )
}

macro_rules! init_app {
    ($tracker:expr, $http_config:expr) => {
        test::init_service(
            App::new()
                .wrap(http_service_cors())
                .configure(http_service_routes(common::create_test_service_data($tracker, $http_config)))
        ).await
    };
}

#[actix_web::test]
async fn test_http_announce_seeder() {
    let tracker = common::create_test_tracker();
    let app = init_app!(tracker.clone(), common::create_test_http_config());
    let info_hash = common::random_info_hash();

    let req = test::TestRequest::get()
        .uri(&announce_uri("room", &info_hash, 6881, 0, ""))
        .peer_addr(peer_addr("1.2.3.4:50000"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("content-type").unwrap(), "text/plain; charset=utf-8");
    let body = test::read_body(resp).await;
    assert!(body.starts_with(b"d8:completei1e10:incompletei0e"));
    assert!(common::contains(&body, b"10:tracker_id12:test-tracker"));
    assert_eq!(tracker.torrents_sharding.count_peers("room", &info_hash).seeds, 1);
    assert_eq!(tracker.get_stats().tcp4_announces_handled, 1);
}

#[actix_web::test]
async fn test_http_leecher_receives_compact_seeder() {
    let tracker = common::create_test_tracker();
    let app = init_app!(tracker.clone(), common::create_test_http_config());
    let info_hash = common::random_info_hash();

    let req = test::TestRequest::get()
        .uri(&announce_uri("room", &info_hash, 6881, 0, ""))
        .peer_addr(peer_addr("1.2.3.4:50000"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&announce_uri("room", &info_hash, 7000, 100, "&compact=1"))
        .peer_addr(peer_addr("5.6.7.8:50000"))
        .to_request();
    let body = test::read_body(test::call_service(&app, req).await).await;

    assert!(common::contains(&body, b"5:peers6:\x01\x02\x03\x04\x1a\xe1"));
    assert!(common::contains(&body, b"8:intervali1800e"));
}

#[actix_web::test]
async fn test_http_ip_parameter_and_ipv6() {
    let tracker = common::create_test_tracker();
    let app = init_app!(tracker.clone(), common::create_test_http_config());
    let info_hash = common::random_info_hash();

    let req = test::TestRequest::get()
        .uri(&announce_uri("room", &info_hash, 6881, 0, "&ip=2001%3Adb8%3A%3A1"))
        .peer_addr(peer_addr("1.2.3.4:50000"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&announce_uri("room", &info_hash, 7000, 100, ""))
        .peer_addr(peer_addr("[2001:db8::2]:50000"))
        .to_request();
    let body = test::read_body(test::call_service(&app, req).await).await;

    assert!(common::contains(&body, b"5:peers0:"));
    assert!(common::contains(&body, b"6:peers618:"));
    assert_eq!(tracker.get_stats().tcp6_announces_handled, 1);
}

#[actix_web::test]
async fn test_http_real_ip_header() {
    let tracker = common::create_test_tracker();
    let mut http_config = HttpTrackersConfig::clone(&common::create_test_http_config());
    http_config.real_ip = String::from("X-Real-IP");
    let app = init_app!(tracker.clone(), Arc::new(http_config));
    let info_hash = common::random_info_hash();

    let req = test::TestRequest::get()
        .uri(&announce_uri("room", &info_hash, 6881, 0, ""))
        .insert_header(("X-Real-IP", "9.9.9.9"))
        .peer_addr(peer_addr("127.0.0.1:50000"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&announce_uri("room", &info_hash, 7000, 1, ""))
        .insert_header(("X-Real-IP", "not an ip"))
        .peer_addr(peer_addr("127.0.0.1:50000"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let swarms = tracker.torrents_sharding.namespace_swarms("room");
    assert_eq!(swarms.len(), 1);
    assert_eq!(swarms[0].1.seeds, 1);
}

#[actix_web::test]
async fn test_http_announce_missing_fields() {
    let tracker = common::create_test_tracker();
    let app = init_app!(tracker.clone(), common::create_test_http_config());

    let req = test::TestRequest::get()
        .uri("/room/announce?info_hash=abc&port=6881")
        .peer_addr(peer_addr("1.2.3.4:50000"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"d14:failure reason12:missing lefte");

    assert_eq!(tracker.torrents_sharding.swarm_totals().swarms, 0);
    assert_eq!(tracker.get_stats().tcp4_failure, 1);
}

#[actix_web::test]
async fn test_http_missing_namespace() {
    let tracker = common::create_test_tracker();
    let app = init_app!(tracker.clone(), common::create_test_http_config());

    for uri in ["/announce?info_hash=abc&port=6881&left=0", "/scrape?info_hash=abc"] {
        let req = test::TestRequest::get()
            .uri(uri)
            .peer_addr(peer_addr("1.2.3.4:50000"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = test::read_body(resp).await;
        assert!(common::contains(&body, b"missing namespace"));
    }
    assert_eq!(tracker.torrents_sharding.swarm_totals().swarms, 0);
}

#[actix_web::test]
async fn test_http_scrape() {
    let tracker = common::create_test_tracker();
    let app = init_app!(tracker.clone(), common::create_test_http_config());
    let info_hash = InfoHash::from(&b"abc"[..]);

    let req = test::TestRequest::get()
        .uri(&announce_uri("room", &info_hash, 6881, 10, ""))
        .peer_addr(peer_addr("1.2.3.4:50000"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/room/scrape?info_hash=abc")
        .peer_addr(peer_addr("1.2.3.4:50000"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"d5:filesd3:abcd8:completei0e10:downloadedi0e10:incompletei1eeee");

    let req = test::TestRequest::get()
        .uri("/room/scrape")
        .peer_addr(peer_addr("1.2.3.4:50000"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    assert_eq!(tracker.get_stats().tcp4_scrapes_handled, 2);
}

#[actix_web::test]
async fn test_http_not_found() {
    let tracker = common::create_test_tracker();
    let app = init_app!(tracker.clone(), common::create_test_http_config());

    let req = test::TestRequest::get()
        .uri("/room/unknown")
        .peer_addr(peer_addr("1.2.3.4:50000"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"d14:failure reason15:unknown requeste");
    assert_eq!(tracker.get_stats().tcp4_not_found, 1);
}

#[actix_web::test]
async fn test_http_cors_headers() {
    let tracker = common::create_test_tracker();
    let app = init_app!(tracker, common::create_test_http_config());

    let req = test::TestRequest::get()
        .uri("/room/scrape?info_hash=abc")
        .insert_header(("Origin", "http://localhost"))
        .peer_addr(peer_addr("1.2.3.4:50000"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.headers().contains_key("access-control-allow-origin"), "CORS headers should be present");
}
