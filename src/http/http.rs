use std::fs::File;
use std::io::{BufReader, Error, ErrorKind};
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, error, info};
use crate::common::common::parse_query;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/announce").route(web::get().to(http_service_announce_no_namespace)));
        cfg.service(web::resource("/scrape").route(web::get().to(http_service_scrape_no_namespace)));
        cfg.service(web::resource("/{namespace}/announce").route(web::get().to(http_service_announce)));
        cfg.service(web::resource("/{namespace}/scrape").route(web::get().to(http_service_scrape)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

/// Builds one listener. The returned server still has to be awaited.
pub async fn http_service(
    addr: SocketAddr,
    torrent_tracker: Arc<TorrentTracker>,
    http_server_object: HttpTrackersConfig
) -> std::io::Result<(ServerHandle, Server)>
{
    let keep_alive = http_server_object.keep_alive;
    let request_timeout = http_server_object.request_timeout;
    let disconnect_timeout = http_server_object.disconnect_timeout;
    let worker_threads = http_server_object.threads as usize;
    let ssl = http_server_object.ssl;
    let tls_paths = (http_server_object.ssl_key.clone(), http_server_object.ssl_cert.clone());

    let service_data = Arc::new(HttpServiceData {
        torrent_tracker,
        http_trackers_config: Arc::new(http_server_object)
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(service_data.clone()))
    })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(request_timeout))
        .client_disconnect_timeout(Duration::from_secs(disconnect_timeout))
        .workers(worker_threads);

    let server = if ssl {
        info!("[HTTP] Starting server listener with SSL on {addr}");
        let tls_config = http_service_tls_config(&tls_paths.0, &tls_paths.1)?;
        server.bind_rustls_0_23((addr.ip(), addr.port()), tls_config)?
    } else {
        info!("[HTTP] Starting server listener on {addr}");
        server.bind((addr.ip(), addr.port()))?
    };
    let server = server.disable_signals().run();

    Ok((server.handle(), server))
}

pub fn http_service_tls_config(ssl_key: &str, ssl_cert: &str) -> std::io::Result<rustls::ServerConfig>
{
    let certs_file = &mut BufReader::new(File::open(ssl_cert)?);
    let key_file = &mut BufReader::new(File::open(ssl_key)?);

    let tls_certs = rustls_pemfile::certs(certs_file).collect::<Result<Vec<_>, _>>()?;
    let tls_key = rustls_pemfile::private_key(key_file)?
        .ok_or_else(|| Error::new(ErrorKind::InvalidData, format!("no private key found in {ssl_key}")))?;

    rustls::ServerConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
        .with_safe_default_protocol_versions()
        .map_err(|error| Error::new(ErrorKind::InvalidInput, error))?
        .with_no_client_auth()
        .with_single_cert(tls_certs, tls_key)
        .map_err(|error| Error::new(ErrorKind::InvalidData, error))
}

pub async fn http_service_announce(request: HttpRequest, path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    http_service_announce_handler(&request, path.as_str(), &data)
}

pub async fn http_service_announce_no_namespace(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    http_service_announce_handler(&request, "", &data)
}

pub fn http_service_announce_handler(request: &HttpRequest, namespace: &str, data: &HttpServiceData) -> HttpResponse
{
    let tracker = data.torrent_tracker.as_ref();
    let ip = match http_validate_ip(request, data) {
        Ok(ip) => ip,
        Err(response) => return response
    };

    debug!("[HTTP] Request from {ip}: Announce {namespace}");
    tracker.update_stats(if ip.is_ipv4() { StatsEvent::Tcp4AnnouncesHandled } else { StatsEvent::Tcp6AnnouncesHandled }, 1);

    let result = parse_query(Some(request.query_string().to_string()))
        .map_err(TrackerError::from)
        .and_then(|query| tracker.announce(namespace, ip, &query));

    match result {
        Ok(body) => HttpResponse::Ok().content_type(ContentType::plaintext()).body(body),
        Err(tracker_error) => http_service_error(ip, tracker, tracker_error)
    }
}

pub async fn http_service_scrape(request: HttpRequest, path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    http_service_scrape_handler(&request, path.as_str(), &data)
}

pub async fn http_service_scrape_no_namespace(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    http_service_scrape_handler(&request, "", &data)
}

pub fn http_service_scrape_handler(request: &HttpRequest, namespace: &str, data: &HttpServiceData) -> HttpResponse
{
    let tracker = data.torrent_tracker.as_ref();
    let ip = match http_validate_ip(request, data) {
        Ok(ip) => ip,
        Err(response) => return response
    };

    debug!("[HTTP] Request from {ip}: Scrape {namespace}");
    tracker.update_stats(if ip.is_ipv4() { StatsEvent::Tcp4ScrapesHandled } else { StatsEvent::Tcp6ScrapesHandled }, 1);

    let result = parse_query(Some(request.query_string().to_string()))
        .map_err(TrackerError::from)
        .and_then(|query| tracker.scrape(namespace, &query));

    match result {
        Ok(body) => HttpResponse::Ok().content_type(ContentType::plaintext()).body(body),
        Err(tracker_error) => http_service_error(ip, tracker, tracker_error)
    }
}

pub async fn http_service_not_found(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    if let Ok(ip) = http_validate_ip(&request, &data) {
        debug!("[HTTP] Request from {ip}: 404 Not Found {}", request.path());
        data.torrent_tracker.update_stats(if ip.is_ipv4() { StatsEvent::Tcp4NotFound } else { StatsEvent::Tcp6NotFound }, 1);
    }

    HttpResponse::NotFound()
        .content_type(ContentType::plaintext())
        .body(TrackerError::BadRequest(String::from("unknown request")).failure_body())
}

/// Renders `tracker_error` as a bencoded failure with its mapped status.
pub fn http_service_error(ip: IpAddr, tracker: &TorrentTracker, tracker_error: TrackerError) -> HttpResponse
{
    let status = tracker_error.status_code();
    if status.is_server_error() {
        error!("[HTTP] Request from {ip} failed: {tracker_error}");
        sentry::capture_error(&tracker_error);
    } else {
        debug!("[HTTP] Request from {ip} rejected: {tracker_error}");
    }
    tracker.update_stats(if ip.is_ipv4() { StatsEvent::Tcp4Failure } else { StatsEvent::Tcp6Failure }, 1);

    HttpResponse::build(status)
        .content_type(ContentType::plaintext())
        .body(tracker_error.failure_body())
}

/// The client address: the configured `real_ip` header when present, the
/// socket peer otherwise. IPv4-mapped addresses are returned as IPv4.
pub fn http_service_retrieve_remote_ip(request: &HttpRequest, http_trackers_config: &HttpTrackersConfig) -> Result<IpAddr, TrackerError>
{
    let real_ip = http_trackers_config.real_ip.as_str();
    if !real_ip.is_empty() {
        if let Some(header) = request.headers().get(real_ip) {
            let value = header.to_str()
                .map_err(|_| TrackerError::InvalidAddress(String::from("unreadable origin ip header")))?;
            return IpAddr::from_str(value.trim())
                .map(|ip| ip.to_canonical())
                .map_err(|_| TrackerError::InvalidAddress(value.to_string()));
        }
    }

    request.peer_addr()
        .map(|addr| addr.ip().to_canonical())
        .ok_or_else(|| TrackerError::InvalidAddress(String::from("unknown origin ip")))
}

pub fn http_validate_ip(request: &HttpRequest, data: &HttpServiceData) -> Result<IpAddr, HttpResponse>
{
    match http_service_retrieve_remote_ip(request, &data.http_trackers_config) {
        Ok(ip) => {
            http_service_stats_log(ip, &data.torrent_tracker);
            Ok(ip)
        }
        Err(tracker_error) => {
            debug!("[HTTP] Rejected request: {tracker_error}");
            Err(HttpResponse::build(tracker_error.status_code())
                .content_type(ContentType::plaintext())
                .body(tracker_error.failure_body()))
        }
    }
}

pub fn http_service_stats_log(ip: IpAddr, tracker: &TorrentTracker)
{
    if ip.is_ipv4() {
        tracker.update_stats(StatsEvent::Tcp4ConnectionsHandled, 1);
    } else {
        tracker.update_stats(StatsEvent::Tcp6ConnectionsHandled, 1);
    }
}
