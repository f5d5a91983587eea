use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{debug, error, info, log_enabled, Level};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use swarm_tracker::common::common::setup_logging;
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::http::http::http_service;
use swarm_tracker::stats::enums::stats_event::StatsEvent;
use swarm_tracker::structs::Cli;
use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(error) => {
            eprintln!("[CONFIG] {error}");
            exit(101)
        }
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("[BOOT] Unable to initialize logging: {error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let _sentry_guard: Option<ClientInitGuard> = config.sentry_config.enabled.then(|| {
        sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            ..Default::default()
        }))
    });

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tracker = Arc::new(TorrentTracker::new(config.clone()));
            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to register the shutdown handler");
                    exit(1);
                }
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let mut http_handles = Vec::new();
            let mut http_futures = Vec::new();
            for http_server_object in config.http_server.iter().filter(|server| server.enabled) {
                let address: SocketAddr = http_server_object.bind_address.parse()
                    .map_err(|error| std::io::Error::new(std::io::ErrorKind::InvalidInput, error))?;
                let (handle, future) = match http_service(address, tracker.clone(), http_server_object.clone()).await {
                    Ok(server) => server,
                    Err(error) => {
                        error!("[HTTP] Unable to start listener on {address}: {error}");
                        sentry::capture_error(&error);
                        exit(1);
                    }
                };
                http_handles.push(handle);
                http_futures.push(future);
            }

            if !http_futures.is_empty() {
                tokio::spawn(async move {
                    if let Err(error) = try_join_all(http_futures).await {
                        error!("[HTTP] Server stopped with error: {error}");
                    }
                });
            }

            let stats_handler = tokio_shutdown.clone();
            let tracker_spawn_stats = tracker.clone();
            let console_interval = config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            tracker_spawn_stats.set_stats(StatsEvent::TimestampConsole, chrono::Utc::now().timestamp());
                            let totals = tracker_spawn_stats.torrents_sharding.swarm_totals();
                            let stats = tracker_spawn_stats.get_stats();

                            info!(
                                "[STATS] Swarms: {} - Seeds: {} - Peers: {} - Completed: {}",
                                totals.swarms, totals.seeds, totals.peers, totals.completed
                            );
                            info!(
                                "[STATS TCP] IPv4: Conn:{} A:{} S:{} F:{} 404:{} | IPv6: Conn:{} A:{} S:{} F:{} 404:{}",
                                stats.tcp4_connections_handled, stats.tcp4_announces_handled, stats.tcp4_scrapes_handled,
                                stats.tcp4_failure, stats.tcp4_not_found,
                                stats.tcp6_connections_handled, stats.tcp6_announces_handled, stats.tcp6_scrapes_handled,
                                stats.tcp6_failure, stats.tcp6_not_found
                            );
                            for (namespace, totals) in tracker_spawn_stats.torrents_sharding.namespace_totals() {
                                info!(
                                    "[STATS] Namespace: {namespace} - Swarms: {} - Seeds: {} - Peers: {} - Completed: {}",
                                    totals.swarms, totals.seeds, totals.peers, totals.completed
                                );
                                if log_enabled!(Level::Debug) {
                                    for (info_hash, counts) in tracker_spawn_stats.torrents_sharding.namespace_swarms(&namespace) {
                                        debug!(
                                            "[STATS] {namespace}/{info_hash} - Seeds: {} - Peers: {} - Completed: {}",
                                            counts.seeds, counts.peers, counts.completed
                                        );
                                    }
                                }
                            }
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            let cleanup_handler = tokio_shutdown.clone();
            let cleanup_interval = config.tracker_config.peers_cleanup_interval;
            let torrents_sharding = tracker.torrents_sharding.clone();
            tokio::spawn(torrents_sharding.cleanup_threads(tracker.clone(), cleanup_handler, Duration::from_secs(cleanup_interval)));

            if let Err(error) = tokio::signal::ctrl_c().await {
                error!("[BOOT] Unable to listen for shutdown signal: {error}");
            }
            info!("Shutdown request received, shutting down...");

            for handle in http_handles {
                handle.stop(true).await;
            }
            tokio_shutdown.handle().await;
            tokio::time::sleep(Duration::from_secs(1)).await;

            info!("Server shutting down completed");
            Ok(())
        })
}
