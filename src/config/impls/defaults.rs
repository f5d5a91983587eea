use std::thread::available_parallelism;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracker_config::TrackerConfig;

impl Default for Configuration {
    fn default() -> Self {
        Configuration::init()
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            tracker_id: String::new(),
            request_interval: 1800,
            request_interval_minimum: 900,
            peers_timeout: 2700,
            peers_cleanup_interval: 300,
            shards: 256,
            numwant_default: 30,
            numwant_max: 200,
        }
    }
}

impl Default for HttpTrackersConfig {
    fn default() -> Self {
        HttpTrackersConfig {
            enabled: true,
            bind_address: String::from("0.0.0.0:6969"),
            real_ip: String::new(),
            keep_alive: 60,
            request_timeout: 15,
            disconnect_timeout: 15,
            threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(4),
            ssl: false,
            ssl_key: String::new(),
            ssl_cert: String::new(),
        }
    }
}

impl Default for SentryConfig {
    fn default() -> Self {
        SentryConfig {
            enabled: false,
            dsn: String::new(),
            debug: false,
            sample_rate: 1.0,
            max_breadcrumbs: 100,
            attach_stacktrace: true,
            send_default_pii: false,
            traces_sample_rate: 1.0,
        }
    }
}
