use serde::{Deserialize, Serialize};
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracker_config::TrackerConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub tracker_config: TrackerConfig,
    pub sentry_config: SentryConfig,
    pub http_server: Vec<HttpTrackersConfig>
}
