use serde::{Deserialize, Serialize};

/// Plain copy of `StatsAtomics` taken at one moment.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_timeout: i64,
    pub timestamp_run_console: i64,
    pub tcp4_connections_handled: i64,
    pub tcp4_announces_handled: i64,
    pub tcp4_scrapes_handled: i64,
    pub tcp4_not_found: i64,
    pub tcp4_failure: i64,
    pub tcp6_connections_handled: i64,
    pub tcp6_announces_handled: i64,
    pub tcp6_scrapes_handled: i64,
    pub tcp6_not_found: i64,
    pub tcp6_failure: i64,
}
