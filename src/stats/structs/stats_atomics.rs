use std::sync::atomic::AtomicI64;

#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_timeout: AtomicI64,
    pub timestamp_run_console: AtomicI64,
    pub tcp4_connections_handled: AtomicI64,
    pub tcp4_announces_handled: AtomicI64,
    pub tcp4_scrapes_handled: AtomicI64,
    pub tcp4_not_found: AtomicI64,
    pub tcp4_failure: AtomicI64,
    pub tcp6_connections_handled: AtomicI64,
    pub tcp6_announces_handled: AtomicI64,
    pub tcp6_scrapes_handled: AtomicI64,
    pub tcp6_not_found: AtomicI64,
    pub tcp6_failure: AtomicI64,
}
