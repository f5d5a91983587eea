use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            timestamp_run_timeout: self.stats.timestamp_run_timeout.load(Ordering::SeqCst),
            timestamp_run_console: self.stats.timestamp_run_console.load(Ordering::SeqCst),
            tcp4_connections_handled: self.stats.tcp4_connections_handled.load(Ordering::SeqCst),
            tcp4_announces_handled: self.stats.tcp4_announces_handled.load(Ordering::SeqCst),
            tcp4_scrapes_handled: self.stats.tcp4_scrapes_handled.load(Ordering::SeqCst),
            tcp4_not_found: self.stats.tcp4_not_found.load(Ordering::SeqCst),
            tcp4_failure: self.stats.tcp4_failure.load(Ordering::SeqCst),
            tcp6_connections_handled: self.stats.tcp6_connections_handled.load(Ordering::SeqCst),
            tcp6_announces_handled: self.stats.tcp6_announces_handled.load(Ordering::SeqCst),
            tcp6_scrapes_handled: self.stats.tcp6_scrapes_handled.load(Ordering::SeqCst),
            tcp6_not_found: self.stats.tcp6_not_found.load(Ordering::SeqCst),
            tcp6_failure: self.stats.tcp6_failure.load(Ordering::SeqCst),
        }
    }

    /// Adds `value` (which may be negative) to the counter behind `event`.
    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats_counter(event).fetch_add(value, Ordering::SeqCst);
    }

    /// Overwrites the counter behind `event`, used for the run timestamps.
    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats_counter(event).store(value, Ordering::SeqCst);
    }

    fn stats_counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::TimestampTimeout => &self.stats.timestamp_run_timeout,
            StatsEvent::TimestampConsole => &self.stats.timestamp_run_console,
            StatsEvent::Tcp4NotFound => &self.stats.tcp4_not_found,
            StatsEvent::Tcp4Failure => &self.stats.tcp4_failure,
            StatsEvent::Tcp4ConnectionsHandled => &self.stats.tcp4_connections_handled,
            StatsEvent::Tcp4AnnouncesHandled => &self.stats.tcp4_announces_handled,
            StatsEvent::Tcp4ScrapesHandled => &self.stats.tcp4_scrapes_handled,
            StatsEvent::Tcp6NotFound => &self.stats.tcp6_not_found,
            StatsEvent::Tcp6Failure => &self.stats.tcp6_failure,
            StatsEvent::Tcp6ConnectionsHandled => &self.stats.tcp6_connections_handled,
            StatsEvent::Tcp6AnnouncesHandled => &self.stats.tcp6_announces_handled,
            StatsEvent::Tcp6ScrapesHandled => &self.stats.tcp6_scrapes_handled,
        }
    }
}
