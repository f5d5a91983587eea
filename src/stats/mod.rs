//! Request statistics.
//!
//! Atomic counters of handled requests, split by address family, plus the
//! timestamps of the periodic background runs. Swarm sizes are not counted
//! here; they are summed from the shards on demand.
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::stats::enums::stats_event::StatsEvent;
//!
//! tracker.update_stats(StatsEvent::Tcp4AnnouncesHandled, 1);
//! let stats = tracker.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshots).
pub mod structs;
