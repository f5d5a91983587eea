use std::ops::AddAssign;
use crate::tracker::structs::cleanup_stats::CleanupStats;

impl CleanupStats {
    pub fn is_empty(&self) -> bool {
        self.swarms == 0 && self.seeds == 0 && self.peers == 0
    }
}

impl AddAssign for CleanupStats {
    fn add_assign(&mut self, other: CleanupStats) {
        self.swarms += other.swarms;
        self.seeds += other.seeds;
        self.peers += other.peers;
    }
}
