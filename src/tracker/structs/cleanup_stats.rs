/// What a sweep removed.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct CleanupStats {
    pub swarms: u64,
    pub seeds: u64,
    pub peers: u64,
}
