use std::collections::BTreeMap;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::swarm_counts::SwarmCounts;

/// Scrape reply before bencoding, one entry per distinct requested hash.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct ScrapeResponse {
    pub files: BTreeMap<InfoHash, SwarmCounts>,
}
