use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::swarm_key::SwarmKey;

impl SwarmKey {
    pub fn new(namespace: &str, info_hash: &InfoHash) -> SwarmKey {
        SwarmKey {
            namespace: namespace.to_string(),
            info_hash: info_hash.clone(),
        }
    }
}
