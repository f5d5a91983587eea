use ahash::AHasher;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;

/// `HashMap` hashed with ahash, used for the peer maps of a swarm.
pub type AHashMap<K, V> = HashMap<K, V, BuildHasherDefault<AHasher>>;
