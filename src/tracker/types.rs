//! Type aliases for collection types.

/// `HashMap` keyed with ahash.
pub mod ahash_map;
