//! BitTorrent info hash identifier.

use smallvec::SmallVec;

/// An opaque info hash as received from the client.
///
/// Real clients send the 20-byte SHA-1 digest of the torrent's info dictionary,
/// which fits inline; any other non-empty byte string is accepted and stored as is.
///
/// # Example
///
/// ```rust
/// use swarm_tracker::tracker::structs::info_hash::InfoHash;
///
/// let hash = InfoHash::from([0u8; 20]);
/// assert_eq!(hash.as_bytes().len(), 20);
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub struct InfoHash(pub SmallVec<[u8; 20]>);
