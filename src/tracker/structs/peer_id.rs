use smallvec::SmallVec;

/// Opaque peer identifier sent by the client; may be empty.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug, Default)]
pub struct PeerId(pub SmallVec<[u8; 20]>);
