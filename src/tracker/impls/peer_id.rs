use std::fmt;
use std::fmt::Formatter;
use smallvec::SmallVec;
use crate::tracker::structs::peer_id::PeerId;

impl PeerId {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl From<&[u8]> for PeerId {
    fn from(data: &[u8]) -> PeerId {
        PeerId(SmallVec::from_slice(data))
    }
}

impl From<[u8; 20]> for PeerId {
    fn from(data: [u8; 20]) -> Self {
        PeerId(SmallVec::from_buf(data))
    }
}
