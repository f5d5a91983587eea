use std::fmt;
use std::fmt::Formatter;
use smallvec::SmallVec;
use crate::tracker::structs::info_hash::InfoHash;

impl InfoHash {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl From<&[u8]> for InfoHash {
    fn from(data: &[u8]) -> InfoHash {
        InfoHash(SmallVec::from_slice(data))
    }
}

impl From<[u8; 20]> for InfoHash {
    fn from(data: [u8; 20]) -> Self {
        InfoHash(SmallVec::from_buf(data))
    }
}
