use std::fmt::{Display, Formatter, Result as FmtResult};

use super::HexBytes;

/// A content digest tagged with the algorithm that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Hash {
    /// Algorithm tag as written in the index (e.g., "sha256")
    pub kind: String,
    pub digest: HexBytes,
}
impl Hash {
    pub fn new(kind: impl Into<String>, digest: impl Into<HexBytes>) -> Self {
        Self {
            kind: kind.into(),
            digest: digest.into(),
        }
    }
}

impl Display for Hash {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}:{}", self.kind, self.digest)
    }
}
