//! Loader options.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which package becomes current when the market version code doesn't cover
/// any published build (it is unset, or older than every package).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum Fallback {
    /// Select the package with the lowest version code.
    ///
    /// This matches how F-Droid clients have historically behaved, even
    /// though it recommends the oldest build when no recommendation exists.
    #[default]
    Oldest,
    /// Select the package with the highest version code.
    Newest,
}

/// Options controlling how an index is normalized after decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct LoadOptions {
    pub fallback: Fallback,
}
