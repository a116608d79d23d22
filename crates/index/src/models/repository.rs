/// Metadata describing the repository an index was published by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repository {
    /// Display name of the repository
    pub name: String,
    /// Public key (hex-encoded certificate) used to sign the index
    pub pubkey: String,
    /// Unix timestamp of when the index was generated
    pub timestamp: i64,
    /// Base URL that package files are served from
    pub url: String,
    /// Index format version. A negative value fails the load.
    pub version: u32,
    /// Maximum age in days before clients should consider the index stale.
    /// A negative value fails the load.
    pub max_age: u32,
    pub description: String,
}
