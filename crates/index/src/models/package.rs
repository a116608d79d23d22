use crate::codec::{CalendarDate, CommaList, Hash, HexBytes};

/// A single installable build of an app.
///
/// Integer fields are unsigned. An absent or empty value decodes as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Package {
    /// Human readable version (e.g., "1.4.2")
    pub version_name: String,
    /// Monotonic version number used for ordering and update checks.
    /// A negative value fails the load.
    pub version_code: u64,
    /// File size in bytes. A negative value fails the load.
    pub size: u64,
    /// Minimum supported platform API level. A negative value fails the load.
    pub min_sdk: u32,
    /// Maximum supported platform API level (0 if unbounded). A negative value
    /// fails the load.
    pub max_sdk: u32,
    /// Supported native ABIs (empty if the package has no native code)
    pub abis: CommaList,
    /// File name of the package, relative to the repository URL
    pub apk_name: String,
    /// File name of the matching source tarball, if published
    pub src_name: Option<String>,
    pub signature: HexBytes,
    /// Date the package was added to the repository
    pub added: Option<CalendarDate>,
    pub permissions: CommaList,
    pub features: CommaList,
    pub hash: Option<Hash>,
}
