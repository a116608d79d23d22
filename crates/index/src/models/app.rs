use std::cmp::Reverse;

use super::{Links, Package};
use crate::codec::CommaList;
use crate::options::Fallback;

/// An application listed in the repository, along with every published build.
///
/// The package list and the current package are fixed once the index has been
/// loaded, so they're only reachable through [`packages`](Self::packages) and
/// [`current_package`](Self::current_package).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct App {
    /// Application identifier (e.g., "org.fdroid.fdroid")
    pub id: String,
    pub name: String,
    /// One-line summary
    pub summary: String,
    /// Long description in the restricted HTML-like description markup
    pub description: String,
    pub license: String,
    pub categories: CommaList,
    pub links: Links,
    /// Version name the repository recommends
    pub market_version: String,
    /// Version code the repository recommends (0 if unset). A negative value
    /// fails the load.
    pub market_version_code: u64,
    pub(crate) packages: Vec<Package>,
    pub(crate) current: Option<usize>,
}
impl App {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// All packages, ordered from the highest version code to the lowest.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// The package recommended for installation, or `None` if the app has no
    /// packages at all.
    pub fn current_package(&self) -> Option<&Package> {
        self.current.and_then(|i| self.packages.get(i))
    }

    /// Orders packages by descending version code and selects the current one.
    ///
    /// The sort is stable: builds sharing a version code (one per ABI, usually)
    /// stay in the order the index listed them.
    pub(crate) fn normalize(&mut self, fallback: Fallback) {
        self.packages.sort_by_key(|package| Reverse(package.version_code));
        self.current = self.select_current(fallback);
    }

    /// Walks packages from newest to oldest and stops at the first one the
    /// market version code covers. When nothing is covered (no recommendation,
    /// or a recommendation older than every build) the [`Fallback`] decides.
    fn select_current(&self, fallback: Fallback) -> Option<usize> {
        if self.packages.is_empty() {
            return None;
        }
        let covered = self.packages.iter().position(|package| self.market_version_code >= package.version_code);
        Some(covered.unwrap_or(match fallback {
            Fallback::Oldest => self.packages.len() - 1,
            Fallback::Newest => 0,
        }))
    }
}
