use super::{App, Repository};

/// A decoded and normalized repository index.
///
/// Apps are ordered by identifier, and each app's packages by descending
/// version code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryIndex {
    pub repo: Repository,
    pub(crate) apps: Vec<App>,
}
impl RepositoryIndex {
    /// All apps, ordered by identifier.
    pub fn apps(&self) -> &[App] {
        &self.apps
    }

    /// Looks up an app by its identifier.
    ///
    /// Identifiers are expected to be unique; if the index lists one more than
    /// once, any of the matching apps may be returned.
    pub fn app(&self, id: &str) -> Option<&App> {
        self.apps.binary_search_by(|app| app.id.as_str().cmp(id)).ok().map(|i| &self.apps[i])
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}
impl<'a> IntoIterator for &'a RepositoryIndex {
    type Item = &'a App;
    type IntoIter = std::slice::Iter<'a, App>;
    fn into_iter(self) -> Self::IntoIter {
        self.apps.iter()
    }
}
