//! Loading and normalization of repository indexes.

mod decoder;

use std::io::{BufReader, Read};

use exn::ResultExt;
use tracing::instrument;

use self::decoder::Decoder;
use crate::error::{ErrorKind, Result};
use crate::models::RepositoryIndex;
use crate::options::LoadOptions;

/// Decodes `index.xml` documents into a normalized [`RepositoryIndex`].
#[derive(Debug, Clone, Default)]
pub struct Loader {
    options: LoadOptions,
}
impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LoadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Reads a complete index document and normalizes it.
    ///
    /// After loading, apps are sorted by identifier, each app's packages are
    /// sorted by descending version code, and every app with at least one
    /// package has a current package.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Parse`] if the document is not well-formed XML,
    /// has no root element, or any field fails to decode. Nothing is returned
    /// on failure; there is no partial index.
    #[instrument(skip(self, source), fields(fallback = ?self.options.fallback, apps = tracing::field::Empty))]
    pub fn load(&self, source: impl Read) -> Result<RepositoryIndex> {
        let mut index = Decoder::new(BufReader::new(source)).index().or_raise(|| ErrorKind::Parse)?;
        self.normalize(&mut index);
        tracing::Span::current().record("apps", index.len());
        tracing::debug!(
            repo = %index.repo.name,
            packages = index.apps().iter().map(|app| app.packages().len()).sum::<usize>(),
            "loaded repository index"
        );
        Ok(index)
    }

    fn normalize(&self, index: &mut RepositoryIndex) {
        // Stable, so duplicated identifiers keep the order they were listed in.
        index.apps.sort_by(|a, b| a.id.cmp(&b.id));
        for app in &mut index.apps {
            app.normalize(self.options.fallback);
        }
    }
}

/// Loads an index with the default [`LoadOptions`].
///
/// # Examples
///
/// ```rust
/// let xml = r#"<?xml version="1.0" encoding="utf-8"?>
/// <fdroid>
///     <repo name="Example" timestamp="1420070400" version="12" maxage="14">
///         <description>An example repository.</description>
///     </repo>
///     <application id="org.example.notes">
///         <id>org.example.notes</id>
///         <name>Notes</name>
///         <marketvercode>2</marketvercode>
///         <package><version>1.0</version><versioncode>1</versioncode></package>
///         <package><version>3.0</version><versioncode>3</versioncode></package>
///         <package><version>2.0</version><versioncode>2</versioncode></package>
///     </application>
/// </fdroid>"#;
///
/// let index = fdcl_index::load(xml.as_bytes()).unwrap();
/// assert_eq!(index.repo.name, "Example");
/// let app = index.app("org.example.notes").unwrap();
/// assert_eq!(app.current_package().unwrap().version_name, "2.0");
/// ```
pub fn load(source: impl Read) -> Result<RepositoryIndex> {
    Loader::default().load(source)
}
