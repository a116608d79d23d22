//! Decoding and normalization of F-Droid repository indexes (`index.xml`).
//!
//! [`load`] turns an index document into a [`RepositoryIndex`] whose apps are
//! ordered by identifier, whose packages are ordered by descending version
//! code, and where every app with at least one package knows its
//! [current package](models::App::current_package). Individual fields are
//! decoded through the value types in [`codec`].

pub mod codec;
pub mod error;
mod load;
pub mod models;
mod options;

pub use crate::load::{Loader, load};
pub use crate::models::{App, Package, RepositoryIndex};
pub use crate::options::{Fallback, LoadOptions};
