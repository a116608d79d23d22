mod app;
mod index;
mod links;
mod package;
mod repository;

pub use self::app::App;
pub use self::index::RepositoryIndex;
pub use self::links::Links;
pub use self::package::Package;
pub use self::repository::Repository;
