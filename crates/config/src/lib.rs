//! Layered configuration for index loading and description rendering.
//!
//! Sources, from lowest to highest priority:
//!
//! 1. Built-in defaults.
//! 2. An optional configuration file (TOML, YAML or JSON, picked by extension).
//! 3. Environment variables prefixed with `FDCL_`, using `__` to separate
//!    nested keys (e.g. `FDCL_DESCRIBE__WIDTH=100`, `FDCL_INDEX__FALLBACK=newest`).

pub mod error;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use exn::ResultExt;
use fdcl_describe::RenderOptions;
use fdcl_index::LoadOptions;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ErrorKind, Result};

pub const ENV_PREFIX: &str = "FDCL_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How indexes are normalized after decoding.
    pub index: LoadOptions,
    /// How app descriptions are laid out.
    pub describe: RenderOptions,
}
impl Config {
    /// The per-user configuration file, if a home directory can be determined.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "fdcl").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads configuration from the default file location and the environment.
    pub fn load_default() -> Result<Self> {
        Self::load(Self::default_path().as_deref())
    }

    /// Loads configuration from defaults, `path` (if given), and the
    /// environment. A file that doesn't exist contributes nothing.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => figment.merge(Toml::file(path)),
                Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
                Some("json") => figment.merge(Json::file(path)),
                _ => exn::bail!(ErrorKind::UnsupportedFormat(path.to_path_buf())),
            };
        }
        let config: Config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .or_raise(|| ErrorKind::InvalidConfig)?;
        config.validate()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.describe.width == 0 {
            exn::bail!(ErrorKind::InvalidValue {
                key: "describe.width",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}
