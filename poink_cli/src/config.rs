//! PoinkCli Config
//!
//! The config file lives at `~/.poink/config.toml` unless `-c` names another
//! one. It picks the default chain, an optional catalog file that replaces the
//! built-in catalog, and the link builder settings.
use crate::error::Error;
use abscissa_core::tracing::debug;
use poink::{catalog::ChainCatalog, config::LinkBuilderConfig, link::LinkBuilder, CatalogError};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Chain selected when no `--chain` is given and no config sets one
pub const DEFAULT_CHAIN: &str = "ethereum";

/// PoinkCli Configuration
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct PoinkCliConfig {
    /// Catalog key of the chain commands act on
    pub default_chain: String,
    /// Catalog file used instead of the built-in catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    /// Host and player card settings for generated links
    pub link: LinkBuilderConfig,
}

impl Default for PoinkCliConfig {
    fn default() -> Self {
        PoinkCliConfig {
            default_chain: DEFAULT_CHAIN.to_string(),
            catalog: None,
            link: LinkBuilderConfig::default(),
        }
    }
}

impl PoinkCliConfig {
    /// Loads the configured catalog file, or the built-in catalog if none is set.
    pub fn load_catalog(&self) -> Result<ChainCatalog, CatalogError> {
        match &self.catalog {
            Some(path) => {
                debug!("loading catalog from {}", path.display());
                ChainCatalog::load(path)
            }
            None => ChainCatalog::builtin(),
        }
    }

    /// Link builder using the configured host and player card.
    pub fn link_builder(&self) -> LinkBuilder {
        LinkBuilder::new(self.link.clone())
    }
}

/// Builds a config path in the users home directory
pub fn get_config_path() -> Option<PathBuf> {
    let mut path = dirs::home_dir()?;
    path.push(".poink");
    path.push("config.toml");

    Some(path)
}

/// Initializes the poink config dir and file if they do not exist.
pub fn init() -> Result<PathBuf, Error> {
    let path = get_config_path().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "no home directory")
    })?;

    if let Some(config_dir) = path.parent() {
        if !config_dir.exists() {
            debug!("creating config directory {}", config_dir.display());
            fs::create_dir_all(config_dir)?;
        }
    }
    if !path.exists() {
        debug!("creating config file with default settings");
        let config_content = toml::to_string(&PoinkCliConfig::default())?;
        fs::write(&path, config_content)?;
    }

    Ok(path)
}
