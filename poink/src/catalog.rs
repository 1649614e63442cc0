//! Immutable chain -> app tables that drive link construction.
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path};
use tracing::debug;

pub use self::{app::*, chain::*};

pub mod app;
pub mod chain;

#[cfg(feature = "builtin-catalog")]
const BUILTIN_CATALOG: &str = include_str!("catalog/builtin.toml");

/// A validated set of chains keyed by chain identifier (e.g. `ethereum`).
///
/// The TOML layout is:
///
/// ```toml
/// [chains.ethereum]
/// name = "Ethereum"
/// chain_id = 1
///
/// [[chains.ethereum.apps]]
/// name = "CoW Swap"
/// base_url = "https://swap.cow.fi"
///
/// [chains.ethereum.apps.params]
/// type = "path"
/// format = "/#/1/swap/ETH/{output}"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChainCatalog {
    #[serde(default)]
    chains: BTreeMap<String, ChainDescriptor>,
}

impl ChainCatalog {
    /// Returns the catalog curated for the poink site.
    #[cfg(feature = "builtin-catalog")]
    pub fn builtin() -> Result<ChainCatalog, CatalogError> {
        ChainCatalog::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parses and validates a catalog from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<ChainCatalog, CatalogError> {
        let catalog: ChainCatalog = toml::from_str(content)?;
        catalog.validate()?;
        debug!("loaded catalog with {} chains", catalog.chains.len());

        Ok(catalog)
    }

    /// Reads a catalog file from disk.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of a TOML file laid out as described on [`ChainCatalog`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ChainCatalog, CatalogError> {
        let path = path.as_ref();
        debug!("reading catalog from {}", path.display());
        let content = fs::read_to_string(path)?;

        ChainCatalog::from_toml_str(&content)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        self.chains
            .iter()
            .try_for_each(|(key, chain)| chain.validate(key))
    }

    pub fn chain(&self, key: &str) -> Result<&ChainDescriptor, CatalogError> {
        self.chains
            .get(key)
            .ok_or_else(|| CatalogError::UnsupportedChain(key.to_string()))
    }

    pub fn app(&self, chain: &str, name: &str) -> Result<&AppDescriptor, CatalogError> {
        self.chain(chain)?
            .app(name)
            .ok_or_else(|| CatalogError::UnknownApp {
                chain: chain.to_string(),
                app: name.to_string(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.chains.contains_key(key)
    }

    pub fn chain_ids(&self) -> Vec<&str> {
        self.chains.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChainDescriptor)> {
        self.chains.iter().map(|(key, chain)| (key.as_str(), chain))
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}
