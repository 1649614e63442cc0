use crate::{catalog::app::AppDescriptor, error::CatalogError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainDescriptor {
    pub name: String,
    pub icon: String,
    /// Numeric network id substituted for `{chainId}` in app formats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    /// Prefix of the chain's page route, e.g. `/ethglobal` for `/ethglobal/base`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_prefix: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default = "Vec::new")]
    pub apps: Vec<AppDescriptor>,
}

impl ChainDescriptor {
    pub fn app(&self, name: &str) -> Option<&AppDescriptor> {
        self.apps.iter().find(|app| app.name == name)
    }

    /// Relative route of the chain's app page, without any query string.
    pub fn page_route(&self, key: &str) -> String {
        format!("{}/{}", self.route_prefix.as_deref().unwrap_or_default(), key)
    }

    pub fn validate(&self, key: &str) -> Result<(), CatalogError> {
        let mut names = HashSet::with_capacity(self.apps.len());

        for app in &self.apps {
            if !names.insert(app.name.as_str()) {
                return Err(CatalogError::DuplicateApp {
                    chain: key.to_string(),
                    app: app.name.clone(),
                });
            }
            app.validate(key, self.chain_id)?;
        }

        Ok(())
    }
}
