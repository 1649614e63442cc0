/// Models for the app entries listed under each chain of a catalog
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use url::Url;

pub const OUTPUT_PLACEHOLDER: &str = "{output}";
pub const INPUT_PLACEHOLDER: &str = "{input}";
pub const CHAIN_ID_PLACEHOLDER: &str = "{chainId}";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppDescriptor {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub base_url: String,
    /// Fixed route appended to `base_url` for apps without parameters, e.g. a bridge page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<ParameterConfig>,
}

/// Describes how a user supplied token identifier is injected into an app's `base_url`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParameterConfig {
    Query(QueryParams),
    Path(PathParams),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QueryParams {
    pub input_param: String,
    pub output_param: String,
    pub default_input: String,
    /// Path suffix applied to `base_url` before the query string is appended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PathParams {
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_input: Option<String>,
}

impl AppDescriptor {
    /// Returns true if the app's link never depends on a user supplied token.
    pub fn is_static(&self) -> bool {
        self.params.is_none()
    }

    /// Checks that the descriptor can always produce an absolute URL.
    ///
    /// # Arguments
    ///
    /// * `chain` - The catalog key of the chain the app is listed under, used in error messages.
    /// * `chain_id` - The chain's numeric id, required when a format uses `{chainId}`.
    pub fn validate(&self, chain: &str, chain_id: Option<u64>) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidApp {
            chain: chain.to_string(),
            app: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("app name is empty"));
        }
        match Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => (),
            Ok(_) => return Err(invalid("base_url must use http or https")),
            Err(err) => return Err(invalid(&format!("base_url is not an absolute url ({})", err))),
        }

        let (format, default_input) = match &self.params {
            None => return Ok(()),
            Some(_) if self.route_path.is_some() => {
                return Err(invalid("route_path is only allowed on apps without params"))
            }
            Some(ParameterConfig::Query(query)) => {
                if query.input_param.is_empty() || query.output_param.is_empty() {
                    return Err(invalid("query params need both input_param and output_param"));
                }
                (query.format.as_deref(), Some(query.default_input.as_str()))
            }
            Some(ParameterConfig::Path(path)) => {
                if !path.format.contains(OUTPUT_PLACEHOLDER) {
                    return Err(invalid("path format has no {output} placeholder"));
                }
                (Some(path.format.as_str()), path.default_input.as_deref())
            }
        };

        if let Some(format) = format {
            if format.contains(INPUT_PLACEHOLDER) && default_input.is_none() {
                return Err(invalid("format uses {input} but no default_input is set"));
            }
            if format.contains(CHAIN_ID_PLACEHOLDER) && chain_id.is_none() {
                return Err(invalid("format uses {chainId} but the chain has no chain_id"));
            }
        }

        Ok(())
    }
}
