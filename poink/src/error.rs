use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("error parsing catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("error reading catalog file: {0}")]
    FileIO(String),
    #[error("unsupported chain: {0}")]
    UnsupportedChain(String),
    #[error("app '{app}' not found on chain '{chain}'")]
    UnknownApp { chain: String, app: String },
    #[error("app name '{app}' appears more than once on chain '{chain}'")]
    DuplicateApp { chain: String, app: String },
    #[error("invalid app '{app}' on chain '{chain}': {reason}")]
    InvalidApp {
        chain: String,
        app: String,
        reason: String,
    },
}

impl From<std::io::Error> for CatalogError {
    fn from(error: std::io::Error) -> CatalogError {
        CatalogError::FileIO(error.to_string())
    }
}

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("embed url has no 'url' parameter")]
    MissingUrl,
    #[error("invalid embed url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("embed parameter '{0}' is not valid UTF-8 once decoded")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("error during token list request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("error parsing token list: {0}")]
    InvalidTokenList(#[from] serde_json::Error),
    #[error("chain '{0}' has no numeric chain id to look tokens up with")]
    MissingChainId(String),
}
