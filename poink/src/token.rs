//! Token metadata lookup for the token identifiers users paste into links.
use crate::error::TokenError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

pub const ONE_INCH_API: &str = "https://api.1inch.io";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TokenMetadata {
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "logoURI", skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TokenListResponse {
    #[serde(default)]
    tokens: HashMap<String, TokenMetadata>,
}

/// A source of token metadata keyed by numeric chain id and token address.
#[async_trait]
pub trait TokenList: Send + Sync {
    async fn get_token(
        &self,
        chain_id: u64,
        address: &str,
    ) -> Result<Option<TokenMetadata>, TokenError>;
}

/// Token list served by the 1inch API (`/v5.0/<chain_id>/tokens`).
#[derive(Clone, Debug)]
pub struct OneInchTokenList {
    base_url: String,
    client: reqwest::Client,
}

impl Default for OneInchTokenList {
    fn default() -> Self {
        OneInchTokenList::new(ONE_INCH_API)
    }
}

impl OneInchTokenList {
    pub fn new(base_url: &str) -> Self {
        OneInchTokenList {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn tokens_url(&self, chain_id: u64) -> String {
        format!("{}/v5.0/{}/tokens", self.base_url, chain_id)
    }
}

#[async_trait]
impl TokenList for OneInchTokenList {
    async fn get_token(
        &self,
        chain_id: u64,
        address: &str,
    ) -> Result<Option<TokenMetadata>, TokenError> {
        let url = self.tokens_url(chain_id);
        debug!("fetching token list from {}", url);
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let mut tokens = parse_token_list(&body)?;

        Ok(tokens.remove(&address.to_lowercase()))
    }
}

/// Parses a token list document into a map keyed by lowercase address.
pub fn parse_token_list(body: &str) -> Result<HashMap<String, TokenMetadata>, TokenError> {
    let response: TokenListResponse = serde_json::from_str(body)?;

    Ok(response
        .tokens
        .into_iter()
        .map(|(address, token)| (address.to_lowercase(), token))
        .collect())
}

/// Metadata for native gas tokens, which are referred to by symbol rather than address.
pub fn native_token(identifier: &str) -> Option<TokenMetadata> {
    let name = match identifier.to_lowercase().as_str() {
        "eth" => "Ethereum",
        "avax" => "Avalanche",
        _ => return None,
    };

    Some(TokenMetadata {
        symbol: identifier.to_uppercase(),
        name: name.to_string(),
        decimals: 18,
        ..Default::default()
    })
}

/// Looks up `identifier` on `chain_id`, answering native tokens without consulting `list`.
pub async fn lookup_token<T>(
    list: &T,
    chain_id: u64,
    identifier: &str,
) -> Result<Option<TokenMetadata>, TokenError>
where
    T: TokenList + ?Sized,
{
    if let Some(token) = native_token(identifier) {
        return Ok(Some(token));
    }

    list.get_token(chain_id, identifier).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay::assay;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TOKEN_LIST: &str = r#"{
        "tokens": {
            "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48": {
                "symbol": "USDC",
                "name": "USD Coin",
                "decimals": 6,
                "address": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
                "logoURI": "https://tokens.1inch.io/0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48.png",
                "tags": ["tokens"]
            }
        }
    }"#;

    #[derive(Default)]
    struct StaticTokenList {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TokenList for StaticTokenList {
        async fn get_token(
            &self,
            _chain_id: u64,
            address: &str,
        ) -> Result<Option<TokenMetadata>, TokenError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(parse_token_list(TOKEN_LIST)?.remove(&address.to_lowercase()))
        }
    }

    #[assay]
    fn parses_token_list() {
        let tokens = parse_token_list(TOKEN_LIST).unwrap();
        let usdc = tokens
            .get("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48")
            .unwrap();

        assert_eq!(usdc.symbol, "USDC");
        assert_eq!(usdc.decimals, 6);
        assert!(usdc.logo_uri.is_some());
    }

    #[assay]
    fn rejects_malformed_token_list() {
        assert!(matches!(
            parse_token_list("<html>rate limited</html>"),
            Err(TokenError::InvalidTokenList(_))
        ));
    }

    #[assay]
    async fn native_tokens_skip_the_list() {
        let list = StaticTokenList::default();
        let token = lookup_token(&list, 1, "eth").await.unwrap().unwrap();

        assert_eq!(token.symbol, "ETH");
        assert_eq!(token.name, "Ethereum");
        assert_eq!(token.decimals, 18);
        assert_eq!(list.calls.load(Ordering::SeqCst), 0);
    }

    #[assay]
    async fn looks_up_addresses_case_insensitively() {
        let list = StaticTokenList::default();
        let token = lookup_token(&list, 1, "0xA0B86991C6218B36C1D19D4A2E9EB0CE3606EB48")
            .await
            .unwrap();

        assert_eq!(token.unwrap().name, "USD Coin");
        assert_eq!(list.calls.load(Ordering::SeqCst), 1);
        assert!(lookup_token(&list, 1, "0xdead").await.unwrap().is_none());
    }

    #[assay]
    fn builds_versioned_token_list_url() {
        let list = OneInchTokenList::new("https://api.1inch.io/");

        assert_eq!(list.tokens_url(8453), "https://api.1inch.io/v5.0/8453/tokens");
    }
}
