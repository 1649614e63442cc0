//! Deep link construction.
//!
//! A [`LinkBuilder`] turns an [`AppDescriptor`] and a user supplied token identifier into the
//! destination URL of the target app, and wraps that URL into an embed URL pointing at the
//! viewer page of the configured host. Building links never fails: malformed tokens simply
//! produce malformed URLs for the target app to reject.
use crate::{
    catalog::{
        AppDescriptor, ChainDescriptor, ParameterConfig, CHAIN_ID_PLACEHOLDER, INPUT_PLACEHOLDER,
        OUTPUT_PLACEHOLDER,
    },
    config::LinkBuilderConfig,
    utils,
};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub use self::embed::*;

pub mod embed;

/// Output of link construction. Both values are recomputed whenever the token changes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneratedLink {
    pub destination_url: String,
    pub embed_url: String,
}

/// Per-generation context: which chain the link is for, where the viewer returns to, and the
/// cache busting timestamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkContext<'a> {
    pub chain: Option<&'a str>,
    pub chain_id: Option<u64>,
    pub back: Option<&'a str>,
    pub timestamp: u64,
}

impl<'a> LinkContext<'a> {
    pub fn new(timestamp: u64) -> Self {
        LinkContext {
            timestamp,
            ..Default::default()
        }
    }

    /// Context for a link generated from a chain's app page.
    ///
    /// # Arguments
    ///
    /// * `key` - The chain's catalog key, sent as the embed `chain` parameter.
    /// * `chain` - The chain descriptor, providing the numeric id for `{chainId}`.
    /// * `timestamp` - Cache busting value in milliseconds.
    pub fn for_chain(key: &'a str, chain: &ChainDescriptor, timestamp: u64) -> Self {
        LinkContext {
            chain: Some(key),
            chain_id: chain.chain_id,
            back: None,
            timestamp,
        }
    }

    pub fn with_back(mut self, back: &'a str) -> Self {
        self.back = Some(back);
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct LinkBuilder {
    config: LinkBuilderConfig,
}

impl LinkBuilder {
    pub fn new(config: LinkBuilderConfig) -> Self {
        LinkBuilder { config }
    }

    pub fn config(&self) -> &LinkBuilderConfig {
        &self.config
    }

    /// Builds the URL that opens `app` with `user_token` pre-filled.
    ///
    /// Static apps (no `params`) resolve to `base_url` + `route_path` and ignore the token.
    /// Query apps append `<input_param>=<default_input>&<output_param>=<user_token>` after the
    /// optional `format` suffix. Path apps append `format` with every `{output}`, `{input}`
    /// and `{chainId}` placeholder substituted. The token is inserted verbatim.
    pub fn build_destination_url(
        &self,
        app: &AppDescriptor,
        user_token: &str,
        chain_id: Option<u64>,
    ) -> String {
        let mut url = app.base_url.clone();

        match &app.params {
            None => url.push_str(app.route_path.as_deref().unwrap_or_default()),
            Some(ParameterConfig::Query(query)) => {
                if let Some(format) = &query.format {
                    url.push_str(&substitute(
                        format,
                        user_token,
                        Some(query.default_input.as_str()),
                        chain_id,
                    ));
                }
                // a format may already carry a query string of its own
                let separator = if url.contains('?') { '&' } else { '?' };
                let _ = write!(
                    url,
                    "{}{}={}&{}={}",
                    separator,
                    query.input_param,
                    query.default_input,
                    query.output_param,
                    user_token
                );
            }
            Some(ParameterConfig::Path(path)) => url.push_str(&substitute(
                &path.format,
                user_token,
                path.default_input.as_deref(),
                chain_id,
            )),
        }

        url
    }

    /// Wraps `destination_url` into a link to the embed viewer page.
    ///
    /// `destination_url` and `back` are each percent-encoded exactly once. `timestamp` is
    /// carried as the trailing `t` parameter and has no meaning beyond cache busting.
    pub fn build_embed_url(
        &self,
        destination_url: &str,
        back: Option<&str>,
        chain: Option<&str>,
        timestamp: u64,
    ) -> String {
        let mut url = format!(
            "https://{}/embed?url={}",
            self.config.host,
            utils::encode_component(destination_url)
        );
        if let Some(chain) = chain {
            let _ = write!(url, "&chain={}", utils::encode_component(chain));
        }
        if let Some(back) = back {
            let _ = write!(url, "&back={}", utils::encode_component(back));
        }
        let _ = write!(url, "&t={}", timestamp);

        url
    }

    pub fn generate(
        &self,
        app: &AppDescriptor,
        user_token: &str,
        context: &LinkContext<'_>,
    ) -> GeneratedLink {
        let destination_url = self.build_destination_url(app, user_token, context.chain_id);
        let embed_url = self.build_embed_url(
            &destination_url,
            context.back,
            context.chain,
            context.timestamp,
        );

        GeneratedLink {
            destination_url,
            embed_url,
        }
    }

    /// Human readable variant of the embed URL with the destination left unencoded. Only for
    /// display; it does not round-trip through [`EmbedTarget::parse`].
    pub fn build_display_url(&self, destination_url: &str, timestamp: u64) -> String {
        format!(
            "https://{}/embed?url={}&t={}",
            self.config.host, destination_url, timestamp
        )
    }

    /// Player URL of a catalog page such as `/ethereum` or `/ethglobal/base`.
    pub fn chain_page_url(&self, route: &str, timestamp: u64) -> String {
        format!("https://{}{}", self.config.host, back_route(route, timestamp))
    }
}

/// The relative route the embed viewer returns to, e.g. `/ethereum?t=1700000000000`.
pub fn back_route(route: &str, timestamp: u64) -> String {
    format!("{}?t={}", route, timestamp)
}

/// Cache busting timestamp: the current time in milliseconds.
pub fn current_timestamp_millis() -> u64 {
    utils::now_millis()
}

fn substitute(
    format: &str,
    output: &str,
    input: Option<&str>,
    chain_id: Option<u64>,
) -> String {
    let chain_id = chain_id.map(|id| id.to_string()).unwrap_or_default();

    // the token goes in last so it is never scanned for placeholders itself
    format
        .replace(CHAIN_ID_PLACEHOLDER, &chain_id)
        .replace(INPUT_PLACEHOLDER, input.unwrap_or_default())
        .replace(OUTPUT_PLACEHOLDER, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PathParams, QueryParams};
    use assay::assay;

    fn builder() -> LinkBuilder {
        LinkBuilder::new(LinkBuilderConfig {
            host: "poink.test".to_string(),
            ..Default::default()
        })
    }

    fn query_app(base_url: &str, format: Option<&str>) -> AppDescriptor {
        AppDescriptor {
            name: "Raydium".to_string(),
            base_url: base_url.to_string(),
            params: Some(ParameterConfig::Query(QueryParams {
                input_param: "inputMint".to_string(),
                output_param: "outputMint".to_string(),
                default_input: "sol".to_string(),
                format: format.map(str::to_string),
            })),
            ..Default::default()
        }
    }

    fn path_app(format: &str, default_input: Option<&str>) -> AppDescriptor {
        AppDescriptor {
            name: "CoW Swap".to_string(),
            base_url: "https://swap.cow.fi".to_string(),
            params: Some(ParameterConfig::Path(PathParams {
                format: format.to_string(),
                default_input: default_input.map(str::to_string),
            })),
            ..Default::default()
        }
    }

    #[assay]
    fn query_link() {
        let app = query_app("https://raydium.io/swap", None);

        assert_eq!(
            builder().build_destination_url(&app, "EPjFW...", None),
            "https://raydium.io/swap?inputMint=sol&outputMint=EPjFW..."
        );
    }

    #[assay]
    fn query_link_applies_format_before_query_string() {
        let app = query_app("https://app.example.fi", Some("/swap/{chainId}"));

        assert_eq!(
            builder().build_destination_url(&app, "TOKEN", Some(747)),
            "https://app.example.fi/swap/747?inputMint=sol&outputMint=TOKEN"
        );
    }

    #[assay]
    fn query_link_joins_an_existing_query_string() {
        let app = query_app("https://app.increment.fi/swap", Some("?in={input}&out={output}"));

        assert_eq!(
            builder().build_destination_url(&app, "TOKEN", None),
            "https://app.increment.fi/swap?in=sol&out=TOKEN&inputMint=sol&outputMint=TOKEN"
        );
    }

    #[assay]
    fn path_link() {
        let app = path_app("/#/1/swap/ETH/{output}", None);

        assert_eq!(
            builder().build_destination_url(&app, "0xTOKEN", None),
            "https://swap.cow.fi/#/1/swap/ETH/0xTOKEN"
        );
    }

    #[assay]
    fn path_link_substitutes_every_placeholder() {
        let app = path_app("/#/{chainId}/swap/{input}/{output}?to={output}", Some("WETH"));
        let url = builder().build_destination_url(&app, "0xTOKEN", Some(8453));

        assert_eq!(url, "https://swap.cow.fi/#/8453/swap/WETH/0xTOKEN?to=0xTOKEN");
    }

    #[assay]
    fn missing_placeholder_values_leave_no_placeholder() {
        let app = path_app("/#/{chainId}/swap/{input}/{output}", None);
        let url = builder().build_destination_url(&app, "0xTOKEN", None);

        assert_eq!(url, "https://swap.cow.fi/#//swap//0xTOKEN");
        assert!(!url.contains('{') && !url.contains('}'));
    }

    #[assay]
    fn static_link_ignores_token() {
        let app = AppDescriptor {
            name: "AsteroNeo Bridge".to_string(),
            base_url: "https://app.asteroneo.com".to_string(),
            route_path: Some("/#/bridge".to_string()),
            ..Default::default()
        };
        let builder = builder();

        assert_eq!(
            builder.build_destination_url(&app, "", None),
            "https://app.asteroneo.com/#/bridge"
        );
        assert_eq!(
            builder.build_destination_url(&app, "0xTOKEN", Some(1)),
            "https://app.asteroneo.com/#/bridge"
        );
    }

    #[assay]
    fn embed_url_without_optional_parts() {
        assert_eq!(
            builder().build_embed_url("https://app.uniswap.org?x=1&y=2", None, None, 1700000000000),
            "https://poink.test/embed?url=https%3A%2F%2Fapp.uniswap.org%3Fx%3D1%26y%3D2&t=1700000000000"
        );
    }

    #[assay]
    fn embed_url_with_chain_and_back() {
        let back = back_route("/ethereum", 123);

        assert_eq!(
            builder().build_embed_url("https://swap.cow.fi", Some(&back), Some("ethereum"), 456),
            "https://poink.test/embed?url=https%3A%2F%2Fswap.cow.fi&chain=ethereum&back=%2Fethereum%3Ft%3D123&t=456"
        );
    }

    #[assay]
    fn generate_uses_chain_context() {
        let chain = ChainDescriptor {
            name: "Base".to_string(),
            chain_id: Some(8453),
            ..Default::default()
        };
        let app = path_app("/#/{chainId}/swap/WETH/{output}", None);
        let context = LinkContext::for_chain("base", &chain, 99).with_back("/ethglobal/base?t=98");

        let link = builder().generate(&app, "0xTOKEN", &context);

        assert_eq!(link.destination_url, "https://swap.cow.fi/#/8453/swap/WETH/0xTOKEN");
        assert_eq!(
            link.embed_url,
            "https://poink.test/embed?url=https%3A%2F%2Fswap.cow.fi%2F%23%2F8453%2Fswap%2FWETH%2F0xTOKEN&chain=base&back=%2Fethglobal%2Fbase%3Ft%3D98&t=99"
        );
    }

    #[assay]
    fn display_and_page_urls() {
        let builder = builder();

        assert_eq!(
            builder.build_display_url("https://raydium.io/swap?inputMint=sol", 5),
            "https://poink.test/embed?url=https://raydium.io/swap?inputMint=sol&t=5"
        );
        assert_eq!(
            builder.chain_page_url("/ethglobal/arbitrum", 5),
            "https://poink.test/ethglobal/arbitrum?t=5"
        );
    }
}
